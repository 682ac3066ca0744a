use nf_core::NoiseError;

/// RGBA8 pixel buffer holding a rasterized noise field.
///
/// Pixels follow the field's sample order: pixel `(x, y)` is at index
/// `x * height + y`, four bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RasterImage {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Allocate a transparent black image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * Self::BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / Self::BYTES_PER_PIXEL
    }

    /// Pixel at `(x, y)`, or `None` when either coordinate is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (x * self.height + y) * Self::BYTES_PER_PIXEL;
        let p = self.data.get(idx..idx + Self::BYTES_PER_PIXEL)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Iterate over every pixel in buffer order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(Self::BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Raw RGBA bytes, ready for upload or encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Convert a normalized sample to an opaque gray pixel.
/// Values outside [0, 1] are clamped to black or white.
pub fn grayscale_to_rgba(value: f64) -> [u8; 4] {
    let gray = (value.clamp(0.0, 1.0) * 255.0) as u8;
    [gray, gray, gray, 255]
}

/// Rasterize normalized samples into a `width` x `height` grayscale image.
///
/// `existing` is overwritten in place when its dimensions already match;
/// otherwise a new buffer is allocated.
///
/// # Errors
/// [`NoiseError::DimensionMismatch`] if `samples.len() != width * height`.
pub fn rasterize(
    samples: &[f64],
    width: usize,
    height: usize,
    existing: Option<RasterImage>,
) -> Result<RasterImage, NoiseError> {
    if width.checked_mul(height) != Some(samples.len()) {
        return Err(NoiseError::DimensionMismatch {
            len: samples.len(),
            width,
            height,
        });
    }

    let mut image = match existing {
        Some(image) if image.width == width && image.height == height => image,
        _ => RasterImage::new(width, height),
    };

    for (pixel, &value) in image
        .data
        .chunks_exact_mut(RasterImage::BYTES_PER_PIXEL)
        .zip(samples)
    {
        pixel.copy_from_slice(&grayscale_to_rgba(value));
    }

    Ok(image)
}
