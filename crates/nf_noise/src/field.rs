use bevy::log::{debug, warn};
use bevy::math::DVec2;
use nf_core::{NoiseConfig, NoiseError, NoiseKernel};
use rayon::prelude::*;

use crate::kernel::Kernel;
use crate::octaves::OctaveOffsets;
use crate::progress::GenerationProgress;
use crate::raster::{rasterize, RasterImage};

/// A square grid of noise samples normalized into [0, 1].
///
/// Samples are stored flat with `x` as the slow axis: the sample for cell
/// `(x, y)` lives at index `x * resolution + y`.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    resolution: usize,
    samples: Vec<f64>,
}

impl NoiseField {
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at cell `(x, y)`, or `None` when either coordinate is off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.resolution || y >= self.resolution {
            return None;
        }
        self.samples.get(x * self.resolution + y).copied()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Smallest and largest sample, or `None` for an empty field.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        Some(min_max(&self.samples))
    }

    /// Rasterize this field into a grayscale image of the same dimensions.
    pub fn to_image(&self, existing: Option<RasterImage>) -> Result<RasterImage, NoiseError> {
        rasterize(&self.samples, self.resolution, self.resolution, existing)
    }
}

/// Generate a normalized multi-octave noise field.
///
/// # Errors
/// Returns [`NoiseError::InvalidOctaves`] or [`NoiseError::InvalidResolution`]
/// before sampling anything when either count is zero.
pub fn generate_field(config: &NoiseConfig) -> Result<NoiseField, NoiseError> {
    build_field(config, None)
}

/// Same as [`generate_field`], reporting completed samples to `progress` as
/// each row finishes.
pub fn generate_field_with_progress(
    config: &NoiseConfig,
    progress: &GenerationProgress,
) -> Result<NoiseField, NoiseError> {
    build_field(config, Some(progress))
}

fn build_field(
    config: &NoiseConfig,
    progress: Option<&GenerationProgress>,
) -> Result<NoiseField, NoiseError> {
    let mut samples = sample_raw(config, progress)?;
    let (min, max) = normalize(&mut samples);

    debug!(
        "Generated {}x{} {} field ({} octaves), raw range [{:.4}, {:.4}]",
        config.resolution,
        config.resolution,
        config.noise_function.name(),
        config.octaves,
        min,
        max
    );

    Ok(NoiseField {
        resolution: config.resolution,
        samples,
    })
}

/// Raw (unnormalized) octave sums for every cell.
pub(crate) fn sample_raw(
    config: &NoiseConfig,
    progress: Option<&GenerationProgress>,
) -> Result<Vec<f64>, NoiseError> {
    config.validate()?;

    let scale = config.effective_scale();
    if config.scale_is_coerced() {
        warn!(
            "Noise scale {} is not positive, using {} instead",
            config.scale, scale
        );
    }

    let offset = DVec2::from(config.offset);
    let offsets = OctaveOffsets::generate(config.seed, config.octaves, offset);
    let resolution = config.resolution;
    let half = resolution as f64 / 2.0;
    let mut samples = vec![0.0; config.sample_count()];

    // Each worker builds its own kernel; rows only share the offset table.
    samples
        .par_chunks_mut(resolution)
        .enumerate()
        .for_each_init(
            || Kernel::new(config.noise_function),
            |kernel, (x, row)| {
                let u = (x as f64 - half) / resolution as f64 * scale;
                for (y, sample) in row.iter_mut().enumerate() {
                    let v = (y as f64 - half) / resolution as f64 * scale;
                    *sample = octave_sum(
                        &*kernel,
                        DVec2::new(u, v),
                        offsets.as_slice(),
                        config.persistence,
                        config.lacunarity,
                    );
                }
                if let Some(progress) = progress {
                    progress.increment(row.len());
                }
            },
        );

    Ok(samples)
}

/// Sum one kernel over every octave at a centered, scaled coordinate.
pub(crate) fn octave_sum<K: NoiseKernel + ?Sized>(
    kernel: &K,
    uv: DVec2,
    offsets: &[DVec2],
    persistence: f64,
    lacunarity: f64,
) -> f64 {
    let mut height = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;

    for offset in offsets {
        let p = uv * frequency + *offset;
        height += kernel.sample(p.x, p.y) * amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    height
}

fn min_max(samples: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &sample in samples {
        min = min.min(sample);
        max = max.max(sample);
    }
    (min, max)
}

/// Rescale `samples` in place from their own [min, max] onto [0, 1].
///
/// A flat field (max == min) has no range to stretch, so every sample
/// becomes 0.0. Returns the raw (min, max) found before rescaling.
pub fn normalize(samples: &mut [f64]) -> (f64, f64) {
    let (min, max) = min_max(samples);
    let range = max - min;

    if range > 0.0 && range.is_finite() {
        for sample in samples.iter_mut() {
            *sample = (*sample - min) / range;
        }
    } else {
        samples.fill(0.0);
    }

    (min, max)
}
