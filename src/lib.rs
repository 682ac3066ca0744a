//! Multi-octave coherent noise fields.
//!
//! Samples Perlin, Cellular or Simplex noise over a square grid, normalizes
//! the result into [0, 1], and rasterizes it to a grayscale RGBA buffer.

pub use nf_core::{NoiseConfig, NoiseError, NoiseFunction, NoiseKernel, MIN_SCALE};
pub use nf_noise::{
    generate_field, generate_field_with_progress, grayscale_to_rgba, normalize, rasterize,
    GenerationProgress, Kernel, NfNoisePlugin, NoiseField, OctaveOffsets, RasterImage,
};
pub use nf_persistence::{load_config, save_config, ConfigIoError};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_file_to_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.ron");

        let config = NoiseConfig {
            resolution: 24,
            octaves: 5,
            noise_function: NoiseFunction::Simplex,
            ..NoiseConfig::with_seed(99)
        };
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        let field = generate_field(&loaded).unwrap();
        let image = field.to_image(None).unwrap();

        assert_eq!(image.pixel_count(), 24 * 24);
        assert!(image.pixels().any(|p| p == [0, 0, 0, 255]));
        assert!(image.pixels().any(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn image_buffer_reused_across_regenerations() {
        let mut config = NoiseConfig {
            resolution: 16,
            ..NoiseConfig::with_seed(1)
        };
        let first = generate_field(&config).unwrap().to_image(None).unwrap();
        let buffer = first.as_bytes().as_ptr();

        config.seed = 2;
        let second = generate_field(&config).unwrap().to_image(Some(first)).unwrap();
        assert_eq!(second.as_bytes().as_ptr(), buffer);
    }
}
