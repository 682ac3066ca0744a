use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Smallest scale used when a caller supplies a non-positive one.
pub const MIN_SCALE: f64 = 1e-4;

/// Coherent noise kernel sampled at each octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoiseFunction {
    #[default]
    Perlin,
    /// Worley noise, first (F1 distance) channel only.
    Cellular,
    Simplex,
}

impl NoiseFunction {
    /// Returns all kernel variants.
    pub fn all() -> &'static [NoiseFunction] {
        &[Self::Perlin, Self::Cellular, Self::Simplex]
    }

    /// Display name for this kernel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Perlin => "Perlin",
            Self::Cellular => "Cellular",
            Self::Simplex => "Simplex",
        }
    }
}

/// Parameters for one noise field generation.
///
/// The grid is always square: `resolution` is both width and height.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Spatial frequency multiplier. Non-positive values fall back to [`MIN_SCALE`].
    pub scale: f64,
    /// Seed for the octave offset table.
    pub seed: i32,
    /// Number of summed noise layers.
    pub octaves: u32,
    /// Translation applied to every octave's sample coordinate.
    pub offset: (f64, f64),
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
    /// Width and height of the output grid.
    pub resolution: usize,
    /// Kernel sampled at each octave.
    pub noise_function: NoiseFunction,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            seed: 0,
            octaves: 4,
            offset: (0.0, 0.0),
            persistence: 0.5,
            lacunarity: 2.0,
            resolution: 256,
            noise_function: NoiseFunction::Perlin,
        }
    }
}

impl NoiseConfig {
    /// Creates a default configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Rejects octave and resolution counts that leave nothing to compute.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidOctaves(self.octaves));
        }
        if self.resolution == 0 {
            return Err(NoiseError::InvalidResolution(self.resolution));
        }
        Ok(())
    }

    /// Scale actually used for sampling. NaN also falls back to [`MIN_SCALE`].
    pub fn effective_scale(&self) -> f64 {
        if self.scale > 0.0 {
            self.scale
        } else {
            MIN_SCALE
        }
    }

    /// Whether sampling will substitute [`MIN_SCALE`] for the configured scale.
    pub fn scale_is_coerced(&self) -> bool {
        self.scale <= 0.0 || self.scale.is_nan()
    }

    /// Number of samples in a field generated from this configuration.
    pub fn sample_count(&self) -> usize {
        self.resolution * self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NoiseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_count(), 256 * 256);
    }

    #[test]
    fn zero_octaves_rejected() {
        let config = NoiseConfig {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(NoiseError::InvalidOctaves(0)));
    }

    #[test]
    fn zero_resolution_rejected() {
        let config = NoiseConfig {
            resolution: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(NoiseError::InvalidResolution(0)));
    }

    #[test]
    fn non_positive_scale_falls_back() {
        for scale in [0.0, -5.0, f64::NAN] {
            let config = NoiseConfig {
                scale,
                ..Default::default()
            };
            assert_eq!(config.effective_scale(), MIN_SCALE);
            assert!(config.scale_is_coerced());
        }

        let config = NoiseConfig {
            scale: 3.5,
            ..Default::default()
        };
        assert_eq!(config.effective_scale(), 3.5);
        assert!(!config.scale_is_coerced());
    }

    #[test]
    fn all_functions_have_unique_names() {
        let mut names: Vec<_> = NoiseFunction::all().iter().map(|f| f.name()).collect();
        let original_len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), original_len);
    }
}
