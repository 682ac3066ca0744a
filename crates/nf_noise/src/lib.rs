use bevy::prelude::*;
use nf_core::NoiseConfig;

pub mod field;
pub mod kernel;
pub mod octaves;
pub mod progress;
pub mod raster;

pub use field::{generate_field, generate_field_with_progress, normalize, NoiseField};
pub use kernel::Kernel;
pub use octaves::OctaveOffsets;
pub use progress::GenerationProgress;
pub use raster::{grayscale_to_rgba, rasterize, RasterImage};

/// Noise field plugin.
/// Exposes the generation parameters as a resource for the host app to edit.
pub struct NfNoisePlugin;

impl Plugin for NfNoisePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NoiseConfig>();
    }
}
