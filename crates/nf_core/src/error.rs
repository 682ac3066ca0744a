use thiserror::Error;

/// Precondition failures for field generation and rasterization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaves(u32),
    #[error("resolution must be at least 1, got {0}")]
    InvalidResolution(usize),
    #[error("field has {len} samples, expected {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
}
