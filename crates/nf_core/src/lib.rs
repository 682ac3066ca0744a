pub mod config;
pub mod error;
pub mod noise;

pub use config::{NoiseConfig, NoiseFunction, MIN_SCALE};
pub use error::NoiseError;
pub use noise::NoiseKernel;
