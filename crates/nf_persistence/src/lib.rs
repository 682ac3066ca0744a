//! RON persistence for noise configurations.

pub mod config_io;

pub use config_io::{load_config, save_config, ConfigIoError};
