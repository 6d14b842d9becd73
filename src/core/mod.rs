pub mod config;
pub mod config_validation;
pub mod tuning;

pub use config::{AppConfig, ConfigError};
pub use tuning::ImageTuning;
