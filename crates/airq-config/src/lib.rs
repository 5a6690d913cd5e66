//! Configuration management for air quality chart generation

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ChartSettings, Config, LoggingSettings, WindowSettings};
