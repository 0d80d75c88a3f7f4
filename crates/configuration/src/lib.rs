use crate::error::ConfigError;
use crate::settings::Settings;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod points;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use points::{CategoryRate, PointRateTable, PointsConfig};
pub use settings::{LogLevel, LoggingConfig, ServerConfig};

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "perfboard.toml";

/// Loads the application configuration from `path`.
///
/// The file is optional: when it does not exist every section takes its defaults.
/// The point schedule is validated here so a bad table fails at startup, not mid-report.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.points.rate_table()?;

    Ok(settings)
}
