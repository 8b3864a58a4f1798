//! Configuration management.

mod catalog;
mod settings;

pub use catalog::{default_catalog, default_crypto_ids};
pub use settings::{
    AppConfig, AppSettings, FetchSettings, FredSettings, LoggingConfig, ReportSettings,
    TelegramSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; a missing file yields the built-in defaults so the
/// binary works out of the box on a fresh scheduled host. Environment
/// variables use the `BRIEFING__` prefix with `__` as the section separator.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("BRIEFING")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
