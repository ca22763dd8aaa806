use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Viewer configuration, defaults overridable through `CACHELENS_*`
/// environment variables. The decode core takes no configuration; these
/// only steer the surrounding tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default key pattern for listings.
    pub pattern: String,
    /// ANSI colors in terminal output.
    pub color: bool,
    /// Default log level when `CACHELENS_LOG` is unset.
    pub log_level: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("pattern", "*")?
            .set_default("color", true)?
            .set_default("log_level", "warn")?
            .add_source(Environment::with_prefix("CACHELENS"))
            .build()?;

        cfg.try_deserialize()
    }
}
