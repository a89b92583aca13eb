use serde::Deserialize;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Front-end settings, compiled into the bundle from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Heading shown above the task list
    pub title: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            title: "Tasks".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads the configuration embedded at build time.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parsed log level, falling back to `INFO` for anything unrecognised.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
