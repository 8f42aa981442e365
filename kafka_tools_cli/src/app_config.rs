use anyhow::Context;
use config::Config;
use kafka_tools::auth::DEFAULT_AUTH_DIR;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default = "default_auth_dir")]
    pub auth_dir: PathBuf,
    #[serde(default = "default_consumer_timeout_ms")]
    pub consumer_timeout_ms: u64,
    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,
}

fn default_auth_dir() -> PathBuf {
    PathBuf::from(DEFAULT_AUTH_DIR)
}

fn default_consumer_timeout_ms() -> u64 {
    30_000
}

fn default_metadata_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_dir: default_auth_dir(),
            consumer_timeout_ms: default_consumer_timeout_ms(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Reads the optional `kafka_tools.*` file of the working directory,
    /// overridden by `KAFKA_TOOLS__*` environment variables.
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("kafka_tools").required(false))
            .add_source(
                config::Environment::with_prefix("KAFKA_TOOLS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        debug!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    pub fn consumer_timeout(&self) -> Duration {
        Duration::from_millis(self.consumer_timeout_ms)
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_millis(self.metadata_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();

        assert_eq!(config.auth_dir, PathBuf::from("~/.auth"));
        assert_eq!(config.consumer_timeout(), Duration::from_secs(30));
        assert_eq!(config.metadata_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::builder()
            .set_override("consumer_timeout_ms", 500)
            .unwrap()
            .build()
            .unwrap();

        let config: AppConfig = config.try_deserialize().unwrap();

        assert_eq!(config.consumer_timeout_ms, 500);
        assert_eq!(config.metadata_timeout_ms, 10_000);
        assert_eq!(config.auth_dir, PathBuf::from("~/.auth"));
    }
}
