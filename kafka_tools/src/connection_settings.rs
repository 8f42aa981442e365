mod security_protocol;

pub use security_protocol::*;

use crate::properties::Properties;
use crate::site::Site;
use anyhow::{anyhow, bail, Context};
use rdkafka::ClientConfig;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
pub const SECURITY_PROTOCOL: &str = "security.protocol";
pub const SASL_MECHANISM: &str = "sasl.mechanism";
pub const SASL_USERNAME: &str = "sasl.username";
pub const SASL_PASSWORD: &str = "sasl.password";

pub const ENV_SECURITY_PROTOCOL: &str = "LSST_KAFKA_SECURITY_PROTOCOL";
pub const ENV_SECURITY_MECHANISM: &str = "LSST_KAFKA_SECURITY_MECHANISM";
pub const ENV_SECURITY_USERNAME: &str = "LSST_KAFKA_SECURITY_USERNAME";
pub const ENV_SECURITY_PASSWORD: &str = "LSST_KAFKA_SECURITY_PASSWORD";
pub const ENV_BROKER_ADDR: &str = "LSST_KAFKA_BROKER_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub brokers: Vec<String>,
    pub security_protocol: SecurityProtocol,
    pub sasl: Option<SaslCredentials>,
    /// Properties without a dedicated field, passed to the client untouched.
    pub extra: BTreeMap<String, String>,
}

impl ConnectionSettings {
    /// Resolves the connection parameters of `site`.
    ///
    /// File based sites read `<auth_dir>/kafka-aclient-<site>.properties`,
    /// the `envvar` site reads the `LSST_KAFKA_*` variables through `env`.
    pub fn resolve(
        site: Site,
        auth_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, anyhow::Error> {
        let properties = if site.uses_properties_file() {
            let path = auth_dir.join(site.properties_file_name());
            debug!("Reading credentials for {site} from {}", path.display());
            Properties::load(&path)?
        } else {
            debug!("Reading credentials for {site} from environment");
            properties_from_env(env)?
        };

        Self::try_from(properties)
            .with_context(|| format!("While resolving credentials for {site}"))
    }
}

fn properties_from_env(env: impl Fn(&str) -> Option<String>) -> Result<Properties, anyhow::Error> {
    let mut properties = Properties::new();
    for (key, variable) in [
        (SECURITY_PROTOCOL, ENV_SECURITY_PROTOCOL),
        (SASL_MECHANISM, ENV_SECURITY_MECHANISM),
        (SASL_USERNAME, ENV_SECURITY_USERNAME),
        (SASL_PASSWORD, ENV_SECURITY_PASSWORD),
        (BOOTSTRAP_SERVERS, ENV_BROKER_ADDR),
    ] {
        let value =
            env(variable).ok_or_else(|| anyhow!("Environment variable {variable} is not set"))?;
        properties.set(key, value);
    }
    Ok(properties)
}

impl TryFrom<Properties> for ConnectionSettings {
    type Error = anyhow::Error;

    fn try_from(mut properties: Properties) -> Result<Self, Self::Error> {
        let brokers = properties
            .remove(BOOTSTRAP_SERVERS)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|broker| !broker.is_empty())
            .map(str::to_owned)
            .collect::<Vec<_>>();
        if brokers.is_empty() {
            bail!("No brokers specified")
        }

        let security_protocol = match properties.remove(SECURITY_PROTOCOL) {
            Some(protocol) => protocol.parse()?,
            None => SecurityProtocol::Plaintext,
        };

        let mechanism = properties.remove(SASL_MECHANISM);
        let username = properties.remove(SASL_USERNAME);
        let password = properties.remove(SASL_PASSWORD);
        let sasl = match (mechanism, username, password) {
            (Some(mechanism), Some(username), Some(password)) => Some(SaslCredentials {
                mechanism,
                username,
                password,
            }),
            (None, None, None) => None,
            _ => bail!(
                "{SASL_MECHANISM}, {SASL_USERNAME} and {SASL_PASSWORD} must be set together"
            ),
        };
        if security_protocol.uses_sasl() && sasl.is_none() {
            bail!("Security protocol {security_protocol} requires SASL credentials")
        }

        let extra = properties
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        Ok(Self {
            brokers,
            security_protocol,
            sasl,
            extra,
        })
    }
}

impl TryFrom<&ConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        for (key, extra) in &value.extra {
            config.set(key, extra);
        }

        let brokers_string = value.brokers.join(",");
        config
            .set(BOOTSTRAP_SERVERS, brokers_string)
            .set(SECURITY_PROTOCOL, value.security_protocol.to_string());

        if let Some(sasl) = &value.sasl {
            config
                .set(SASL_MECHANISM, &sasl.mechanism)
                .set(SASL_USERNAME, &sasl.username)
                .set(SASL_PASSWORD, &sasl.password);
        }

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}
