use std::fmt::{Display, Formatter};

/// Where a broker configuration value comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigSourceKind {
    Unknown,
    DynamicTopic,
    DynamicBroker,
    DynamicDefaultBroker,
    StaticBroker,
    Default,
}

impl Display for ConfigSourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSourceKind::Unknown => write!(f, "UNKNOWN_CONFIG"),
            ConfigSourceKind::DynamicTopic => write!(f, "DYNAMIC_TOPIC_CONFIG"),
            ConfigSourceKind::DynamicBroker => write!(f, "DYNAMIC_BROKER_CONFIG"),
            ConfigSourceKind::DynamicDefaultBroker => write!(f, "DYNAMIC_DEFAULT_BROKER_CONFIG"),
            ConfigSourceKind::StaticBroker => write!(f, "STATIC_BROKER_CONFIG"),
            ConfigSourceKind::Default => write!(f, "DEFAULT_CONFIG"),
        }
    }
}

impl From<&rdkafka::admin::ConfigSource> for ConfigSourceKind {
    fn from(value: &rdkafka::admin::ConfigSource) -> Self {
        use rdkafka::admin::ConfigSource;
        match value {
            ConfigSource::Unknown => ConfigSourceKind::Unknown,
            ConfigSource::DynamicTopic => ConfigSourceKind::DynamicTopic,
            ConfigSource::DynamicBroker => ConfigSourceKind::DynamicBroker,
            ConfigSource::DynamicDefaultBroker => ConfigSourceKind::DynamicDefaultBroker,
            ConfigSource::StaticBroker => ConfigSourceKind::StaticBroker,
            ConfigSource::Default => ConfigSourceKind::Default,
            #[allow(unreachable_patterns)]
            _ => ConfigSourceKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSynonym {
    pub source: ConfigSourceKind,
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfigEntry {
    pub name: String,
    pub value: Option<String>,
    pub source: ConfigSourceKind,
    pub is_read_only: bool,
    pub is_default: bool,
    pub is_sensitive: bool,
    pub synonyms: Vec<ConfigSynonym>,
}

impl From<&rdkafka::admin::ConfigEntry> for BrokerConfigEntry {
    /// librdkafka does not hand out synonym lists through the Rust bindings,
    /// so the entry itself is reported as its only synonym.
    fn from(value: &rdkafka::admin::ConfigEntry) -> Self {
        let source = ConfigSourceKind::from(&value.source);
        Self {
            name: value.name.clone(),
            value: value.value.clone(),
            source,
            is_read_only: value.is_read_only,
            is_default: value.is_default,
            is_sensitive: value.is_sensitive,
            synonyms: vec![ConfigSynonym {
                source,
                name: value.name.clone(),
                value: value.value.clone(),
            }],
        }
    }
}
