use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Cluster deployment a command is run against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Site {
    Tts,
    Bts,
    Summit,
    Local,
    /// Credentials are read from `LSST_KAFKA_*` environment variables.
    EnvVar,
}

impl Site {
    pub const ALL: [Site; 5] = [Site::Tts, Site::Bts, Site::Summit, Site::Local, Site::EnvVar];

    pub fn name(&self) -> &'static str {
        match self {
            Site::Tts => "tts",
            Site::Bts => "bts",
            Site::Summit => "summit",
            Site::Local => "local",
            Site::EnvVar => "envvar",
        }
    }

    /// Whether credentials for this site live in a properties file.
    pub fn uses_properties_file(&self) -> bool {
        !matches!(self, Site::EnvVar)
    }

    pub fn properties_file_name(&self) -> String {
        format!("kafka-aclient-{}.properties", self.name())
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid site '{0}', expected one of: tts, bts, summit, local, envvar")]
pub struct ParseSiteError(String);

impl FromStr for Site {
    type Err = ParseSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| site.name() == lowered)
            .ok_or_else(|| ParseSiteError(s.to_owned()))
    }
}
