use crate::admin::{AdminConnector, AdminWrapper};
use crate::connection_settings::ConnectionSettings;
use crate::site::Site;
use crate::utils::expand_home;
use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Connects to the real cluster of a site using its stored credentials.
#[derive(Debug, Clone)]
pub struct SiteConnector {
    auth_dir: PathBuf,
    metadata_timeout: Duration,
}

impl SiteConnector {
    pub fn new(auth_dir: PathBuf, metadata_timeout: Duration) -> Self {
        Self {
            auth_dir: expand_home(&auth_dir),
            metadata_timeout,
        }
    }
}

impl AdminConnector for SiteConnector {
    type Admin = AdminWrapper;

    fn connect(&self, site: Site) -> Result<Self::Admin, anyhow::Error> {
        let settings =
            ConnectionSettings::resolve(site, &self.auth_dir, |key| std::env::var(key).ok())?;
        info!("Connecting to {site}: {:?}", settings.brokers);
        AdminWrapper::create(&settings, self.metadata_timeout)
            .with_context(|| format!("While connecting to {site}"))
    }
}
