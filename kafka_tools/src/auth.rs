use crate::connection_settings::{
    BOOTSTRAP_SERVERS, SASL_MECHANISM, SASL_PASSWORD, SASL_USERNAME, SECURITY_PROTOCOL,
};
use crate::properties::Properties;
use crate::site::Site;
use crate::utils::expand_home;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_AUTH_DIR: &str = "~/.auth";
pub const PLACEHOLDER: &str = "<replace-me>";

/// Credential template for `site`; every value still needs to be filled in.
pub fn credential_template(site: Site) -> Properties {
    let mut properties = Properties::new();
    if site != Site::Local {
        properties.set(SECURITY_PROTOCOL, "SASL_SSL");
        properties.set(SASL_MECHANISM, "SCRAM-SHA-512");
        properties.set(SASL_USERNAME, PLACEHOLDER);
        properties.set(SASL_PASSWORD, PLACEHOLDER);
    }
    properties.set(BOOTSTRAP_SERVERS, PLACEHOLDER);
    properties
}

/// Writes one credential template per file based site into `auth_dir`.
pub fn create_properties_files(auth_dir: &Path) -> Result<Vec<PathBuf>, anyhow::Error> {
    let auth_dir = expand_home(auth_dir);
    std::fs::create_dir_all(&auth_dir)
        .with_context(|| format!("While creating directory {}", auth_dir.display()))?;

    let mut written = vec![];
    for site in Site::ALL.into_iter().filter(Site::uses_properties_file) {
        let path = auth_dir.join(site.properties_file_name());
        let contents = credential_template(site).store()?;
        std::fs::write(&path, contents)
            .with_context(|| format!("While writing {}", path.display()))?;
        restrict_permissions(&path)?;
        info!("Wrote credential template {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), anyhow::Error> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .with_context(|| format!("While restricting permissions of {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), anyhow::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_template_per_file_site() {
        let dir = tempfile::tempdir().unwrap();
        let auth_dir = dir.path().join("nested").join(".auth");

        let written = create_properties_files(&auth_dir).unwrap();

        assert_eq!(written.len(), 4);
        assert!(!auth_dir.join("kafka-aclient-envvar.properties").exists());

        let bts = Properties::load(&auth_dir.join("kafka-aclient-bts.properties")).unwrap();
        assert_eq!(bts.len(), 5);
        assert_eq!(bts.get(SASL_MECHANISM), Some("SCRAM-SHA-512"));
        assert_eq!(bts.get(SASL_PASSWORD), Some(PLACEHOLDER));

        let local = Properties::load(&auth_dir.join("kafka-aclient-local.properties")).unwrap();
        assert_eq!(local.len(), 1);
        assert_eq!(local.get(BOOTSTRAP_SERVERS), Some(PLACEHOLDER));
    }

    #[cfg(unix)]
    #[test]
    fn templates_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();

        let written = create_properties_files(dir.path()).unwrap();

        let mode = std::fs::metadata(&written[0]).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
