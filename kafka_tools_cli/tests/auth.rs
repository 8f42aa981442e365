mod common;

use common::{run_cli, run_with_config};
use kafka_tools::mocks::MockAdminClient;
use kafka_tools::properties::Properties;
use kafka_tools_cli::app_config::AppConfig;

#[tokio::test]
async fn creates_property_files_in_given_dir() {
    let dir = tempfile::tempdir().unwrap();
    let auth_dir = dir.path().to_str().unwrap().to_owned();
    let admin = MockAdminClient::new();

    let outcome = run_cli(
        &admin,
        &["auth", "create-prop-files", "--auth-dir", &auth_dir],
        "",
    )
    .await;

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.stdout.lines().count(), 4);
    let summit = Properties::load(&dir.path().join("kafka-aclient-summit.properties")).unwrap();
    assert_eq!(summit.get("security.protocol"), Some("SASL_SSL"));
    assert!(admin.connections().is_empty());
}

#[tokio::test]
async fn defaults_to_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        auth_dir: dir.path().join(".auth"),
        ..Default::default()
    };

    let outcome = run_with_config(
        &MockAdminClient::new(),
        &config,
        &["auth", "create-prop-files"],
        "",
    )
    .await;

    assert_eq!(outcome.exit_code, 0);
    assert!(dir.path().join(".auth").join("kafka-aclient-local.properties").exists());
    assert!(!dir.path().join(".auth").join("kafka-aclient-envvar.properties").exists());
}
