mod common;

use common::{lines, run_cli};
use kafka_tools::mocks::MockAdminClient;
use kafka_tools::models::ConsumerGroupState;
use std::time::Duration;

#[tokio::test]
async fn summary_excludes_connectors_by_default() {
    let admin = MockAdminClient::new();

    let filtered = run_cli(&admin, &["consumers", "local", "summary"], "").await;
    let unfiltered = run_cli(
        &admin,
        &["consumers", "local", "summary", "--no-telegraph-filter"],
        "",
    )
    .await;

    assert_eq!(filtered.stdout, "Found 9 consumers\n7 active, 2 inactive\n");
    assert_eq!(unfiltered.stdout, "Found 10 consumers\n8 active, 2 inactive\n");
}

#[tokio::test]
async fn lists_consumers_sorted_and_aligned() {
    let admin = MockAdminClient::new();

    let outcome = run_cli(&admin, &["consumers", "local", "list"], "").await;

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(
        lines(&outcome.stdout),
        vec![
            "consumer1   STABLE",
            "consumer10  EMPTY",
            "consumer11  STABLE",
            "consumer13  EMPTY",
            "consumer2   STABLE",
            "consumer21  STABLE",
            "consumer5   STABLE",
            "consumer6   STABLE",
            "consumer9   STABLE",
        ]
    );
}

#[tokio::test]
async fn lists_by_state() {
    let admin = MockAdminClient::new();

    let active = run_cli(&admin, &["consumers", "local", "list", "--active"], "").await;
    let inactive = run_cli(&admin, &["consumers", "local", "list", "--inactive"], "").await;
    let with_connectors = run_cli(
        &admin,
        &["consumers", "local", "list", "--active", "--no-connector-filter"],
        "",
    )
    .await;

    assert_eq!(lines(&active.stdout).len(), 7);
    assert!(lines(&active.stdout).iter().all(|line| line.ends_with("STABLE")));
    assert_eq!(
        lines(&inactive.stdout),
        vec!["consumer10  EMPTY", "consumer13  EMPTY"]
    );
    let with_connectors = lines(&with_connectors.stdout);
    assert_eq!(with_connectors.len(), 8);
    assert_eq!(with_connectors[0], format!("{:<22}  STABLE", "consumer1"));
    assert_eq!(with_connectors[7], "telegraf-kafka-maintel  STABLE");
}

#[tokio::test]
async fn lists_with_regex_modes() {
    let admin = MockAdminClient::new();

    let inclusive = run_cli(
        &admin,
        &["consumers", "local", "list", "--regex", "1$", "--regex-inclusive"],
        "",
    )
    .await;
    let exclusive = run_cli(&admin, &["consumers", "local", "list", "--regex", "1"], "").await;

    assert_eq!(
        lines(&inclusive.stdout),
        vec!["consumer1   STABLE", "consumer11  STABLE", "consumer21  STABLE"]
    );
    assert_eq!(
        lines(&exclusive.stdout),
        vec![
            "consumer2  STABLE",
            "consumer5  STABLE",
            "consumer6  STABLE",
            "consumer9  STABLE"
        ]
    );
}

#[tokio::test]
async fn deletes_inactive_consumers() {
    let admin = MockAdminClient::new();

    let outcome = run_cli(&admin, &["consumers", "local", "delete"], "y\n").await;

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(
        outcome.stdout,
        "Delete all requested consumers from local. Are you sure?\n\
         y to proceed, any other key to exit: Proceeding with deletion.\n\
         Found 2 consumers to delete\n\
         2 deleted successfully, 0 not successfully deleted\n"
    );
    assert!(admin
        .consumer_groups()
        .iter()
        .all(|group| *group.state() == ConsumerGroupState::Stable));
}

#[tokio::test]
async fn deletes_with_regex_modes() {
    let admin = MockAdminClient::new();
    let inclusive = run_cli(
        &admin,
        &["consumers", "local", "delete", "--regex", "13$", "--regex-inclusive", "--yes"],
        "",
    )
    .await;
    assert_eq!(
        inclusive.stdout,
        "Found 1 consumers to delete\n1 deleted successfully, 0 not successfully deleted\n"
    );

    let admin = MockAdminClient::new();
    let exclusive = run_cli(
        &admin,
        &["consumers", "local", "delete", "--regex", "^consumer"],
        "",
    )
    .await;
    assert_eq!(exclusive.exit_code, 0);
    assert_eq!(exclusive.stdout, "No consumers to delete.\n");
}

#[tokio::test]
async fn nothing_inactive_means_nothing_to_delete() {
    let admin = MockAdminClient::new();
    admin.set_empty_consumers_to_stable();

    let outcome = run_cli(&admin, &["consumers", "local", "delete"], "").await;

    assert_eq!(outcome.stdout, "No consumers to delete.\n");
    assert!(admin.delete_requests().is_empty());
}

#[tokio::test]
async fn declined_consumer_deletion() {
    let admin = MockAdminClient::new();

    let outcome = run_cli(&admin, &["consumers", "local", "delete"], "\n").await;

    assert_eq!(outcome.exit_code, 255);
    assert!(admin.delete_requests().is_empty());
    assert_eq!(admin.consumer_groups().len(), 10);
}

#[tokio::test]
async fn slow_deletions_are_not_completed() {
    let admin = MockAdminClient::new();
    admin.delay_requests_for("consumer13", Duration::from_secs(5));

    let outcome = run_cli(
        &admin,
        &["consumers", "--timeout", "200", "local", "delete", "--yes"],
        "",
    )
    .await;

    assert_eq!(
        outcome.stdout,
        "Found 2 consumers to delete\n1 deleted successfully, 1 not successfully deleted\n"
    );
}

#[tokio::test]
async fn describes_consumers() {
    let admin = MockAdminClient::new();

    let several = run_cli(
        &admin,
        &["consumers", "local", "describe", "consumer1,consumer5"],
        "",
    )
    .await;
    let single = run_cli(&admin, &["consumers", "local", "describe", "consumer5"], "").await;

    assert_eq!(
        several.stdout,
        "consumer1\nTopics:\ntopic1\ntopic2\ntopic3\n\n\
         consumer5\nTopics:\nlsst.sal.ATAOS.logevent_heartbeat\nlsst.sal.ATAOS.timestamp\n\n"
    );
    assert_eq!(
        single.stdout,
        "consumer5\nTopics:\nlsst.sal.ATAOS.logevent_heartbeat\nlsst.sal.ATAOS.timestamp\n\n"
    );
}

#[tokio::test]
async fn exception_in_description_is_fatal() {
    let admin = MockAdminClient::new();

    let outcome = run_cli(
        &admin,
        &["consumers", "local", "describe", "TimeoutException"],
        "",
    )
    .await;

    assert_eq!(outcome.exit_code, 254);
    assert_eq!(outcome.stdout, "TimeoutException\nTopics:\n\n");
}
