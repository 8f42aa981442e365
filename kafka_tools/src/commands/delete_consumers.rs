use crate::admin::ClusterAdmin;
use crate::bulk::{run_bulk, BulkOutcome};
use std::time::Duration;
use tracing::info;

/// Deletes every group concurrently. `timeout` bounds each request as well
/// as the whole batch; groups still pending when it elapses count as not
/// deleted.
pub async fn delete_consumers<A: ClusterAdmin>(
    admin: &A,
    groups: Vec<String>,
    timeout: Duration,
) -> BulkOutcome {
    info!("Deleting {} consumer groups", groups.len());
    run_bulk(groups, Some(timeout), |group| async move {
        admin.delete_consumer_group(&group, timeout).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk::TIMED_OUT;
    use crate::mocks::MockAdminClient;

    #[tokio::test]
    async fn deletes_empty_groups_only() {
        let admin = MockAdminClient::new();

        let outcome = delete_consumers(
            &admin,
            vec!["consumer10".to_owned(), "consumer1".to_owned()],
            Duration::from_secs(1),
        )
        .await;

        assert_eq!(outcome.completed, vec!["consumer10"]);
        assert_eq!(outcome.not_completed[0].name, "consumer1");
        assert!(outcome.not_completed[0].reason.contains("NonEmptyGroup"));
        assert_eq!(admin.consumer_groups().len(), 9);
    }

    #[tokio::test]
    async fn slow_groups_time_out() {
        let admin = MockAdminClient::new();
        admin.delay_requests_for("consumer13", Duration::from_secs(10));

        let outcome = delete_consumers(
            &admin,
            vec!["consumer10".to_owned(), "consumer13".to_owned()],
            Duration::from_millis(200),
        )
        .await;

        assert_eq!(outcome.completed, vec!["consumer10"]);
        assert_eq!(outcome.not_completed[0].name, "consumer13");
        assert_eq!(outcome.not_completed[0].reason, TIMED_OUT);
    }
}
