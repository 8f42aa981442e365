use crate::admin::ClusterAdmin;
use crate::bulk::{run_bulk, BulkOutcome};
use tracing::info;

/// Deletes every topic concurrently. Requests run without a deadline and
/// rely on the client's own request timeout.
pub async fn delete_topics<A: ClusterAdmin>(admin: &A, topics: Vec<String>) -> BulkOutcome {
    info!("Deleting {} topics", topics.len());
    run_bulk(topics, None, |topic| async move { admin.delete_topic(&topic).await }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockAdminClient;

    #[tokio::test]
    async fn deletes_topics_and_reports_failures() {
        let admin = MockAdminClient::new();
        admin.fail_requests_for("topic1.attribute2");

        let outcome = delete_topics(
            &admin,
            vec![
                "topic1.attribute1".to_owned(),
                "topic1.attribute2".to_owned(),
                "no.such.topic".to_owned(),
            ],
        )
        .await;

        assert_eq!(outcome.completed, vec!["topic1.attribute1"]);
        let failed = outcome
            .not_completed
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(failed, vec!["no.such.topic", "topic1.attribute2"]);
        assert_eq!(admin.topics().len(), 9);
        assert!(admin.partitions("topic1.attribute1").is_none());
    }
}
