use crate::admin::ClusterAdmin;
use crate::bulk::{run_bulk, BulkOutcome};
use tracing::info;

/// Topic kinds that never get extra partitions.
const NON_TELEMETRY_PREFIXES: [&str; 3] = ["ackcmd", "logevent", "command"];

/// Telemetry topics of the `csc` component. Topic names are dot separated,
/// `<prefix>.<namespace>.<csc>.<kind>...`, and shorter names are skipped.
pub fn telemetry_topics(topics: &[String], csc: &str) -> Vec<String> {
    topics
        .iter()
        .filter(|topic| {
            let segments = topic.split('.').collect::<Vec<_>>();
            segments.len() >= 4
                && segments[2] == csc
                && !NON_TELEMETRY_PREFIXES
                    .iter()
                    .any(|prefix| segments[3].starts_with(prefix))
        })
        .cloned()
        .collect()
}

/// Raises the partition count of every topic to `partitions`.
pub async fn set_partitions<A: ClusterAdmin>(
    admin: &A,
    topics: Vec<String>,
    partitions: usize,
) -> BulkOutcome {
    info!("Setting {} topics to {partitions} partitions", topics.len());
    run_bulk(topics, None, |topic| async move {
        admin.create_partitions(&topic, partitions).await
    })
    .await
}
