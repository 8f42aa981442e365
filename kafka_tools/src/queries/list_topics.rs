use crate::admin::ClusterAdmin;
use crate::filters::TopicSelection;
use anyhow::Context;
use tracing::debug;

/// Topics of the cluster matching `selection`, sorted.
pub async fn list_topics<A: ClusterAdmin>(
    admin: &A,
    selection: &TopicSelection,
) -> Result<Vec<String>, anyhow::Error> {
    let topics = admin.list_topics().await.context("While listing topics")?;
    let selected = selection.select(&topics);
    debug!("{} of {} topics selected", selected.len(), topics.len());
    Ok(selected)
}
