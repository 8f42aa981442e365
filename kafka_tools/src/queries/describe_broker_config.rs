use crate::admin::ClusterAdmin;
use crate::models::BrokerConfigEntry;
use anyhow::Context;

pub async fn describe_broker_config<A: ClusterAdmin>(
    admin: &A,
    broker_id: i32,
) -> Result<Vec<BrokerConfigEntry>, anyhow::Error> {
    let mut entries = admin
        .describe_broker_config(broker_id)
        .await
        .with_context(|| format!("While fetching configuration of broker {broker_id}"))?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockAdminClient;

    #[tokio::test]
    async fn entries_sorted_by_name() {
        let admin = MockAdminClient::new();

        let entries = describe_broker_config(&admin, 2).await.unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["group.min.session.timeout.ms", "log.message.timestamp.type"]);
    }

    #[tokio::test]
    async fn unknown_broker_fails() {
        assert!(describe_broker_config(&MockAdminClient::new(), 7).await.is_err());
    }
}
