use crate::admin::ClusterAdmin;
use crate::error::ToolError;
use crate::models::ConsumerGroupDescription;
use anyhow::{anyhow, Context};
use std::time::Duration;

/// Splits a comma separated group list.
pub fn parse_group_list(groups: &str) -> Result<Vec<String>, ToolError> {
    let groups = groups
        .split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if groups.is_empty() {
        return Err(ToolError::usage("No consumer groups given."));
    }
    Ok(groups)
}

pub async fn describe_consumers<A: ClusterAdmin>(
    admin: &A,
    groups: &[String],
    timeout: Duration,
) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error> {
    tokio::time::timeout(timeout, admin.describe_consumer_groups(groups, timeout))
        .await
        .map_err(|_| anyhow!("Describing consumer groups timed out after {timeout:?}"))?
        .context("While describing consumer groups")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockAdminClient;

    #[test]
    fn parses_group_lists() {
        assert_eq!(parse_group_list("consumer1").unwrap(), vec!["consumer1"]);
        assert_eq!(
            parse_group_list("consumer1, consumer5,").unwrap(),
            vec!["consumer1", "consumer5"]
        );
        assert!(parse_group_list(" , ").is_err());
    }

    #[tokio::test]
    async fn describes_in_requested_order() {
        let admin = MockAdminClient::new();
        let groups = vec!["consumer5".to_owned(), "consumer1".to_owned()];

        let descriptions = describe_consumers(&admin, &groups, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(descriptions[0].group_id, "consumer5");
        assert_eq!(descriptions[1].assigned_topics(), vec!["topic1", "topic2", "topic3"]);
    }
}
