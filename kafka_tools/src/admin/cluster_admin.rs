use crate::models::{
    BrokerConfigEntry, ConsumerGroupDescription, ConsumerGroupListing, ConsumerGroupState,
};
use crate::site::Site;
use std::time::Duration;

/// Cluster operations the tool needs.
///
/// Every bulk operation is issued per name so that callers can fan out and
/// account for each outcome separately.
#[allow(async_fn_in_trait)]
pub trait ClusterAdmin {
    async fn list_topics(&self) -> Result<Vec<String>, anyhow::Error>;

    async fn delete_topic(&self, topic: &str) -> Result<(), anyhow::Error>;

    /// Raises the partition count of `topic` to `total_partitions`.
    async fn create_partitions(
        &self,
        topic: &str,
        total_partitions: usize,
    ) -> Result<(), anyhow::Error>;

    async fn list_consumer_groups(
        &self,
        states: &[ConsumerGroupState],
        timeout: Duration,
    ) -> Result<Vec<ConsumerGroupListing>, anyhow::Error>;

    async fn delete_consumer_group(
        &self,
        group: &str,
        timeout: Duration,
    ) -> Result<(), anyhow::Error>;

    async fn describe_consumer_groups(
        &self,
        groups: &[String],
        timeout: Duration,
    ) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error>;

    async fn describe_broker_config(
        &self,
        broker_id: i32,
    ) -> Result<Vec<BrokerConfigEntry>, anyhow::Error>;
}

/// Opens an admin connection for a site.
pub trait AdminConnector {
    type Admin: ClusterAdmin;

    fn connect(&self, site: Site) -> Result<Self::Admin, anyhow::Error>;
}
