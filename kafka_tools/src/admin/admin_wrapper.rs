use crate::admin::{decode_member_assignment, ClusterAdmin};
use crate::connection_settings::ConnectionSettings;
use crate::models::{
    BrokerConfigEntry, ConsumerGroupDescription, ConsumerGroupListing, ConsumerGroupState,
    MemberDescription,
};
use anyhow::{anyhow, bail, Context};
use rdkafka::admin::{AdminClient, AdminOptions, NewPartitions, ResourceSpecifier};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct AdminWrapper {
    client: Arc<AdminClient<DefaultClientContext>>,
    metadata_timeout: Duration,
}

impl AdminWrapper {
    pub fn create(
        connection_settings: &ConnectionSettings,
        metadata_timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let client: AdminClient<DefaultClientContext> = ClientConfig::try_from(connection_settings)?
            .create()
            .context("While creating kafka AdminClient")?;

        Ok(Self {
            client: Arc::new(client),
            metadata_timeout,
        })
    }
}

fn single_result(
    results: Vec<Result<String, (String, RDKafkaErrorCode)>>,
) -> Result<(), anyhow::Error> {
    match results.into_iter().next() {
        Some(Ok(_)) => Ok(()),
        Some(Err((name, code))) => bail!("Request for {name} failed: {code}"),
        None => bail!("Broker returned no result"),
    }
}

impl ClusterAdmin for AdminWrapper {
    async fn list_topics(&self) -> Result<Vec<String>, anyhow::Error> {
        let client = self.client.clone();
        let timeout = self.metadata_timeout;
        let handle = tokio::task::spawn_blocking(move || {
            let metadata = client
                .inner()
                .fetch_metadata(None, Timeout::After(timeout))
                .context("While fetching metadata")?;

            let topics = metadata
                .topics()
                .iter()
                .map(|topic| topic.name().to_owned())
                .collect::<Vec<_>>();
            Result::<_, anyhow::Error>::Ok(topics)
        });

        let topics = handle.await.context("While joining blocking handle")??;
        debug!("Fetched {} topics", topics.len());
        Ok(topics)
    }

    async fn delete_topic(&self, topic: &str) -> Result<(), anyhow::Error> {
        let results = self
            .client
            .delete_topics(&[topic], &AdminOptions::new())
            .await
            .with_context(|| format!("While deleting topic {topic}"))?;
        single_result(results)
    }

    async fn create_partitions(
        &self,
        topic: &str,
        total_partitions: usize,
    ) -> Result<(), anyhow::Error> {
        let partitions = NewPartitions::new(topic, total_partitions);
        let results = self
            .client
            .create_partitions(&[partitions], &AdminOptions::new())
            .await
            .with_context(|| format!("While creating partitions for {topic}"))?;
        single_result(results)
    }

    async fn list_consumer_groups(
        &self,
        states: &[ConsumerGroupState],
        timeout: Duration,
    ) -> Result<Vec<ConsumerGroupListing>, anyhow::Error> {
        let client = self.client.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let groups = client
                .inner()
                .fetch_group_list(None, Timeout::After(timeout))
                .context("While fetching groups")?;

            let listings = groups
                .groups()
                .iter()
                .map(|group| {
                    let state = group.state().parse().unwrap_or(ConsumerGroupState::Unknown);
                    ConsumerGroupListing::new(group.name(), state)
                })
                .collect::<Vec<_>>();
            Result::<_, anyhow::Error>::Ok(listings)
        });

        let listings = handle.await.context("While joining blocking handle")??;
        Ok(listings
            .into_iter()
            .filter(|listing| states.contains(listing.state()))
            .collect())
    }

    async fn delete_consumer_group(
        &self,
        group: &str,
        timeout: Duration,
    ) -> Result<(), anyhow::Error> {
        let options = AdminOptions::new().request_timeout(Some(timeout));
        let results = self
            .client
            .delete_groups(&[group], &options)
            .await
            .with_context(|| format!("While deleting consumer group {group}"))?;
        single_result(results)
    }

    async fn describe_consumer_groups(
        &self,
        groups: &[String],
        timeout: Duration,
    ) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error> {
        let client = self.client.clone();
        let groups = groups.to_vec();
        let handle = tokio::task::spawn_blocking(move || {
            let mut descriptions = Vec::with_capacity(groups.len());
            for group in groups {
                let group_list = client
                    .inner()
                    .fetch_group_list(Some(&group), Timeout::After(timeout))
                    .with_context(|| format!("While describing consumer group {group}"))?;
                let info = group_list
                    .groups()
                    .iter()
                    .find(|info| info.name() == group)
                    .ok_or_else(|| {
                        anyhow!("Consumer group {group} was not returned by the broker")
                    })?;

                let members = info
                    .members()
                    .iter()
                    .map(|member| {
                        let assignment = match member.assignment() {
                            Some(bytes) if info.protocol_type() == "consumer" => {
                                decode_member_assignment(bytes).unwrap_or_else(|e| {
                                    warn!(
                                        "Can't decode assignment of member {}: {e:#}",
                                        member.id()
                                    );
                                    vec![]
                                })
                            }
                            _ => vec![],
                        };
                        MemberDescription {
                            member_id: member.id().to_owned(),
                            client_id: member.client_id().to_owned(),
                            host: member.client_host().to_owned(),
                            assignment,
                        }
                    })
                    .collect();

                descriptions.push(ConsumerGroupDescription {
                    state: info.state().parse().unwrap_or(ConsumerGroupState::Unknown),
                    group_id: group,
                    members,
                });
            }
            Result::<_, anyhow::Error>::Ok(descriptions)
        });

        handle.await.context("While joining blocking handle")?
    }

    async fn describe_broker_config(
        &self,
        broker_id: i32,
    ) -> Result<Vec<BrokerConfigEntry>, anyhow::Error> {
        let results = self
            .client
            .describe_configs(&[ResourceSpecifier::Broker(broker_id)], &AdminOptions::new())
            .await
            .with_context(|| format!("While describing broker {broker_id}"))?;

        let resource = match results.into_iter().next() {
            Some(Ok(resource)) => resource,
            Some(Err(code)) => bail!("Describing broker {broker_id} failed: {code}"),
            None => bail!("Broker returned no result"),
        };

        let mut entries = resource
            .entries
            .iter()
            .map(BrokerConfigEntry::from)
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
