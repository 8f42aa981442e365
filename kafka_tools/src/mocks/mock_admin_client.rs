use crate::admin::{AdminConnector, ClusterAdmin};
use crate::mocks::{
    fixture_broker_config, fixture_consumer_groups, fixture_group_members, fixture_topics,
};
use crate::models::{
    BrokerConfigEntry, ConsumerGroupDescription, ConsumerGroupListing, ConsumerGroupState,
};
use crate::site::Site;
use anyhow::{anyhow, bail};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Cluster held in memory. Clones share state, so a test keeps a handle to
/// inspect what a command did.
#[derive(Debug, Clone, Default)]
pub struct MockAdminClient {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    /// Topic name to partition count.
    topics: BTreeMap<String, usize>,
    groups: Vec<ConsumerGroupListing>,
    broker_configs: HashMap<i32, Vec<BrokerConfigEntry>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    connections: Vec<Site>,
    delete_requests: Vec<String>,
}

impl MockAdminClient {
    /// Cluster populated with the fixture topics, groups and broker 2.
    pub fn new() -> Self {
        let client = Self::default();
        {
            let mut state = client.state();
            state.topics = fixture_topics().into_iter().map(|topic| (topic, 1)).collect();
            state.groups = fixture_consumer_groups();
            state.broker_configs.insert(2, fixture_broker_config());
        }
        client
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn topics(&self) -> Vec<String> {
        self.state().topics.keys().cloned().collect()
    }

    pub fn partitions(&self, topic: &str) -> Option<usize> {
        self.state().topics.get(topic).copied()
    }

    pub fn consumer_groups(&self) -> Vec<ConsumerGroupListing> {
        self.state().groups.clone()
    }

    pub fn set_empty_consumers_to_stable(&self) {
        for group in self.state().groups.iter_mut() {
            if *group.state() == ConsumerGroupState::Empty {
                group.set_state(ConsumerGroupState::Stable);
            }
        }
    }

    /// Requests naming `name` fail from now on.
    pub fn fail_requests_for(&self, name: &str) {
        self.state().failing.insert(name.to_owned());
    }

    /// Requests naming `name` take `delay` before they are answered.
    pub fn delay_requests_for(&self, name: &str, delay: Duration) {
        self.state().delays.insert(name.to_owned(), delay);
    }

    /// Sites connected to, in order.
    pub fn connections(&self) -> Vec<Site> {
        self.state().connections.clone()
    }

    /// Every delete request received, topics and groups alike.
    pub fn delete_requests(&self) -> Vec<String> {
        self.state().delete_requests.clone()
    }

    async fn answer(&self, name: &str) -> Result<(), anyhow::Error> {
        let delay = self.state().delays.get(name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.state().failing.contains(name) {
            bail!("Request for {name} failed: BrokerNotAvailable")
        }
        Ok(())
    }
}

impl ClusterAdmin for MockAdminClient {
    async fn list_topics(&self) -> Result<Vec<String>, anyhow::Error> {
        Ok(self.topics())
    }

    async fn delete_topic(&self, topic: &str) -> Result<(), anyhow::Error> {
        self.state().delete_requests.push(topic.to_owned());
        self.answer(topic).await?;
        match self.state().topics.remove(topic) {
            Some(_) => Ok(()),
            None => bail!("Request for {topic} failed: UnknownTopicOrPartition"),
        }
    }

    async fn create_partitions(
        &self,
        topic: &str,
        total_partitions: usize,
    ) -> Result<(), anyhow::Error> {
        self.answer(topic).await?;
        let mut state = self.state();
        let current = state
            .topics
            .get_mut(topic)
            .ok_or_else(|| anyhow!("Request for {topic} failed: UnknownTopicOrPartition"))?;
        if *current >= total_partitions {
            bail!("Request for {topic} failed: InvalidPartitions, topic has {current} partitions")
        }
        *current = total_partitions;
        Ok(())
    }

    async fn list_consumer_groups(
        &self,
        states: &[ConsumerGroupState],
        _timeout: Duration,
    ) -> Result<Vec<ConsumerGroupListing>, anyhow::Error> {
        Ok(self
            .state()
            .groups
            .iter()
            .filter(|group| states.contains(group.state()))
            .cloned()
            .collect())
    }

    async fn delete_consumer_group(
        &self,
        group: &str,
        _timeout: Duration,
    ) -> Result<(), anyhow::Error> {
        self.state().delete_requests.push(group.to_owned());
        self.answer(group).await?;
        let mut state = self.state();
        let Some(index) = state.groups.iter().position(|g| g.group_id() == group) else {
            bail!("Request for {group} failed: GroupIdNotFound")
        };
        if *state.groups[index].state() != ConsumerGroupState::Empty {
            bail!("Request for {group} failed: NonEmptyGroup")
        }
        state.groups.remove(index);
        Ok(())
    }

    async fn describe_consumer_groups(
        &self,
        groups: &[String],
        _timeout: Duration,
    ) -> Result<Vec<ConsumerGroupDescription>, anyhow::Error> {
        let state = self.state();
        Ok(groups
            .iter()
            .map(|group_id| {
                let group_state = state
                    .groups
                    .iter()
                    .find(|g| g.group_id() == group_id)
                    .map(|g| *g.state())
                    .unwrap_or(ConsumerGroupState::Dead);
                ConsumerGroupDescription {
                    group_id: group_id.clone(),
                    state: group_state,
                    members: fixture_group_members(group_id),
                }
            })
            .collect())
    }

    async fn describe_broker_config(
        &self,
        broker_id: i32,
    ) -> Result<Vec<BrokerConfigEntry>, anyhow::Error> {
        let mut entries = self
            .state()
            .broker_configs
            .get(&broker_id)
            .cloned()
            .ok_or_else(|| anyhow!("Describing broker {broker_id} failed: BrokerNotAvailable"))?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

impl AdminConnector for MockAdminClient {
    type Admin = MockAdminClient;

    fn connect(&self, site: Site) -> Result<Self::Admin, anyhow::Error> {
        self.state().connections.push(site);
        Ok(self.clone())
    }
}
