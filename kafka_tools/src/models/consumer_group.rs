use getset::Getters;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConsumerGroupState {
    Unknown,
    PreparingRebalance,
    CompletingRebalance,
    Stable,
    Dead,
    Empty,
}

impl Display for ConsumerGroupState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsumerGroupState::Unknown => write!(f, "UNKNOWN"),
            ConsumerGroupState::PreparingRebalance => write!(f, "PREPARING_REBALANCING"),
            ConsumerGroupState::CompletingRebalance => write!(f, "COMPLETING_REBALANCING"),
            ConsumerGroupState::Stable => write!(f, "STABLE"),
            ConsumerGroupState::Dead => write!(f, "DEAD"),
            ConsumerGroupState::Empty => write!(f, "EMPTY"),
        }
    }
}

impl FromStr for ConsumerGroupState {
    type Err = std::convert::Infallible;

    /// Accepts the state names brokers report (`Stable`, `AwaitingSync`, ...).
    /// Anything unrecognised maps to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "").to_ascii_lowercase();
        let state = match normalized.as_str() {
            "stable" => ConsumerGroupState::Stable,
            "empty" => ConsumerGroupState::Empty,
            "dead" => ConsumerGroupState::Dead,
            "preparingrebalance" | "preparingrebalancing" => ConsumerGroupState::PreparingRebalance,
            "completingrebalance" | "completingrebalancing" | "awaitingsync" => {
                ConsumerGroupState::CompletingRebalance
            }
            _ => ConsumerGroupState::Unknown,
        };
        Ok(state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct ConsumerGroupListing {
    group_id: String,
    state: ConsumerGroupState,
}

impl ConsumerGroupListing {
    pub fn new(group_id: impl Into<String>, state: ConsumerGroupState) -> Self {
        Self {
            group_id: group_id.into(),
            state,
        }
    }

    pub fn set_state(&mut self, state: ConsumerGroupState) {
        self.state = state
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TopicPartition {
    pub topic: String,
    pub partition: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescription {
    pub member_id: String,
    pub client_id: String,
    pub host: String,
    pub assignment: Vec<TopicPartition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerGroupDescription {
    pub group_id: String,
    pub state: ConsumerGroupState,
    pub members: Vec<MemberDescription>,
}

impl ConsumerGroupDescription {
    /// Distinct topics assigned to any member, sorted.
    pub fn assigned_topics(&self) -> Vec<&str> {
        let mut topics = self
            .members
            .iter()
            .flat_map(|member| member.assignment.iter())
            .map(|tp| tp.topic.as_str())
            .collect::<Vec<_>>();
        topics.sort_unstable();
        topics.dedup();
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_broker_state_names() {
        let parse = |s: &str| s.parse::<ConsumerGroupState>().unwrap();
        assert_eq!(parse("Stable"), ConsumerGroupState::Stable);
        assert_eq!(parse("Empty"), ConsumerGroupState::Empty);
        assert_eq!(parse("AwaitingSync"), ConsumerGroupState::CompletingRebalance);
        assert_eq!(parse("PreparingRebalance"), ConsumerGroupState::PreparingRebalance);
        assert_eq!(parse("whatever"), ConsumerGroupState::Unknown);
    }

    #[test]
    fn assigned_topics_are_distinct_and_sorted() {
        let member = |topics: &[&str]| MemberDescription {
            member_id: "m".to_owned(),
            client_id: "c".to_owned(),
            host: "/127.0.0.1".to_owned(),
            assignment: topics
                .iter()
                .enumerate()
                .map(|(partition, topic)| TopicPartition {
                    topic: topic.to_string(),
                    partition: partition as i32,
                })
                .collect(),
        };
        let description = ConsumerGroupDescription {
            group_id: "group".to_owned(),
            state: ConsumerGroupState::Stable,
            members: vec![member(&["b", "a"]), member(&["a", "c"])],
        };

        assert_eq!(description.assigned_topics(), vec!["a", "b", "c"]);
    }
}
