use crate::models::{
    BrokerConfigEntry, ConfigSourceKind, ConfigSynonym, ConsumerGroupListing, ConsumerGroupState,
    MemberDescription, TopicPartition,
};

pub fn fixture_topics() -> Vec<String> {
    [
        "topic1.attribute1",
        "topic1.attribute2",
        "topic1.attribute3",
        "topic2.attribute1",
        "topic2.attribute2",
        "topic2.attribute3",
        "lsst.sal.ATAOS.command_start",
        "lsst.sal.ATAOS.logevent_heartbeat",
        "lsst.sal.ATAOS.logevent_summaryState",
        "lsst.sal.ATAOS.timestamp",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

pub fn fixture_consumer_groups() -> Vec<ConsumerGroupListing> {
    let stable = [
        "telegraf-kafka-maintel",
        "consumer1",
        "consumer5",
        "consumer2",
        "consumer6",
        "consumer9",
        "consumer11",
        "consumer21",
    ]
    .map(|id| ConsumerGroupListing::new(id, ConsumerGroupState::Stable));
    let empty = ["consumer13", "consumer10"]
        .map(|id| ConsumerGroupListing::new(id, ConsumerGroupState::Empty));

    stable.into_iter().chain(empty).collect()
}

/// Members of the fixture groups that have any.
pub fn fixture_group_members(group_id: &str) -> Vec<MemberDescription> {
    let member = |member_id: &str, topics: &[&str]| MemberDescription {
        member_id: member_id.to_owned(),
        client_id: format!("{group_id}-client"),
        host: "/127.0.0.1".to_owned(),
        assignment: topics
            .iter()
            .map(|topic| TopicPartition {
                topic: topic.to_string(),
                partition: 0,
            })
            .collect(),
    };

    match group_id {
        "consumer1" => vec![
            member("consumer1-a", &["topic2", "topic1"]),
            member("consumer1-b", &["topic3", "topic1"]),
        ],
        "consumer5" => vec![member(
            "consumer5-a",
            &["lsst.sal.ATAOS.timestamp", "lsst.sal.ATAOS.logevent_heartbeat"],
        )],
        _ => vec![],
    }
}

pub fn fixture_broker_config() -> Vec<BrokerConfigEntry> {
    vec![
        BrokerConfigEntry {
            name: "log.message.timestamp.type".to_owned(),
            value: Some("LogAppendTime".to_owned()),
            source: ConfigSourceKind::StaticBroker,
            is_read_only: true,
            is_default: false,
            is_sensitive: false,
            synonyms: vec![ConfigSynonym {
                source: ConfigSourceKind::Default,
                name: "log.message.timestamp.type".to_owned(),
                value: Some("CreateTime".to_owned()),
            }],
        },
        BrokerConfigEntry {
            name: "group.min.session.timeout.ms".to_owned(),
            value: Some("60000".to_owned()),
            source: ConfigSourceKind::Default,
            is_read_only: true,
            is_default: true,
            is_sensitive: false,
            synonyms: vec![ConfigSynonym {
                source: ConfigSourceKind::Default,
                name: "group.min.session.timeout.ms".to_owned(),
                value: Some("60000".to_owned()),
            }],
        },
    ]
}
