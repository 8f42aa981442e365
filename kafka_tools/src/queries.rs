pub mod describe_broker_config;
pub mod describe_consumers;
pub mod list_consumers;
pub mod list_topics;
