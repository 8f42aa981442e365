mod broker_config;
mod consumer_group;

pub use broker_config::*;
pub use consumer_group::*;
