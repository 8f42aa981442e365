use crate::filters::ConsumerSelection;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ListConsumersQuery {
    pub selection: ConsumerSelection,
    pub timeout: Duration,
}

#[derive(Debug, Copy, Clone)]
pub struct ConsumerSummaryQuery {
    /// Count `telegraf*` groups as well.
    pub include_connectors: bool,
    pub timeout: Duration,
}
