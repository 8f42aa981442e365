use crate::models::ConsumerGroupListing;

#[derive(Debug, Default)]
pub struct ListConsumersResponse {
    /// Sorted by group id.
    pub groups: Vec<ConsumerGroupListing>,
}

impl ListConsumersResponse {
    /// Width of the group id column, the longest id in the result.
    pub fn name_width(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.group_id().chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ConsumerSummary {
    pub active: usize,
    pub inactive: usize,
}

impl ConsumerSummary {
    pub fn total(&self) -> usize {
        self.active + self.inactive
    }
}
