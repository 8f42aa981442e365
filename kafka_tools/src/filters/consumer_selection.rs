use crate::error::ToolError;
use crate::filters::compile_regex;
use crate::models::{ConsumerGroupListing, ConsumerGroupState};
use regex::Regex;

/// Prefix of the groups owned by the telegraf connectors.
pub const CONNECTOR_PREFIX: &str = "telegraf";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StateFilter {
    pub fn states(&self) -> &'static [ConsumerGroupState] {
        match self {
            StateFilter::All => &[ConsumerGroupState::Stable, ConsumerGroupState::Empty],
            StateFilter::Active => &[ConsumerGroupState::Stable],
            StateFilter::Inactive => &[ConsumerGroupState::Empty],
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RegexMode {
    Inclusive,
    #[default]
    Exclusive,
}

#[derive(Debug, Clone, Default)]
pub enum GroupPattern {
    #[default]
    Any,
    Matching(Regex),
    NotMatching(Regex),
}

impl GroupPattern {
    pub fn from_options(regex: Option<&str>, mode: RegexMode) -> Result<Self, ToolError> {
        let Some(regex) = regex else {
            return Ok(GroupPattern::Any);
        };
        let regex = compile_regex(regex)?;
        Ok(match mode {
            RegexMode::Inclusive => GroupPattern::Matching(regex),
            RegexMode::Exclusive => GroupPattern::NotMatching(regex),
        })
    }

    pub fn matches(&self, group_id: &str) -> bool {
        match self {
            GroupPattern::Any => true,
            GroupPattern::Matching(regex) => regex.is_match(group_id),
            GroupPattern::NotMatching(regex) => !regex.is_match(group_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsumerSelection {
    pub state: StateFilter,
    pub pattern: GroupPattern,
    /// Keep `telegraf*` groups, which are dropped otherwise.
    pub include_connectors: bool,
}

impl ConsumerSelection {
    pub fn keeps(&self, listing: &ConsumerGroupListing) -> bool {
        let group_id = listing.group_id();
        self.state.states().contains(listing.state())
            && (self.include_connectors || !group_id.starts_with(CONNECTOR_PREFIX))
            && self.pattern.matches(group_id)
    }

    /// Matching groups sorted by group id.
    pub fn select(&self, listings: Vec<ConsumerGroupListing>) -> Vec<ConsumerGroupListing> {
        let mut selected = listings
            .into_iter()
            .filter(|listing| self.keeps(listing))
            .collect::<Vec<_>>();
        selected.sort_by(|a, b| a.group_id().cmp(b.group_id()));
        selected
    }
}
