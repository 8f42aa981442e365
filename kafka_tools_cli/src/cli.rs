use clap::{ArgGroup, Args, Parser, Subcommand};
use kafka_tools::filters::{RegexMode, StateFilter, TopicFilterOptions};
use kafka_tools::site::Site;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kafka-tools", version, about = "Administration of the Kafka clusters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Credential files.
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
    /// Topics of a site.
    Topics(TopicsArgs),
    /// Consumer groups of a site.
    Consumers(ConsumersArgs),
    /// Broker configuration of a site.
    Config(ConfigArgs),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Write a credential template for every site.
    CreatePropFiles {
        /// Directory receiving the files.
        #[arg(long)]
        auth_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct TopicsArgs {
    pub site: Site,

    #[command(subcommand)]
    pub command: TopicsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TopicsCommand {
    /// List topics, optionally filtered.
    List {
        /// Keep topics matching the regular expression.
        #[arg(long)]
        regex: Option<String>,
        /// Keep topics containing the name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete the selected topics.
    Delete {
        #[command(flatten)]
        filter: TopicFilterArgs,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Raise the partition count of the telemetry topics of a CSC.
    SetPartitions {
        csc: String,
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        partitions: u32,
    },
}

/// Topic filters. Conflicts are reported by the selection itself so that
/// the message names every flag given.
#[derive(Debug, Args)]
pub struct TopicFilterArgs {
    /// Select topics matching the regular expression.
    #[arg(long)]
    pub regex: Option<String>,
    /// Select topics containing the name.
    #[arg(long)]
    pub name: Option<String>,
    /// Select topics containing any of the comma separated names.
    #[arg(long)]
    pub name_list: Option<String>,
    /// Select topics containing any name listed in the file, one per line.
    #[arg(long)]
    pub name_file: Option<PathBuf>,
}

impl From<TopicFilterArgs> for TopicFilterOptions {
    fn from(value: TopicFilterArgs) -> Self {
        TopicFilterOptions {
            regex: value.regex,
            name: value.name,
            name_list: value.name_list,
            name_file: value.name_file,
        }
    }
}

#[derive(Debug, Args)]
pub struct ConsumersArgs {
    /// Request timeout in milliseconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    pub site: Site,

    #[command(subcommand)]
    pub command: ConsumersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConsumersCommand {
    /// Count active and inactive groups.
    Summary {
        /// Count the telegraf groups as well.
        #[arg(long)]
        no_telegraph_filter: bool,
    },
    /// List groups and their state.
    List {
        /// List the telegraf groups as well.
        #[arg(long)]
        no_connector_filter: bool,
        #[command(flatten)]
        state: StateArgs,
        #[command(flatten)]
        regex: GroupRegexArgs,
    },
    /// Delete inactive groups.
    Delete {
        /// Delete the telegraf groups as well.
        #[arg(long)]
        delete_connectors: bool,
        #[command(flatten)]
        regex: GroupRegexArgs,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the topics assigned to the members of groups.
    Describe {
        /// Comma separated group ids.
        groups: String,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("state").args(["all", "active", "inactive"])))]
pub struct StateArgs {
    /// Stable and empty groups (default).
    #[arg(long)]
    pub all: bool,
    /// Stable groups only.
    #[arg(long)]
    pub active: bool,
    /// Empty groups only.
    #[arg(long)]
    pub inactive: bool,
}

impl StateArgs {
    pub fn filter(&self) -> StateFilter {
        if self.active {
            StateFilter::Active
        } else if self.inactive {
            StateFilter::Inactive
        } else {
            StateFilter::All
        }
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("regex_mode").args(["regex_inclusive", "regex_exclusive"])))]
pub struct GroupRegexArgs {
    /// Regular expression applied to group ids.
    #[arg(long)]
    pub regex: Option<String>,
    /// Keep groups matching the regex.
    #[arg(long)]
    pub regex_inclusive: bool,
    /// Drop groups matching the regex (default).
    #[arg(long)]
    pub regex_exclusive: bool,
}

impl GroupRegexArgs {
    pub fn mode(&self) -> RegexMode {
        if self.regex_inclusive {
            RegexMode::Inclusive
        } else {
            RegexMode::Exclusive
        }
    }
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    pub site: Site,

    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Dump the configuration of a broker.
    ///
    /// Synonyms are not available from the broker client library, so every
    /// entry lists only itself, with its effective source, as synonym.
    /// Fallback values such as DEFAULT_CONFIG are not shown.
    Brokers { broker_id: i32 },
}
