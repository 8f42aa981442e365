use crate::app_config::AppConfig;
use crate::cli::{
    AuthCommand, Cli, Command, ConfigCommand, ConsumersArgs, ConsumersCommand, TopicsArgs,
    TopicsCommand,
};
use crate::confirmation::confirm;
use crate::print_helpers;
use anyhow::Context;
use kafka_tools::admin::AdminConnector;
use kafka_tools::auth::create_properties_files;
use kafka_tools::commands::delete_consumers::delete_consumers;
use kafka_tools::commands::delete_topics::delete_topics;
use kafka_tools::commands::set_partitions::{set_partitions, telemetry_topics};
use kafka_tools::error::check_for_exception;
use kafka_tools::filters::{
    ConsumerSelection, GroupPattern, StateFilter, TopicFilterOptions, TopicSelection,
};
use kafka_tools::queries::describe_broker_config::describe_broker_config;
use kafka_tools::queries::describe_consumers::{describe_consumers, parse_group_list};
use kafka_tools::queries::list_consumers::{
    list_consumers, summarize_consumers, ConsumerSummaryQuery, ListConsumersQuery,
};
use kafka_tools::queries::list_topics::list_topics;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::info;

/// Executes one parsed command line. Command output goes to `out`,
/// confirmation answers are read from `input`.
pub async fn run<C: AdminConnector>(
    cli: Cli,
    config: &AppConfig,
    connector: &C,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), anyhow::Error> {
    match cli.command {
        Command::Auth {
            command: AuthCommand::CreatePropFiles { auth_dir },
        } => {
            let auth_dir = auth_dir.unwrap_or_else(|| config.auth_dir.clone());
            for path in create_properties_files(&auth_dir)? {
                writeln!(out, "Wrote {}", path.display())?;
            }
            Ok(())
        }
        Command::Topics(args) => run_topics(args, connector, out, input).await,
        Command::Consumers(args) => run_consumers(args, config, connector, out, input).await,
        Command::Config(args) => {
            let ConfigCommand::Brokers { broker_id } = args.command;
            let admin = connector.connect(args.site)?;
            let entries = describe_broker_config(&admin, broker_id).await?;
            let rendered = print_helpers::broker_configs(broker_id, &entries);
            out.write_all(rendered.as_bytes())?;
            check_for_exception(&rendered)?;
            Ok(())
        }
    }
}

async fn run_topics<C: AdminConnector>(
    args: TopicsArgs,
    connector: &C,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), anyhow::Error> {
    let site = args.site;
    match args.command {
        TopicsCommand::List { regex, name } => {
            let selection = TopicFilterOptions {
                regex,
                name,
                ..Default::default()
            }
            .into_selection()?;
            let admin = connector.connect(site)?;
            let topics = list_topics(&admin, &selection).await?;
            print_helpers::topic_list(out, &topics)?;
        }
        TopicsCommand::Delete { filter, yes } => {
            let selection = TopicFilterOptions::from(filter).into_required_selection()?;
            if !yes {
                confirm(out, input, &format!("Delete all requested topics from {site}."))?;
            }
            let admin = connector.connect(site)?;
            let topics = list_topics(&admin, &selection).await?;
            let outcome = delete_topics(&admin, topics).await;
            info!("Topic deletion on {site}: {outcome:?}");
            print_helpers::deletion_summary(out, "topics", &outcome)?;
        }
        TopicsCommand::SetPartitions { csc, partitions } => {
            let admin = connector.connect(site)?;
            let candidates =
                list_topics(&admin, &TopicSelection::Substring(csc.clone())).await?;
            let topics = telemetry_topics(&candidates, &csc);
            let partitions =
                usize::try_from(partitions).context("While converting partition count")?;
            let outcome = set_partitions(&admin, topics, partitions).await;
            info!("Partition change on {site}: {outcome:?}");
            print_helpers::modification_summary(out, &outcome)?;
        }
    }
    Ok(())
}

async fn run_consumers<C: AdminConnector>(
    args: ConsumersArgs,
    config: &AppConfig,
    connector: &C,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), anyhow::Error> {
    let site = args.site;
    let timeout = args
        .timeout
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.consumer_timeout());

    match args.command {
        ConsumersCommand::Summary { no_telegraph_filter } => {
            let admin = connector.connect(site)?;
            let query = ConsumerSummaryQuery {
                include_connectors: no_telegraph_filter,
                timeout,
            };
            let summary = summarize_consumers(&admin, query).await?;
            print_helpers::consumer_summary(out, &summary)?;
        }
        ConsumersCommand::List {
            no_connector_filter,
            state,
            regex,
        } => {
            let selection = ConsumerSelection {
                state: state.filter(),
                pattern: GroupPattern::from_options(regex.regex.as_deref(), regex.mode())?,
                include_connectors: no_connector_filter,
            };
            let admin = connector.connect(site)?;
            let query = ListConsumersQuery { selection, timeout };
            let response = list_consumers(&admin, query).await?;
            print_helpers::consumer_table(out, &response)?;
        }
        ConsumersCommand::Delete {
            delete_connectors,
            regex,
            yes,
        } => {
            let selection = ConsumerSelection {
                state: StateFilter::Inactive,
                pattern: GroupPattern::from_options(regex.regex.as_deref(), regex.mode())?,
                include_connectors: delete_connectors,
            };
            let admin = connector.connect(site)?;
            let query = ListConsumersQuery { selection, timeout };
            let response = list_consumers(&admin, query).await?;
            if response.groups.is_empty() {
                writeln!(out, "No consumers to delete.")?;
                return Ok(());
            }
            if !yes {
                confirm(out, input, &format!("Delete all requested consumers from {site}."))?;
            }
            let groups = response
                .groups
                .iter()
                .map(|group| group.group_id().clone())
                .collect();
            let outcome = delete_consumers(&admin, groups, timeout).await;
            info!("Consumer deletion on {site}: {outcome:?}");
            print_helpers::deletion_summary(out, "consumers", &outcome)?;
        }
        ConsumersCommand::Describe { groups } => {
            let groups = parse_group_list(&groups)?;
            let admin = connector.connect(site)?;
            let descriptions = describe_consumers(&admin, &groups, timeout).await?;
            let rendered = print_helpers::consumer_descriptions(&descriptions);
            out.write_all(rendered.as_bytes())?;
            check_for_exception(&rendered)?;
        }
    }
    Ok(())
}
