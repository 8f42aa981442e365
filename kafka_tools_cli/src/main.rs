#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_tools::admin::SiteConnector;
use kafka_tools_cli::app_config::AppConfig;
use kafka_tools_cli::cli::Cli;
use kafka_tools_cli::error::exit_code_for;
use kafka_tools_cli::startup::run;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> ExitCode {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let cli = Cli::parse();

    match run_cli(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn run_cli(cli: Cli) -> Result<(), anyhow::Error> {
    let config = AppConfig::build().context("While building app config")?;
    let connector = SiteConnector::new(config.auth_dir.clone(), config.metadata_timeout());

    let mut out = std::io::stdout().lock();
    let mut input = std::io::stdin().lock();

    run(cli, &config, &connector, &mut out, &mut input).await
}
