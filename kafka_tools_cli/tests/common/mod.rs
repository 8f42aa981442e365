#![allow(dead_code)]

use clap::Parser;
use kafka_tools::mocks::MockAdminClient;
use kafka_tools_cli::app_config::AppConfig;
use kafka_tools_cli::cli::Cli;
use kafka_tools_cli::error::exit_code_for;
use kafka_tools_cli::startup::run;

pub struct Outcome {
    pub exit_code: u8,
    pub stdout: String,
}

/// Runs a command line against `admin`, answering prompts with `input`.
pub async fn run_with_config(
    admin: &MockAdminClient,
    config: &AppConfig,
    args: &[&str],
    input: &str,
) -> Outcome {
    let cli = Cli::try_parse_from(std::iter::once("kafka-tools").chain(args.iter().copied()))
        .expect("command line should parse");
    let mut stdout = Vec::new();
    let mut input = input.as_bytes();

    let result = run(cli, config, admin, &mut stdout, &mut input).await;

    Outcome {
        exit_code: result.as_ref().map_or_else(exit_code_for, |_| 0),
        stdout: String::from_utf8(stdout).expect("output should be utf-8"),
    }
}

pub async fn run_cli(admin: &MockAdminClient, args: &[&str], input: &str) -> Outcome {
    run_with_config(admin, &AppConfig::default(), args, input).await
}

pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
