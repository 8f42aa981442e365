pub mod app_config;
pub mod cli;
pub mod confirmation;
pub mod error;
pub mod print_helpers;
pub mod startup;
