#![allow(clippy::too_many_arguments)]

pub mod admin;
pub mod auth;
pub mod bulk;
pub mod commands;
pub mod connection_settings;
pub mod error;
pub mod filters;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod models;
pub mod properties;
pub mod queries;
pub mod site;
mod utils;
