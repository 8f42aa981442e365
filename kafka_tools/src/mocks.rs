//! In-memory stand-in for a cluster, used by the test-suites.

mod fixtures;
mod mock_admin_client;

pub use fixtures::*;
pub use mock_admin_client::*;
