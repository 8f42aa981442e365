mod admin_wrapper;
mod assignment;
mod cluster_admin;
mod site_connector;

pub use admin_wrapper::*;
pub use assignment::*;
pub use cluster_admin::*;
pub use site_connector::*;
