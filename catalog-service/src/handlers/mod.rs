pub mod meta;
pub mod songs;
pub mod users;

pub use meta::{health_check, metrics_endpoint, service_index};
