pub mod metrics;
pub mod tracing;

pub use self::metrics::request_metrics_middleware;
pub use self::tracing::{request_id_middleware, REQUEST_ID_HEADER};
