//! Client side of the metrics pipeline: the service that runs an embedding
//! benchmark matrix and reports the last run's metrics.

mod client;
mod request;
mod response;

pub use client::{PipelineClient, PipelineClientError, PipelineConfig};
pub use request::PipelineRequest;
pub use response::{MetricValue, PipelineMetrics, PipelineResponse, format_metric};
