pub mod workloads;

pub use workloads::{fixed_asset::FixedAssetWorkload, pipeline_metrics::PipelineMetricsWorkload};
