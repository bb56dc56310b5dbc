pub mod fixed_asset;
pub mod pipeline_metrics;
pub mod util;
