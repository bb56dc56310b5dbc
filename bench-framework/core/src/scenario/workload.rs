use async_trait::async_trait;

use super::{DynError, WorkloadContext};
use crate::pipeline::PipelineClientError;

#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("workload `{workload}` submitted before init")]
    NotInitialized { workload: &'static str },
    #[error("metrics pipeline call failed: {0}")]
    Pipeline(#[from] PipelineClientError),
}

#[async_trait]
/// A unit of benchmark load. The harness calls `init` once per round and then
/// `submit_transaction` as many times as its rate controller decides.
pub trait Workload: Send + Sync {
    fn name(&self) -> &str;

    fn init(&mut self, ctx: WorkloadContext) -> Result<(), DynError>;

    /// Performs exactly one ledger submission.
    async fn submit_transaction(&self) -> Result<(), DynError>;

    async fn cleanup(&mut self) -> Result<(), DynError> {
        Ok(())
    }
}
