use async_trait::async_trait;
use bench_framework_config::invoker_identity;
use bench_framework_core::scenario::{DynError, Workload, WorkloadContext};

use super::util::{create_asset_request, fractional_asset_id, initialized, submit};

const WORKLOAD_NAME: &str = "fixed_asset";

/// Color, size, owner and appraised value of every created asset.
pub const ASSET_ATTRIBUTES: [&str; 4] = ["blue", "20", "Takazono", "500"];

/// Creates the same asset, under a fresh id, on every invocation.
#[derive(Debug)]
pub struct FixedAssetWorkload {
    invoker: String,
    context: Option<WorkloadContext>,
}

impl FixedAssetWorkload {
    #[must_use]
    pub fn new(invoker: impl Into<String>) -> Self {
        Self {
            invoker: invoker.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn invoker(&self) -> &str {
        &self.invoker
    }

    fn arguments(asset_id: String) -> Vec<String> {
        std::iter::once(asset_id)
            .chain(ASSET_ATTRIBUTES.iter().map(|attr| (*attr).to_owned()))
            .collect()
    }
}

impl Default for FixedAssetWorkload {
    fn default() -> Self {
        Self::new(invoker_identity())
    }
}

#[async_trait]
impl Workload for FixedAssetWorkload {
    fn name(&self) -> &str {
        WORKLOAD_NAME
    }

    fn init(&mut self, ctx: WorkloadContext) -> Result<(), DynError> {
        tracing::info!(
            worker = ctx.worker_index(),
            workers = ctx.total_workers(),
            round = ctx.round_index(),
            invoker = %self.invoker,
            "initializing fixed asset workload"
        );
        self.context = Some(ctx);
        Ok(())
    }

    async fn submit_transaction(&self) -> Result<(), DynError> {
        let ctx = initialized(self.context.as_ref(), WORKLOAD_NAME)?;
        let request = create_asset_request(&self.invoker, Self::arguments(fractional_asset_id()));
        submit(ctx, request).await
    }

    async fn cleanup(&mut self) -> Result<(), DynError> {
        self.context = None;
        Ok(())
    }
}

/// Entry point used by the harness to obtain one workload instance.
#[must_use]
pub fn create_workload_module() -> FixedAssetWorkload {
    FixedAssetWorkload::default()
}
