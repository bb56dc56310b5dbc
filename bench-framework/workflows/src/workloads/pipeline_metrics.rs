use async_trait::async_trait;
use bench_framework_config::invoker_identity;
use bench_framework_core::{
    pipeline::{
        PipelineClient, PipelineClientError, PipelineConfig, PipelineMetrics, PipelineRequest,
    },
    scenario::{DynError, Workload, WorkloadContext, WorkloadError},
};
use tracing::{info, warn};

use super::util::{create_asset_request, initialized, run_asset_id, submit};

const WORKLOAD_NAME: &str = "pipeline_metrics";

/// Runs the remote benchmark matrix, then records its metrics on the ledger.
///
/// A pipeline that cannot be reached fails the invocation. A pipeline that
/// answers with garbage or without metrics still produces a submission,
/// carrying default values.
#[derive(Debug)]
pub struct PipelineMetricsWorkload {
    client: PipelineClient,
    request: PipelineRequest,
    invoker: String,
    context: Option<WorkloadContext>,
}

impl PipelineMetricsWorkload {
    pub fn new(
        config: &PipelineConfig,
        invoker: impl Into<String>,
    ) -> Result<Self, PipelineClientError> {
        Ok(Self {
            client: PipelineClient::new(config)?,
            request: PipelineRequest::default(),
            invoker: invoker.into(),
            context: None,
        })
    }

    /// Replaces the benchmark matrix sent to the pipeline.
    #[must_use]
    pub fn with_request(mut self, request: PipelineRequest) -> Self {
        self.request = request;
        self
    }

    #[must_use]
    pub const fn request(&self) -> &PipelineRequest {
        &self.request
    }

    fn arguments(asset_id: String, metrics: &PipelineMetrics) -> Vec<String> {
        vec![
            asset_id,
            metrics.model_id_or_default().to_owned(),
            metrics.docs_per_sec_or_default(),
            metrics.rss_peak_mb_or_default(),
            metrics.p95_ms_or_default(),
        ]
    }

    async fn fetch_metrics(&self) -> Result<PipelineMetrics, WorkloadError> {
        let response = self.client.execute(&self.request).await?;
        if response.is_error() {
            warn!(
                message = response.message.as_deref().unwrap_or_default(),
                "metrics pipeline reported an error; submitting default metrics"
            );
        }
        Ok(response.into_metrics())
    }
}

#[async_trait]
impl Workload for PipelineMetricsWorkload {
    fn name(&self) -> &str {
        WORKLOAD_NAME
    }

    fn init(&mut self, ctx: WorkloadContext) -> Result<(), DynError> {
        info!(
            worker = ctx.worker_index(),
            workers = ctx.total_workers(),
            round = ctx.round_index(),
            url = %self.client.url(),
            invoker = %self.invoker,
            "initializing pipeline metrics workload"
        );
        self.context = Some(ctx);
        Ok(())
    }

    async fn submit_transaction(&self) -> Result<(), DynError> {
        let ctx = initialized(self.context.as_ref(), WORKLOAD_NAME)?;

        let metrics = self.fetch_metrics().await?;
        let asset_id = run_asset_id();
        info!(
            %asset_id,
            model_id = metrics.model_id_or_default(),
            docs_per_sec = %metrics.docs_per_sec_or_default(),
            rss_peak_mb = %metrics.rss_peak_mb_or_default(),
            p95_ms = %metrics.p95_ms_or_default(),
            "pipeline metrics collected"
        );

        let request = create_asset_request(&self.invoker, Self::arguments(asset_id, &metrics));
        submit(ctx, request).await
    }

    async fn cleanup(&mut self) -> Result<(), DynError> {
        self.context = None;
        Ok(())
    }
}

/// Entry point used by the harness to obtain one workload instance, wired to
/// the pipeline configured through the environment.
pub fn create_workload_module() -> Result<PipelineMetricsWorkload, PipelineClientError> {
    PipelineMetricsWorkload::new(&PipelineConfig::from_env()?, invoker_identity())
}
