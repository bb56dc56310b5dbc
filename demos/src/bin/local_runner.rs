use std::{process, sync::Arc, time::Instant};

use anyhow::{Context as _, Result, anyhow};
use bench_framework_core::{
    adapter::RecordingAdapter,
    scenario::{Workload, WorkloadContext},
};
use bench_framework_workflows::workloads::{fixed_asset, pipeline_metrics};
use runner_demos::{DEFAULT_ROUNDS, WorkloadKind, defaults, read_env_any};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    defaults::init_tracing();

    let kind = read_env_any(&["LEDGER_BENCH_WORKLOAD"], WorkloadKind::default());
    let rounds = read_env_any(&["LEDGER_BENCH_ROUNDS"], DEFAULT_ROUNDS);

    info!(%kind, rounds, "starting dry-run workload demo");

    if let Err(err) = run_dry(kind, rounds).await {
        warn!("dry-run workload demo failed: {err:#}");
        process::exit(1);
    }
}

fn build_workload(kind: WorkloadKind) -> Result<Box<dyn Workload>> {
    Ok(match kind {
        WorkloadKind::Fixed => Box::new(fixed_asset::create_workload_module()),
        WorkloadKind::Pipeline => Box::new(
            pipeline_metrics::create_workload_module()
                .context("building pipeline metrics workload failed")?,
        ),
    })
}

async fn run_dry(kind: WorkloadKind, rounds: usize) -> Result<()> {
    let adapter = Arc::new(RecordingAdapter::new());
    let mut workload = build_workload(kind)?;

    let started = Instant::now();
    for round in 0..rounds {
        let ctx = WorkloadContext::new(adapter.clone()).with_round(round);
        workload
            .init(ctx)
            .map_err(|err| anyhow!(err))
            .with_context(|| format!("initializing round {round} failed"))?;

        workload
            .submit_transaction()
            .await
            .map_err(|err| anyhow!(err))
            .with_context(|| format!("{} round {round} failed", workload.name()))?;

        workload
            .cleanup()
            .await
            .map_err(|err| anyhow!(err))
            .with_context(|| format!("cleaning up round {round} failed"))?;
    }

    for request in adapter.requests() {
        info!(
            function = %request.contract_function,
            args = ?request.contract_arguments,
            "recorded submission"
        );
    }
    info!(
        workload = workload.name(),
        submitted = adapter.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "dry run complete"
    );

    Ok(())
}
