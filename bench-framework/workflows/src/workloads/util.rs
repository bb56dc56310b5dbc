use std::time::{SystemTime, UNIX_EPOCH};

use bench_framework_config::constants::{CONTRACT_ID, CREATE_ASSET_FUNCTION};
use bench_framework_core::{
    adapter::TransactionRequest,
    scenario::{DynError, WorkloadContext, WorkloadError},
};
use rand::{Rng as _, thread_rng};
use tracing::debug;

/// Exclusive bound of the random suffix in run asset ids.
pub const RUN_SUFFIX_BOUND: u32 = 1_000_000;

/// `Asset_<fraction>`, unique only by the randomness of the fraction.
#[must_use]
pub fn fractional_asset_id() -> String {
    format!("Asset_{}", thread_rng().r#gen::<f64>())
}

/// `RUN_<unix millis>_<suffix>`, sortable by creation time.
#[must_use]
pub fn run_asset_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    let suffix = thread_rng().gen_range(0..RUN_SUFFIX_BOUND);
    format!("RUN_{millis}_{suffix}")
}

/// `CreateAsset` write on the `basic` chaincode.
#[must_use]
pub fn create_asset_request(invoker: &str, arguments: Vec<String>) -> TransactionRequest {
    TransactionRequest::invoke(CONTRACT_ID, CREATE_ASSET_FUNCTION, invoker, arguments)
}

/// Returns the context set by `init`, or the error every workload reports
/// when invoked too early.
pub fn initialized<'a>(
    context: Option<&'a WorkloadContext>,
    workload: &'static str,
) -> Result<&'a WorkloadContext, WorkloadError> {
    context.ok_or(WorkloadError::NotInitialized { workload })
}

/// Hands one request to the adapter. Adapter failures are returned as-is.
pub async fn submit(ctx: &WorkloadContext, request: TransactionRequest) -> Result<(), DynError> {
    debug!(
        worker = ctx.worker_index(),
        round = ctx.round_index(),
        asset_id = request.contract_arguments.first().map(String::as_str),
        "submitting create asset transaction"
    );
    ctx.adapter().send_request(request).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fractional_ids_do_not_repeat() {
        let ids: HashSet<_> = (0..1_000).map(|_| fractional_asset_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.starts_with("Asset_0")));
    }

    #[test]
    fn run_id_has_timestamp_and_bounded_suffix() {
        let id = run_asset_id();

        let mut parts = id.splitn(3, '_');
        assert_eq!(parts.next(), Some("RUN"));
        let millis: u128 = parts.next().unwrap().parse().unwrap();
        let suffix: u32 = parts.next().unwrap().parse().unwrap();
        assert!(millis > 0);
        assert!(suffix < RUN_SUFFIX_BOUND);
    }

    #[test]
    fn create_asset_targets_basic_chaincode() {
        let request = create_asset_request("User1", vec!["a".into()]);

        assert_eq!(request.contract_id, "basic");
        assert_eq!(request.contract_function, "CreateAsset");
        assert_eq!(request.invoker_identity, "User1");
        assert!(!request.read_only);
    }
}
