mod recording;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use recording::RecordingAdapter;

use crate::scenario::DynError;

/// One chaincode invocation as the submission adapter receives it.
///
/// Arguments are always strings; workloads render numbers before building
/// the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub contract_id: String,
    pub contract_function: String,
    pub invoker_identity: String,
    pub contract_arguments: Vec<String>,
    pub read_only: bool,
}

impl TransactionRequest {
    /// Builds a ledger write.
    #[must_use]
    pub fn invoke(
        contract_id: impl Into<String>,
        contract_function: impl Into<String>,
        invoker_identity: impl Into<String>,
        contract_arguments: Vec<String>,
    ) -> Self {
        Self {
            contract_id: contract_id.into(),
            contract_function: contract_function.into(),
            invoker_identity: invoker_identity.into(),
            contract_arguments,
            read_only: false,
        }
    }
}

/// Harness capability that performs requests against the ledger network.
/// Retries and consensus guarantees are the implementor's business.
#[async_trait]
pub trait SubmissionAdapter: Send + Sync {
    async fn send_requests(&self, requests: &[TransactionRequest]) -> Result<(), DynError>;

    async fn send_request(&self, request: TransactionRequest) -> Result<(), DynError> {
        self.send_requests(std::slice::from_ref(&request)).await
    }
}
