use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use super::{SubmissionAdapter, TransactionRequest};
use crate::scenario::DynError;

/// In-memory adapter that keeps every request it is handed.
///
/// Backs dry runs and tests. A failing recorder rejects every call without
/// recording anything.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    requests: Mutex<Vec<TransactionRequest>>,
    failure: Option<String>,
}

impl RecordingAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder whose every submission fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// Snapshot of the requests recorded so far, in submission order.
    #[must_use]
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionAdapter for RecordingAdapter {
    async fn send_requests(&self, requests: &[TransactionRequest]) -> Result<(), DynError> {
        if let Some(message) = &self.failure {
            return Err(message.clone().into());
        }

        for request in requests {
            debug!(
                contract = %request.contract_id,
                function = %request.contract_function,
                invoker = %request.invoker_identity,
                args = ?request.contract_arguments,
                read_only = request.read_only,
                "recording ledger request"
            );
        }

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(requests);
        Ok(())
    }
}
