use std::{fmt, sync::Arc};

use crate::adapter::SubmissionAdapter;

/// Everything the harness hands a workload before its first invocation.
#[derive(Clone)]
pub struct WorkloadContext {
    worker_index: usize,
    total_workers: usize,
    round_index: usize,
    adapter: Arc<dyn SubmissionAdapter>,
}

impl WorkloadContext {
    #[must_use]
    pub fn new(adapter: Arc<dyn SubmissionAdapter>) -> Self {
        Self {
            worker_index: 0,
            total_workers: 1,
            round_index: 0,
            adapter,
        }
    }

    /// Places the workload within a multi-worker round.
    #[must_use]
    pub const fn with_worker(mut self, worker_index: usize, total_workers: usize) -> Self {
        self.worker_index = worker_index;
        self.total_workers = total_workers;
        self
    }

    #[must_use]
    pub const fn with_round(mut self, round_index: usize) -> Self {
        self.round_index = round_index;
        self
    }

    #[must_use]
    pub const fn worker_index(&self) -> usize {
        self.worker_index
    }

    #[must_use]
    pub const fn total_workers(&self) -> usize {
        self.total_workers
    }

    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub fn adapter(&self) -> &dyn SubmissionAdapter {
        self.adapter.as_ref()
    }
}

impl fmt::Debug for WorkloadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkloadContext")
            .field("worker_index", &self.worker_index)
            .field("total_workers", &self.total_workers)
            .field("round_index", &self.round_index)
            .finish_non_exhaustive()
    }
}
