//! Harness-facing contracts: the workload lifecycle and the context a
//! workload receives when a round starts.

mod context;
mod workload;

pub use context::WorkloadContext;
pub use workload::{Workload, WorkloadError};

/// Error type crossing the harness boundary.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
