use std::{fmt, str::FromStr};

pub mod defaults;
pub mod env;

pub use env::read_env_any;

/// Default number of sequential invocations in a demo run.
pub const DEFAULT_ROUNDS: usize = 5;

/// Workload module a demo run drives.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WorkloadKind {
    #[default]
    Fixed,
    Pipeline,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown workload '{0}', expected 'fixed' or 'pipeline'")]
pub struct UnknownWorkload(String);

impl FromStr for WorkloadKind {
    type Err = UnknownWorkload;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed_asset" => Ok(Self::Fixed),
            "pipeline" | "pipeline_metrics" => Ok(Self::Pipeline),
            _ => Err(UnknownWorkload(raw.to_owned())),
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fixed => "fixed",
            Self::Pipeline => "pipeline",
        })
    }
}
