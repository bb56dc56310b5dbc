use bench_framework_config::constants::{
    DEFAULT_BATCHES, DEFAULT_N_PER_SIZE, DEFAULT_THREADS, DEFAULT_WARMUP_DOCS,
};
use serde::Serialize;
use serde_with::{DisplayFromStr, StringWithSeparator, formats::SpaceSeparator, serde_as};

/// Benchmark matrix parameters. The service takes every field as a string,
/// with batch sizes space-separated.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineRequest {
    #[serde_as(as = "DisplayFromStr")]
    pub n_per_size: u32,
    #[serde_as(as = "StringWithSeparator::<SpaceSeparator, u32>")]
    pub batches: Vec<u32>,
    #[serde_as(as = "DisplayFromStr")]
    pub threads: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub warmup_docs: u32,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self {
            n_per_size: DEFAULT_N_PER_SIZE,
            batches: DEFAULT_BATCHES.to_vec(),
            threads: DEFAULT_THREADS,
            warmup_docs: DEFAULT_WARMUP_DOCS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matrix_is_string_typed() {
        let body = serde_json::to_value(PipelineRequest::default()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "n_per_size": "24",
                "batches": "4 8 16",
                "threads": "4",
                "warmup_docs": "32",
            })
        );
    }

    #[test]
    fn single_batch_has_no_separator() {
        let request = PipelineRequest {
            batches: vec![16],
            ..PipelineRequest::default()
        };

        let body = serde_json::to_value(request).unwrap();

        assert_eq!(body["batches"], "16");
    }
}
