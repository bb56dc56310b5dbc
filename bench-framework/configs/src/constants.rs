/// Chaincode every workload targets.
pub const CONTRACT_ID: &str = "basic";

/// Chaincode function that writes a new asset.
pub const CREATE_ASSET_FUNCTION: &str = "CreateAsset";

/// Identity used when `LEDGER_BENCH_INVOKER` is unset.
pub const DEFAULT_INVOKER_IDENTITY: &str = "User1";

/// Local metrics pipeline endpoint.
pub const DEFAULT_PIPELINE_URL: &str = "http://127.0.0.1:8000/execute_full_pipeline";

/// Model reported when the pipeline response carries none.
pub const DEFAULT_MODEL_ID: &str = "BGE-M3";

/// Documents generated per corpus size in the pipeline matrix.
pub const DEFAULT_N_PER_SIZE: u32 = 24;

/// Batch sizes swept by the pipeline matrix.
pub const DEFAULT_BATCHES: [u32; 3] = [4, 8, 16];

/// Embedding threads used by the pipeline.
pub const DEFAULT_THREADS: u32 = 4;

/// Documents embedded before measurements start.
pub const DEFAULT_WARMUP_DOCS: u32 = 32;
