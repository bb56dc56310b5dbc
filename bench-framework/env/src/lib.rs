use std::env;

/// Seconds from a raw variable value; anything but a plain integer is `None`.
#[must_use]
pub fn parse_secs(raw: Option<String>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
}

/// Drops set-but-empty values so they fall back like unset ones.
#[must_use]
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.trim().is_empty())
}

#[must_use]
pub fn pipeline_url() -> Option<String> {
    non_empty(env::var("LEDGER_BENCH_PIPELINE_URL").ok())
}

#[must_use]
pub fn pipeline_timeout_secs() -> Option<u64> {
    parse_secs(env::var("LEDGER_BENCH_PIPELINE_TIMEOUT_SECS").ok())
}

#[must_use]
pub fn pipeline_connect_timeout_secs() -> Option<u64> {
    parse_secs(env::var("LEDGER_BENCH_PIPELINE_CONNECT_TIMEOUT_SECS").ok())
}

#[must_use]
pub fn invoker_identity() -> Option<String> {
    non_empty(env::var("LEDGER_BENCH_INVOKER").ok())
}
