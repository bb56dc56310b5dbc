use bench_framework_env as bf_env;

pub mod constants;
pub mod timeouts;

fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_owned())
}

/// Resolve the metrics pipeline endpoint from `LEDGER_BENCH_PIPELINE_URL`,
/// falling back to the local default.
#[must_use]
pub fn pipeline_url() -> String {
    or_default(bf_env::pipeline_url(), constants::DEFAULT_PIPELINE_URL)
}

/// Resolve the identity used to sign submitted transactions.
#[must_use]
pub fn invoker_identity() -> String {
    or_default(
        bf_env::invoker_identity(),
        constants::DEFAULT_INVOKER_IDENTITY,
    )
}

#[cfg(test)]
mod tests {
    use bench_framework_env::non_empty;

    use super::*;

    #[test]
    fn url_override_wins_over_default() {
        let url = or_default(
            non_empty(Some("http://10.0.0.7:9000/execute_full_pipeline".into())),
            constants::DEFAULT_PIPELINE_URL,
        );
        assert_eq!(url, "http://10.0.0.7:9000/execute_full_pipeline");
    }

    #[test]
    fn empty_invoker_falls_back_to_default() {
        assert_eq!(
            or_default(non_empty(Some(String::new())), constants::DEFAULT_INVOKER_IDENTITY),
            "User1"
        );
        assert_eq!(
            or_default(non_empty(Some("Admin".into())), constants::DEFAULT_INVOKER_IDENTITY),
            "Admin"
        );
        assert_eq!(
            or_default(None, constants::DEFAULT_PIPELINE_URL),
            "http://127.0.0.1:8000/execute_full_pipeline"
        );
    }
}
