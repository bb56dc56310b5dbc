use std::time::Duration;

use bench_framework_env as bf_env;

/// The pipeline runs the whole benchmark matrix before answering, which can
/// take hours.
pub const PIPELINE_REQUEST_TIMEOUT_SECS: u64 = 10 * 60 * 60;
pub const PIPELINE_CONNECT_TIMEOUT_SECS: u64 = 30;

fn secs_or_default(value: Option<u64>, default: u64) -> Duration {
    Duration::from_secs(value.unwrap_or(default))
}

/// Upper bound on a whole pipeline call, from connect to the last body byte.
pub fn pipeline_request_timeout() -> Duration {
    secs_or_default(
        bf_env::pipeline_timeout_secs(),
        PIPELINE_REQUEST_TIMEOUT_SECS,
    )
}

/// Upper bound on establishing the TCP connection to the pipeline.
pub fn pipeline_connect_timeout() -> Duration {
    secs_or_default(
        bf_env::pipeline_connect_timeout_secs(),
        PIPELINE_CONNECT_TIMEOUT_SECS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(secs_or_default(None, 30), Duration::from_secs(30));
        assert_eq!(secs_or_default(Some(5), 30), Duration::from_secs(5));
    }

    #[test]
    fn unparseable_override_uses_default() {
        let timeout = secs_or_default(
            bf_env::parse_secs(Some("ten hours".into())),
            PIPELINE_REQUEST_TIMEOUT_SECS,
        );
        assert_eq!(timeout, Duration::from_secs(36_000));

        let connect = secs_or_default(
            bf_env::parse_secs(Some("5".into())),
            PIPELINE_CONNECT_TIMEOUT_SECS,
        );
        assert_eq!(connect, Duration::from_secs(5));
    }

    #[test]
    fn request_timeout_outlasts_connect_timeout() {
        assert!(PIPELINE_REQUEST_TIMEOUT_SECS > PIPELINE_CONNECT_TIMEOUT_SECS);
        assert_eq!(PIPELINE_REQUEST_TIMEOUT_SECS, 36_000);
    }
}
