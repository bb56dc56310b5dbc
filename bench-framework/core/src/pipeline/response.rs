use bench_framework_config::constants::DEFAULT_MODEL_ID;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

const ERROR_STATUS: &str = "error";
const PARSE_FAILURE_MESSAGE: &str = "failed to parse metrics pipeline response";

/// Envelope returned by the pipeline.
///
/// Every field is optional and a field of the wrong type reads as absent, so
/// decoding an object never fails.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PipelineResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub log: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub metrics: Option<PipelineMetrics>,
}

/// Metrics of the last benchmark run, with explicit per-field defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PipelineMetrics {
    #[serde(default, deserialize_with = "lenient")]
    pub model_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub docs_per_sec: Option<MetricValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub rss_peak_mb: Option<MetricValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub p95_ms: Option<MetricValue>,
}

/// A numeric metric as reported. Quoted numbers are kept as their text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Argument form of the value, `None` for empty text.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Number(value) => Some(format_metric(*value)),
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl PipelineResponse {
    /// Decodes a fully received body. A body that is not JSON becomes an
    /// error sentinel instead of a failure.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            Ok(other) => {
                warn!(kind = json_kind(&other), "pipeline response is not a JSON object");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, body_len = body.len(), "pipeline response is not valid JSON");
                Self::parse_failure()
            }
        }
    }

    #[must_use]
    pub fn parse_failure() -> Self {
        Self {
            status: Some(ERROR_STATUS.to_owned()),
            message: Some(PARSE_FAILURE_MESSAGE.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(ERROR_STATUS)
    }

    /// Metrics carried by the response, or an empty record.
    #[must_use]
    pub fn into_metrics(self) -> PipelineMetrics {
        self.metrics.unwrap_or_default()
    }
}

impl PipelineMetrics {
    #[must_use]
    pub fn model_id_or_default(&self) -> &str {
        self.model_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_MODEL_ID)
    }

    #[must_use]
    pub fn docs_per_sec_or_default(&self) -> String {
        render_or_zero(self.docs_per_sec.as_ref())
    }

    #[must_use]
    pub fn rss_peak_mb_or_default(&self) -> String {
        render_or_zero(self.rss_peak_mb.as_ref())
    }

    #[must_use]
    pub fn p95_ms_or_default(&self) -> String {
        render_or_zero(self.p95_ms.as_ref())
    }
}

fn render_or_zero(value: Option<&MetricValue>) -> String {
    value
        .and_then(MetricValue::render)
        .unwrap_or_else(|| format_metric(0.0))
}

/// Renders a metric as a chaincode argument: shortest decimal form, no
/// trailing `.0`, and `-0` folded into `0`.
///
/// Unlike JavaScript's `Number#toString`, this never switches to exponent
/// notation, so `1e21` renders as `1000000000000000000000` and `1e-7` as
/// `0.0000001`. The pipeline rounds to a few decimals, which keeps real
/// values far from either threshold.
#[must_use]
pub fn format_metric(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_metrics() {
        let body = br#"{"status":"success","log":"ok","metrics":{"model_id":"X","docs_per_sec":5,"rss_peak_mb":100,"p95_ms":12.5,"p50_ms":3}}"#;

        let response = PipelineResponse::from_body(body);

        assert!(!response.is_error());
        assert_eq!(response.log.as_deref(), Some("ok"));
        let metrics = response.into_metrics();
        assert_eq!(metrics.model_id_or_default(), "X");
        assert_eq!(metrics.docs_per_sec, Some(MetricValue::Number(5.0)));
        assert_eq!(metrics.docs_per_sec_or_default(), "5");
        assert_eq!(metrics.rss_peak_mb_or_default(), "100");
        assert_eq!(metrics.p95_ms_or_default(), "12.5");
    }

    #[test]
    fn non_json_body_becomes_error_sentinel() {
        let response = PipelineResponse::from_body(b"<html>502 Bad Gateway</html>");

        assert!(response.is_error());
        assert_eq!(response.message.as_deref(), Some(PARSE_FAILURE_MESSAGE));
        assert_eq!(response.into_metrics(), PipelineMetrics::default());
    }

    #[test]
    fn empty_body_is_not_json() {
        assert!(PipelineResponse::from_body(b"").is_error());
    }

    #[test]
    fn non_object_json_reads_as_empty_response() {
        let response = PipelineResponse::from_body(b"[1, 2, 3]");

        assert!(!response.is_error());
        assert_eq!(response, PipelineResponse::default());
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let body = br#"{"status":"success","metrics":{"model_id":7,"docs_per_sec":true,"rss_peak_mb":null,"p95_ms":[4]}}"#;

        let metrics = PipelineResponse::from_body(body).into_metrics();

        assert_eq!(metrics.model_id, None);
        assert_eq!(metrics.docs_per_sec, None);
        assert_eq!(metrics.rss_peak_mb, None);
        assert_eq!(metrics.p95_ms, None);
        assert_eq!(metrics.docs_per_sec_or_default(), "0");
        assert_eq!(metrics.p95_ms_or_default(), "0");
    }

    #[test]
    fn quoted_metrics_are_forwarded_verbatim() {
        let body = br#"{"metrics":{"model_id":"X","docs_per_sec":"41.2","rss_peak_mb":"100","p95_ms":"12"}}"#;

        let metrics = PipelineResponse::from_body(body).into_metrics();

        assert_eq!(metrics.docs_per_sec, Some(MetricValue::Text("41.2".into())));
        assert_eq!(metrics.model_id_or_default(), "X");
        assert_eq!(metrics.docs_per_sec_or_default(), "41.2");
        assert_eq!(metrics.rss_peak_mb_or_default(), "100");
        assert_eq!(metrics.p95_ms_or_default(), "12");
    }

    #[test]
    fn empty_quoted_metric_defaults_to_zero() {
        let body = br#"{"metrics":{"docs_per_sec":"","p95_ms":0}}"#;

        let metrics = PipelineResponse::from_body(body).into_metrics();

        assert_eq!(metrics.docs_per_sec_or_default(), "0");
        assert_eq!(metrics.p95_ms_or_default(), "0");
    }

    #[test]
    fn metrics_of_wrong_shape_read_as_absent() {
        let response = PipelineResponse::from_body(br#"{"status":"success","metrics":"n/a"}"#);

        assert_eq!(response.metrics, None);
    }

    #[test]
    fn service_error_is_reported() {
        let response =
            PipelineResponse::from_body(br#"{"status":"error","message":"run_all.sh exited 1"}"#);

        assert!(response.is_error());
        assert_eq!(response.message.as_deref(), Some("run_all.sh exited 1"));
        assert_eq!(response.metrics, None);
    }

    #[test]
    fn defaults_fill_missing_metrics() {
        let metrics = PipelineMetrics {
            model_id: Some(String::new()),
            ..PipelineMetrics::default()
        };

        assert_eq!(metrics.model_id_or_default(), DEFAULT_MODEL_ID);
        assert_eq!(metrics.docs_per_sec_or_default(), "0");
        assert_eq!(metrics.rss_peak_mb_or_default(), "0");
        assert_eq!(metrics.p95_ms_or_default(), "0");
    }

    #[test]
    fn metric_formatting() {
        assert_eq!(format_metric(5.0), "5");
        assert_eq!(format_metric(100.0), "100");
        assert_eq!(format_metric(12.345678), "12.345678");
        assert_eq!(format_metric(-0.0), "0");
    }
}
