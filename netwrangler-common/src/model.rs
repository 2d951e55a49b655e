use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Metric name carrying the overall network health score.
pub const HEALTH_SCORE: &str = "health_score";

/// Latest body of the performance metrics endpoint.
///
/// Values are kept as raw JSON: a non-numeric field never fails a cycle, it
/// just reads back as `None` from the numeric accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSnapshot(BTreeMap<String, Value>);

impl MetricsSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric to this snapshot.
    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Numeric value of a metric, if present and numeric.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    /// The `health_score` metric.
    pub fn health_score(&self) -> Option<f64> {
        self.get(HEALTH_SCORE)
    }

    /// Iterate over numeric metrics in name order.
    pub fn numeric(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0
            .iter()
            .filter_map(|(name, value)| value.as_f64().map(|v| (name.as_str(), v)))
    }
}

/// An anomaly reported by the analytics endpoint. Opaque to the client.
pub type Anomaly = Value;

/// Everything the operations center fetches in one cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationsSnapshot {
    /// Body of `/api/v1/performance/metrics`.
    pub metrics: MetricsSnapshot,
    /// Body of `/api/v1/slicing/performance`, stored as-is.
    pub slice_performance: Value,
    /// Body of `/api/v1/analytics/anomalies`.
    pub anomalies: Vec<Anomaly>,
}

/// Slice identifier. The backend uses strings, older fixtures use numbers.
///
/// Anything else the server sends is kept as raw JSON so one odd record
/// never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl Default for SliceId {
    fn default() -> Self {
        SliceId::Other(Value::Null)
    }
}

impl Hash for SliceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            SliceId::Number(n) => n.hash(state),
            SliceId::Text(s) => s.hash(state),
            SliceId::Other(v) => v.to_string().hash(state),
        }
    }
}

impl std::fmt::Display for SliceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceId::Number(n) => write!(f, "{}", n),
            SliceId::Text(s) => write!(f, "{}", s),
            SliceId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SliceId {
    fn from(v: i64) -> Self {
        SliceId::Number(v)
    }
}

impl From<&str> for SliceId {
    fn from(v: &str) -> Self {
        SliceId::Text(v.to_string())
    }
}

/// A measured value shown verbatim, whether the server sent a number or text.
///
/// Objects, arrays and booleans are kept as raw JSON and displayed as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Text(s) => write!(f, "{}", s),
            Reading::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for Reading {
    fn from(v: u64) -> Self {
        Reading::Number(v.into())
    }
}

impl From<f64> for Reading {
    /// Whole values become integers, so `850.0` displays as `850`.
    fn from(v: f64) -> Self {
        if v.fract() == 0.0 && v.abs() < MAX_EXACT_F64_INT {
            return Reading::Number((v as i64).into());
        }
        serde_json::Number::from_f64(v)
            .map(Reading::Number)
            .unwrap_or_else(|| Reading::Text(v.to_string()))
    }
}

/// One network slice as listed by `/api/v1/slicing/slices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceRecord {
    /// Slice identifier, used as the card key.
    #[serde(default)]
    pub id: SliceId,

    /// Slice category (e.g., "eMBB", "URLLC", "mMTC").
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,

    /// Throughput in Mbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Reading>,

    /// Latency in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<Reading>,

    /// Lifecycle status (e.g., "active").
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}

/// Render a JSON value as display text: strings as-is, anything else as JSON.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

impl SliceRecord {
    /// Create a slice record with no readings.
    pub fn new(id: impl Into<SliceId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            throughput: None,
            latency: None,
            status: None,
        }
    }

    /// Set throughput and latency.
    pub fn with_readings(mut self, throughput: impl Into<Reading>, latency: impl Into<Reading>) -> Self {
        self.throughput = Some(throughput.into());
        self.latency = Some(latency.into());
        self
    }

    /// Set the lifecycle status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Response body of `/api/v1/slicing/slices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceList {
    pub slices: Vec<SliceRecord>,
}
