//! types.rs — Request/response shapes for the four pipeline operations,
//! plus the core entities they carry (signals, deltas, snapshots, findings).
//!
//! Everything here is created and consumed within a single pipeline
//! invocation; nothing is shared or persisted across calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional pressure estimates emitted for one classified source,
/// expressed as percentage deltas on the three tracked indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalTriple {
    pub inflation: f64,
    pub exchange: f64,
    pub interest: f64,
}

impl SignalTriple {
    pub fn new(inflation: f64, exchange: f64, interest: f64) -> Self {
        Self {
            inflation,
            exchange,
            interest,
        }
    }
}

/// Per-channel aggregated deltas. `None` means no source contributed a
/// signal for that channel — distinct from a true zero delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricDeltas {
    pub inflation_pct: Option<f64>,
    pub exchange_rate_pct: Option<f64>,
    pub interest_rate_pct: Option<f64>,
}

/// Fully resolved economic indicator values at one point in the pipeline's
/// timeline. After an update these satisfy `0 <= inflation <= 20`,
/// `exchange_rate >= 0.1` and `0 <= interest_rate <= 15`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub inflation: f64,
    pub exchange_rate: f64,
    pub interest_rate: f64,
}

impl MetricSnapshot {
    pub fn new(inflation: f64, exchange_rate: f64, interest_rate: f64) -> Self {
        Self {
            inflation,
            exchange_rate,
            interest_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Risk,
    Opportunity,
}

/// A classified risk or opportunity statement tied to a firm.
/// Immutable once created; insertion order is significant downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub text: String,
    pub firm: String,
}

impl Finding {
    pub fn risk(firm: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: FindingCategory::Risk,
            text: text.into(),
            firm: firm.into(),
        }
    }

    pub fn opportunity(firm: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: FindingCategory::Opportunity,
            text: text.into(),
            firm: firm.into(),
        }
    }
}

// ---- Operation payloads ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRequest {
    pub sources: Vec<String>,
}

/// Output of `analyze_news`: one summary per source, in input order, plus
/// the aggregated percentage deltas (`null` on a channel with no signals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    pub summaries: Vec<String>,
    pub inflation_pct: Option<f64>,
    pub exchange_rate_pct: Option<f64>,
    pub interest_rate_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsUpdateRequest {
    pub inflation_pct: f64,
    pub exchange_rate_pct: f64,
    pub interest_rate_pct: f64,
    pub yesterday_inflation: f64,
    pub yesterday_exchange_rate: f64,
    pub yesterday_interest_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingsRequest {
    pub summaries: Vec<String>,
    pub metrics: MetricSnapshot,
    pub firm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingsReport {
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
}

/// Output of `generate_recommendations`: the qualitative synthesis plus an
/// always non-empty, ordered list of actionable recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub synthesis: String,
    pub recommendations: Vec<String>,
}

/// Input for the orchestrated `/agent/run` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub sources: Vec<String>,
    pub yesterday: MetricSnapshot,
    pub firm: String,
}

/// Complete pipeline result, returned synchronously.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub firm: String,
    pub summaries: Vec<String>,
    pub deltas: MetricDeltas,
    pub metrics: MetricSnapshot,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub synthesis: String,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_deltas_serialize_as_null() {
        let report = NewsReport {
            summaries: vec![],
            inflation_pct: None,
            exchange_rate_pct: None,
            interest_rate_pct: None,
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["inflation_pct"], json!(null));
        assert_eq!(v["exchange_rate_pct"], json!(null));
        assert_eq!(v["interest_rate_pct"], json!(null));
    }

    #[test]
    fn finding_category_uses_snake_case() {
        let f = Finding::opportunity("Acme", "Pricing power");
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["category"], json!("opportunity"));
        assert_eq!(v["firm"], json!("Acme"));
    }
}
