//! agent.rs — the four-operation analysis contract and its single concrete
//! implementation. Every operation is a pure function of its inputs; nothing
//! is read from or written to shared state, so concurrent invocations never
//! interfere.

use chrono::Utc;
use url::Url;

use crate::heuristics::{Heuristics, HEURISTICS};
use crate::types::{
    Advice, FindingsReport, MetricDeltas, MetricSnapshot, MetricsUpdateRequest, NewsReport,
    PipelineReport,
};
use crate::{aggregate, detect, recommend, signal, update};

/// Capability set of the analysis pipeline. One concrete variant exists
/// today; future variants plug in behind this trait rather than through
/// inheritance-style layering.
pub trait NewsAgent {
    /// Classify sources, emit summaries and aggregated percentage deltas.
    fn analyze_news(&self, sources: &[Url]) -> NewsReport;

    /// Apply percentage deltas to yesterday's values; clamp and round.
    fn compute_metric_updates(&self, req: &MetricsUpdateRequest) -> MetricSnapshot;

    /// Threshold rules plus keyword scans, tagged with the firm name.
    fn detect_risks_opportunities(
        &self,
        summaries: &[String],
        metrics: &MetricSnapshot,
        firm: &str,
    ) -> FindingsReport;

    /// Risk-ratio synthesis plus trigger-table recommendations.
    fn generate_recommendations(&self, risks: &[String], opportunities: &[String]) -> Advice;
}

/// Rule-based agent over the configured heuristics tables.
#[derive(Debug, Clone)]
pub struct FinancialNewsAgent {
    heuristics: Heuristics,
}

impl FinancialNewsAgent {
    pub fn new() -> Self {
        Self {
            heuristics: HEURISTICS.clone(),
        }
    }

    pub fn with_heuristics(heuristics: Heuristics) -> Self {
        Self { heuristics }
    }

    /// Run all four stages back to back. Absent deltas resolve to 0.0 at
    /// this level — the aggregator itself keeps absence distinct from zero,
    /// and other callers may choose a different policy.
    pub fn run(&self, sources: &[Url], yesterday: MetricSnapshot, firm: &str) -> PipelineReport {
        let news = self.analyze_news(sources);
        let deltas = MetricDeltas {
            inflation_pct: news.inflation_pct,
            exchange_rate_pct: news.exchange_rate_pct,
            interest_rate_pct: news.interest_rate_pct,
        };

        let metrics = self.compute_metric_updates(&MetricsUpdateRequest {
            inflation_pct: deltas.inflation_pct.unwrap_or(0.0),
            exchange_rate_pct: deltas.exchange_rate_pct.unwrap_or(0.0),
            interest_rate_pct: deltas.interest_rate_pct.unwrap_or(0.0),
            yesterday_inflation: yesterday.inflation,
            yesterday_exchange_rate: yesterday.exchange_rate,
            yesterday_interest_rate: yesterday.interest_rate,
        });

        let findings = self.detect_risks_opportunities(&news.summaries, &metrics, firm);
        let advice = self.generate_recommendations(&findings.risks, &findings.opportunities);

        PipelineReport {
            firm: firm.to_string(),
            summaries: news.summaries,
            deltas,
            metrics,
            risks: findings.risks,
            opportunities: findings.opportunities,
            synthesis: advice.synthesis,
            recommendations: advice.recommendations,
            generated_at: Utc::now(),
        }
    }
}

impl Default for FinancialNewsAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsAgent for FinancialNewsAgent {
    fn analyze_news(&self, sources: &[Url]) -> NewsReport {
        let (summaries, signals) = signal::extract(&self.heuristics, sources);
        let deltas = aggregate::aggregate(&signals);
        NewsReport {
            summaries,
            inflation_pct: deltas.inflation_pct,
            exchange_rate_pct: deltas.exchange_rate_pct,
            interest_rate_pct: deltas.interest_rate_pct,
        }
    }

    fn compute_metric_updates(&self, req: &MetricsUpdateRequest) -> MetricSnapshot {
        update::update(req)
    }

    fn detect_risks_opportunities(
        &self,
        summaries: &[String],
        metrics: &MetricSnapshot,
        firm: &str,
    ) -> FindingsReport {
        let (risks, opportunities) =
            detect::detect(&self.heuristics.sentiment, metrics, summaries, firm);
        FindingsReport {
            risks: risks.into_iter().map(|f| f.text).collect(),
            opportunities: opportunities.into_iter().map(|f| f.text).collect(),
        }
    }

    fn generate_recommendations(&self, risks: &[String], opportunities: &[String]) -> Advice {
        recommend::synthesize(risks, opportunities)
    }
}
