//! detect.rs — RiskOpportunityDetector: threshold rules over the metric
//! snapshot plus keyword scans over the summaries, producing ordered,
//! firm-tagged findings.
//!
//! Metric rules are independent of each other; only the high/low branches
//! of the same metric are exclusive. Repeated keyword hits across summaries
//! produce repeated generic findings on purpose (no deduplication).

use crate::heuristics::SentimentKeywords;
use crate::types::{Finding, MetricSnapshot};

const INFLATION_HIGH: f64 = 4.0;
const INFLATION_LOW: f64 = 1.0;
const INTEREST_HIGH: f64 = 6.0;
const INTEREST_LOW: f64 = 2.0;
const EXCHANGE_HIGH: f64 = 1.2;
const EXCHANGE_LOW: f64 = 0.9;

pub fn detect(
    keywords: &SentimentKeywords,
    metrics: &MetricSnapshot,
    summaries: &[String],
    firm: &str,
) -> (Vec<Finding>, Vec<Finding>) {
    let mut risks = Vec::new();
    let mut opportunities = Vec::new();

    if metrics.inflation > INFLATION_HIGH {
        risks.push(Finding::risk(
            firm,
            format!(
                "High inflation ({}%) may erode {}'s profit margins",
                metrics.inflation, firm
            ),
        ));
        opportunities.push(Finding::opportunity(
            firm,
            format!("Pricing power opportunities for {firm} in inflationary environment"),
        ));
    } else if metrics.inflation < INFLATION_LOW {
        risks.push(Finding::risk(
            firm,
            format!(
                "Deflationary pressure ({}%) may signal economic weakness",
                metrics.inflation
            ),
        ));
    }

    if metrics.interest_rate > INTEREST_HIGH {
        risks.push(Finding::risk(
            firm,
            format!(
                "High interest rates ({}%) increase {}'s borrowing costs",
                metrics.interest_rate, firm
            ),
        ));
        opportunities.push(Finding::opportunity(
            firm,
            format!("Higher yields on {firm}'s cash investments"),
        ));
    } else if metrics.interest_rate < INTEREST_LOW {
        opportunities.push(Finding::opportunity(
            firm,
            format!(
                "Low borrowing costs ({}%) enable expansion financing for {}",
                metrics.interest_rate, firm
            ),
        ));
    }

    if metrics.exchange_rate > EXCHANGE_HIGH {
        risks.push(Finding::risk(
            firm,
            format!("Strong currency may hurt {firm}'s export competitiveness"),
        ));
        opportunities.push(Finding::opportunity(
            firm,
            format!("Favorable conditions for {firm}'s international acquisitions"),
        ));
    } else if metrics.exchange_rate < EXCHANGE_LOW {
        // the only branch that emits on both lists from the low side
        opportunities.push(Finding::opportunity(
            firm,
            format!("Weak currency boosts {firm}'s export revenues"),
        ));
        risks.push(Finding::risk(
            firm,
            format!("Higher import costs for {firm}'s international operations"),
        ));
    }

    for summary in summaries {
        let lower = summary.to_lowercase();
        if keywords.negative.iter().any(|k| lower.contains(k.as_str())) {
            risks.push(Finding::risk(
                firm,
                format!("Market uncertainty may impact {firm}'s business confidence"),
            ));
        }
        if keywords.positive.iter().any(|k| lower.contains(k.as_str())) {
            opportunities.push(Finding::opportunity(
                firm,
                format!("Positive market sentiment creates growth opportunities for {firm}"),
            ));
        }
    }

    (risks, opportunities)
}
