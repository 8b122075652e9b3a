//! aggregate.rs — MetricAggregator: reduces per-source signal triples into
//! one arithmetic mean per channel. An empty input yields absent deltas,
//! which is distinct from a true zero delta.

use crate::types::{MetricDeltas, SignalTriple};

pub fn aggregate(signals: &[SignalTriple]) -> MetricDeltas {
    if signals.is_empty() {
        return MetricDeltas::default();
    }
    let n = signals.len() as f64;
    MetricDeltas {
        inflation_pct: Some(signals.iter().map(|s| s.inflation).sum::<f64>() / n),
        exchange_rate_pct: Some(signals.iter().map(|s| s.exchange).sum::<f64>() / n),
        interest_rate_pct: Some(signals.iter().map(|s| s.interest).sum::<f64>() / n),
    }
}
