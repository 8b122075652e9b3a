//! update.rs — MetricUpdater: applies percentage deltas to yesterday's
//! metric values, clamps the results into their allowed ranges, and rounds.
//!
//! Bounds after any update: `inflation in [0, 20]`, `exchange_rate >= 0.1`
//! (no upper bound), `interest_rate in [0, 15]`. Out-of-range values are
//! clamped, never rejected; this stage cannot fail on numeric input.

use crate::types::{MetricSnapshot, MetricsUpdateRequest};

const INFLATION_MAX: f64 = 20.0;
const EXCHANGE_RATE_MIN: f64 = 0.1;
const INTEREST_RATE_MAX: f64 = 15.0;

pub fn update(req: &MetricsUpdateRequest) -> MetricSnapshot {
    let inflation = apply_pct(req.yesterday_inflation, req.inflation_pct).clamp(0.0, INFLATION_MAX);
    let exchange_rate =
        apply_pct(req.yesterday_exchange_rate, req.exchange_rate_pct).max(EXCHANGE_RATE_MIN);
    let interest_rate =
        apply_pct(req.yesterday_interest_rate, req.interest_rate_pct).clamp(0.0, INTEREST_RATE_MAX);

    MetricSnapshot {
        inflation: round_dp(inflation, 2),
        exchange_rate: round_dp(exchange_rate, 4),
        interest_rate: round_dp(interest_rate, 2),
    }
}

fn apply_pct(previous: f64, delta_pct: f64) -> f64 {
    previous * (1.0 + delta_pct / 100.0)
}

/// Round half away from zero to `dp` decimal places.
fn round_dp(x: f64, dp: i32) -> f64 {
    let f = 10f64.powi(dp);
    (x * f).round() / f
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(
        deltas: (f64, f64, f64),
        yesterday: (f64, f64, f64),
    ) -> MetricsUpdateRequest {
        MetricsUpdateRequest {
            inflation_pct: deltas.0,
            exchange_rate_pct: deltas.1,
            interest_rate_pct: deltas.2,
            yesterday_inflation: yesterday.0,
            yesterday_exchange_rate: yesterday.1,
            yesterday_interest_rate: yesterday.2,
        }
    }

    #[test]
    fn applies_deltas_and_rounds_per_channel() {
        // exchange ties at 1.14885 and must round away from zero
        let snap = update(&req((0.2, -0.1, 0.15), (3.0, 1.15, 4.5)));
        assert_eq!(snap.inflation, 3.01);
        assert_eq!(snap.exchange_rate, 1.1489);
        assert_eq!(snap.interest_rate, 4.51);
    }

    #[test]
    fn zero_deltas_keep_yesterday_values() {
        let snap = update(&req((0.0, 0.0, 0.0), (2.5, 1.08, 3.75)));
        assert_eq!(snap.inflation, 2.5);
        assert_eq!(snap.exchange_rate, 1.08);
        assert_eq!(snap.interest_rate, 3.75);
    }

    #[test]
    fn inflation_and_interest_clamp_at_their_caps() {
        let snap = update(&req((50.0, 0.0, 50.0), (19.0, 1.0, 14.0)));
        assert_eq!(snap.inflation, 20.0);
        assert_eq!(snap.interest_rate, 15.0);
    }

    #[test]
    fn negative_results_clamp_at_zero() {
        let snap = update(&req((-150.0, 0.0, -150.0), (3.0, 1.0, 4.0)));
        assert_eq!(snap.inflation, 0.0);
        assert_eq!(snap.interest_rate, 0.0);
    }

    #[test]
    fn exchange_rate_has_a_floor_but_no_cap() {
        let low = update(&req((0.0, -99.9, 0.0), (3.0, 1.0, 4.0)));
        assert_eq!(low.exchange_rate, 0.1);

        let high = update(&req((0.0, 500.0, 0.0), (3.0, 10.0, 4.0)));
        assert_eq!(high.exchange_rate, 60.0);
    }

    #[test]
    fn out_of_range_previous_values_are_clamped_not_rejected() {
        let snap = update(&req((0.0, 0.0, 0.0), (25.0, 0.05, 18.0)));
        assert_eq!(snap.inflation, 20.0);
        assert_eq!(snap.exchange_rate, 0.1);
        assert_eq!(snap.interest_rate, 15.0);
    }

    #[test]
    fn bounds_hold_across_a_grid_of_inputs() {
        for &delta in &[-200.0, -50.0, -0.1, 0.0, 0.1, 50.0, 200.0] {
            for &prev in &[0.0, 0.5, 1.0, 5.0, 19.99, 100.0] {
                let snap = update(&req((delta, delta, delta), (prev, prev.max(0.01), prev)));
                assert!((0.0..=20.0).contains(&snap.inflation), "inflation {snap:?}");
                assert!(snap.exchange_rate >= 0.1, "exchange {snap:?}");
                assert!(
                    (0.0..=15.0).contains(&snap.interest_rate),
                    "interest {snap:?}"
                );
            }
        }
    }
}
