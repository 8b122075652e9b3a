//! recommend.rs — RecommendationSynthesizer: picks the qualitative synthesis
//! from the risk-to-opportunity ratio and assembles recommendations from a
//! fixed, ordered trigger table. Firm-agnostic: only counts and substring
//! content matter here.

use crate::types::Advice;

const SYNTHESIS_DEFENSIVE: &str = "Current market conditions present significant challenges \
with elevated risks across multiple dimensions. A defensive strategy focusing on risk \
mitigation and capital preservation is recommended.";

const SYNTHESIS_AGGRESSIVE: &str = "Market environment is favorable with abundant \
opportunities outweighing risks. An aggressive growth strategy leveraging current \
conditions is advisable.";

const SYNTHESIS_BALANCED: &str = "Balanced risk-opportunity landscape requires a measured \
approach combining selective risk mitigation with strategic opportunity capture.";

const DEFAULT_RECOMMENDATIONS: [&str; 3] = [
    "Monitor economic indicators closely for emerging trends",
    "Maintain operational flexibility to adapt to changing conditions",
    "Strengthen stakeholder communication regarding market outlook",
];

/// Which findings list a trigger scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Risks,
    Opportunities,
}

/// One recommendation trigger: if any needle occurs (case-insensitive) in
/// the scanned list, both recommendations are appended. Triggers are
/// additive and checked in table order.
struct Trigger {
    needles: &'static [&'static str],
    scan: Scan,
    recommendations: [&'static str; 2],
}

const TRIGGERS: &[Trigger] = &[
    Trigger {
        needles: &["inflation"],
        scan: Scan::Risks,
        recommendations: [
            "Implement dynamic pricing strategies to maintain margins amid inflationary pressures",
            "Consider inflation-hedged investments and contracts",
        ],
    },
    Trigger {
        needles: &["interest rate"],
        scan: Scan::Risks,
        recommendations: [
            "Prioritize debt refinancing before rates increase further",
            "Accelerate capital-intensive projects while financing costs remain manageable",
        ],
    },
    Trigger {
        needles: &["currency", "exchange"],
        scan: Scan::Risks,
        recommendations: [
            "Implement currency hedging strategies for international operations",
            "Diversify revenue streams across multiple currencies",
        ],
    },
    Trigger {
        needles: &["growth", "expansion"],
        scan: Scan::Opportunities,
        recommendations: [
            "Accelerate market expansion plans to capitalize on favorable conditions",
            "Increase marketing and sales investments to capture market share",
        ],
    },
    Trigger {
        needles: &["acquisition", "investment"],
        scan: Scan::Opportunities,
        recommendations: [
            "Evaluate strategic acquisition opportunities while valuations are attractive",
            "Strengthen balance sheet to take advantage of investment opportunities",
        ],
    },
];

/// Share of risks among all findings; 0 when there are no findings.
pub fn risk_ratio(risks: &[String], opportunities: &[String]) -> f64 {
    let total = risks.len() + opportunities.len();
    if total == 0 {
        return 0.0;
    }
    risks.len() as f64 / total as f64
}

pub fn synthesize(risks: &[String], opportunities: &[String]) -> Advice {
    let ratio = risk_ratio(risks, opportunities);

    // strict inequalities: 0.3 and 0.6 both land in the balanced branch
    let synthesis = if ratio > 0.6 {
        SYNTHESIS_DEFENSIVE
    } else if ratio < 0.3 {
        SYNTHESIS_AGGRESSIVE
    } else {
        SYNTHESIS_BALANCED
    };

    let mut recommendations = Vec::new();
    for trigger in TRIGGERS {
        let pool = match trigger.scan {
            Scan::Risks => risks,
            Scan::Opportunities => opportunities,
        };
        let hit = pool.iter().any(|text| {
            let lower = text.to_lowercase();
            trigger.needles.iter().any(|n| lower.contains(n))
        });
        if hit {
            recommendations.extend(trigger.recommendations.iter().map(|s| s.to_string()));
        }
    }

    if recommendations.is_empty() {
        recommendations = DEFAULT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();
    }

    Advice {
        synthesis: synthesis.to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_findings_yields_zero_ratio_and_aggressive_synthesis() {
        assert_eq!(risk_ratio(&[], &[]), 0.0);
        let advice = synthesize(&[], &[]);
        assert!(advice.synthesis.contains("aggressive growth strategy"));
        assert_eq!(advice.recommendations.len(), 3);
        assert!(advice.recommendations[0].contains("Monitor economic indicators"));
        assert!(advice.recommendations[1].contains("operational flexibility"));
        assert!(advice.recommendations[2].contains("stakeholder communication"));
    }

    #[test]
    fn ratio_above_point_six_is_defensive() {
        // 3 risks, 1 opportunity -> 0.75
        let advice = synthesize(
            &texts(&["risk a", "risk b", "risk c"]),
            &texts(&["opp a"]),
        );
        assert!(advice.synthesis.contains("defensive strategy"));
    }

    #[test]
    fn boundary_ratios_fall_in_the_balanced_branch() {
        // exactly 0.6: 3 risks / 5 findings
        let at_upper = synthesize(
            &texts(&["r1", "r2", "r3"]),
            &texts(&["o1", "o2"]),
        );
        assert!(at_upper.synthesis.contains("measured approach"));

        // exactly 0.3: 3 risks / 10 findings
        let at_lower = synthesize(
            &texts(&["r1", "r2", "r3"]),
            &texts(&["o1", "o2", "o3", "o4", "o5", "o6", "o7"]),
        );
        assert!(at_lower.synthesis.contains("measured approach"));
    }

    #[test]
    fn interest_rate_risk_adds_the_refinancing_pair() {
        let advice = synthesize(
            &texts(&["High interest rates (7%) increase Acme's borrowing costs"]),
            &[],
        );
        assert!(advice
            .recommendations
            .iter()
            .any(|r| r.contains("debt refinancing")));
        assert!(advice
            .recommendations
            .iter()
            .any(|r| r.contains("capital-intensive projects")));
    }

    #[test]
    fn triggers_are_additive_in_table_order() {
        let risks = texts(&[
            "High inflation (5%) may erode margins",
            "Strong currency may hurt export competitiveness",
        ]);
        let opportunities = texts(&["Favorable conditions for international acquisitions"]);
        let advice = synthesize(&risks, &opportunities);

        assert_eq!(advice.recommendations.len(), 6);
        assert!(advice.recommendations[0].contains("dynamic pricing"));
        assert!(advice.recommendations[2].contains("currency hedging"));
        assert!(advice.recommendations[4].contains("strategic acquisition"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let advice = synthesize(&texts(&["INFLATION shock"]), &[]);
        assert!(advice.recommendations[0].contains("dynamic pricing"));
    }

    #[test]
    fn opportunity_needles_do_not_scan_risks() {
        // "growth" sits in a risk text; the growth trigger scans opportunities only
        let advice = synthesize(&texts(&["growth slowdown feared"]), &[]);
        assert_eq!(advice.recommendations.len(), 3);
        assert!(advice.recommendations[0].contains("Monitor economic indicators"));
    }
}
