//! heuristics.rs — classification tables for the analysis pipeline:
//! ordered domain rules (needle set, signal triple, summary template) and
//! the sentiment keyword sets used by the risk/opportunity detector.
//!
//! The tables ship embedded (`config/heuristics.toml`) and can be replaced
//! at startup via `HEURISTICS_CONFIG_PATH`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::types::SignalTriple;

pub const DEFAULT_HEURISTICS_TOML: &str = include_str!("../config/heuristics.toml");
pub const ENV_HEURISTICS_CONFIG_PATH: &str = "HEURISTICS_CONFIG_PATH";

/// Process-wide tables, loaded once on first use.
pub static HEURISTICS: Lazy<Heuristics> = Lazy::new(Heuristics::load);

/// One classification rule: matches when any needle occurs in the source
/// host. Rules are evaluated in file order; first match wins.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainRule {
    #[serde(default)]
    pub needles: Vec<String>,
    pub summary: String,
    pub inflation: f64,
    pub exchange: f64,
    pub interest: f64,
}

impl DomainRule {
    pub fn matches(&self, host: &str) -> bool {
        self.needles.iter().any(|n| host.contains(n.as_str()))
    }

    pub fn signal(&self) -> SignalTriple {
        SignalTriple::new(self.inflation, self.exchange, self.interest)
    }

    /// Render the summary template for a concrete host.
    pub fn render_summary(&self, host: &str) -> String {
        self.summary.replace("{domain}", host)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentKeywords {
    pub negative: Vec<String>,
    pub positive: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Heuristics {
    #[serde(default)]
    pub domain_rules: Vec<DomainRule>,
    pub fallback: DomainRule,
    pub sentiment: SentimentKeywords,
}

impl Heuristics {
    /// Parse the embedded default tables.
    pub fn from_default() -> Self {
        toml::from_str(DEFAULT_HEURISTICS_TOML).expect("valid embedded heuristics")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from `HEURISTICS_CONFIG_PATH` when set, otherwise the embedded
    /// default. A broken override logs a warning and falls back.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(ENV_HEURISTICS_CONFIG_PATH) {
            match Self::from_path(Path::new(&path)) {
                Ok(h) => return h,
                Err(e) => {
                    warn!(%path, error = %e, "failed to load heuristics override, using embedded default");
                }
            }
        }
        Self::from_default()
    }

    /// First matching domain rule, or the fallback.
    pub fn classify(&self, host: &str) -> &DomainRule {
        self.domain_rules
            .iter()
            .find(|r| r.matches(host))
            .unwrap_or(&self.fallback)
    }
}
