//! signal.rs — SignalExtractor: validates raw source URLs, classifies each
//! source by its host against the domain-rule table, and emits parallel
//! sequences of summaries and signal triples (same length and order as the
//! input).

use url::Url;

use crate::error::BoundaryError;
use crate::heuristics::Heuristics;
use crate::types::SignalTriple;

/// Parse and validate raw sources. Every entry must be an absolute URL with
/// a host component; the first offender rejects the whole request, so the
/// extractor below never sees invalid input.
pub fn parse_sources(raw: &[String]) -> Result<Vec<Url>, BoundaryError> {
    let mut out = Vec::with_capacity(raw.len());
    for s in raw {
        let url = Url::parse(s).map_err(|e| BoundaryError::InvalidSource {
            url: s.clone(),
            reason: e.to_string(),
        })?;
        if url.host_str().is_none() {
            return Err(BoundaryError::InvalidSource {
                url: s.clone(),
                reason: "missing host component".into(),
            });
        }
        out.push(url);
    }
    Ok(out)
}

/// Classify each source and emit its summary and signal triple.
pub fn extract(heuristics: &Heuristics, sources: &[Url]) -> (Vec<String>, Vec<SignalTriple>) {
    let mut summaries = Vec::with_capacity(sources.len());
    let mut signals = Vec::with_capacity(sources.len());

    for url in sources {
        // host presence is guaranteed by `parse_sources`
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        let rule = heuristics.classify(&host);
        summaries.push(rule.render_summary(&host));
        signals.push(rule.signal());
    }

    (summaries, signals)
}
