use std::sync::Arc;

use metrics::counter;
use shuttle_axum::axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::agent::{FinancialNewsAgent, NewsAgent};
use crate::error::BoundaryError;
use crate::signal;
use crate::types::{
    Advice, AdviceRequest, FindingsReport, FindingsRequest, MetricSnapshot, MetricsUpdateRequest,
    NewsReport, NewsRequest, PipelineReport, RunRequest,
};

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<FinancialNewsAgent>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            agent: Arc::new(FinancialNewsAgent::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the Router the binary serves; each pipeline operation is exposed
/// as its own endpoint, plus the orchestrated `/agent/run`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/agent/analyze-news", post(analyze_news))
        .route("/agent/compute-metric-updates", post(compute_metric_updates))
        .route(
            "/agent/detect-risks-opportunities",
            post(detect_risks_opportunities),
        )
        .route(
            "/agent/generate-recommendations",
            post(generate_recommendations),
        )
        .route("/agent/run", post(run_agent))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Convenience constructor with default state.
pub fn router() -> Router {
    create_router(AppState::new())
}

async fn analyze_news(
    State(state): State<AppState>,
    Json(req): Json<NewsRequest>,
) -> Result<Json<NewsReport>, BoundaryError> {
    counter!("analyze_news_requests_total").increment(1);
    let sources = signal::parse_sources(&req.sources)?;
    info!(sources = sources.len(), "analyze-news");
    Ok(Json(state.agent.analyze_news(&sources)))
}

async fn compute_metric_updates(
    State(state): State<AppState>,
    Json(req): Json<MetricsUpdateRequest>,
) -> Json<MetricSnapshot> {
    counter!("compute_metric_updates_requests_total").increment(1);
    Json(state.agent.compute_metric_updates(&req))
}

async fn detect_risks_opportunities(
    State(state): State<AppState>,
    Json(req): Json<FindingsRequest>,
) -> Result<Json<FindingsReport>, BoundaryError> {
    counter!("detect_requests_total").increment(1);
    let firm = req.firm.trim();
    if firm.is_empty() {
        return Err(BoundaryError::EmptyFirm);
    }
    Ok(Json(state.agent.detect_risks_opportunities(
        &req.summaries,
        &req.metrics,
        firm,
    )))
}

async fn generate_recommendations(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Json<Advice> {
    counter!("recommend_requests_total").increment(1);
    Json(
        state
            .agent
            .generate_recommendations(&req.risks, &req.opportunities),
    )
}

async fn run_agent(
    State(state): State<AppState>,
    Json(req): Json<RunRequest>,
) -> Result<Json<PipelineReport>, BoundaryError> {
    counter!("agent_run_requests_total").increment(1);
    let firm = req.firm.trim();
    if firm.is_empty() {
        return Err(BoundaryError::EmptyFirm);
    }
    let sources = signal::parse_sources(&req.sources)?;
    info!(sources = sources.len(), firm, "agent run");
    Ok(Json(state.agent.run(&sources, req.yesterday, firm)))
}
