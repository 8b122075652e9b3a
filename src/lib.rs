// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod agent;
pub mod aggregate;
pub mod api;
pub mod detect;
pub mod error;
pub mod heuristics;
pub mod obs;
pub mod recommend;
pub mod signal;
pub mod types;
pub mod update;

// ---- Re-exports for stable public API ----
pub use crate::agent::{FinancialNewsAgent, NewsAgent};
pub use crate::api::{create_router, router, AppState};
