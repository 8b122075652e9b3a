//! Boundary errors. The pipeline itself never fails on well-typed input;
//! the only rejections happen here, before a stage is reached.

use serde_json::json;
use shuttle_axum::axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The source could not be parsed into an absolute URL with a host.
    #[error("invalid source url `{url}`: {reason}")]
    InvalidSource { url: String, reason: String },

    #[error("firm must be a non-empty string")]
    EmptyFirm,
}

impl IntoResponse for BoundaryError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_source_names_the_offender() {
        let e = BoundaryError::InvalidSource {
            url: "not a url".into(),
            reason: "relative URL without a base".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL"));
    }
}
