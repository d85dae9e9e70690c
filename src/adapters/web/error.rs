//! HTTP error responses for the web adapter.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::MarketError;

/// A domain failure flattened to an HTTP status plus a stable kind and a
/// human-readable message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            kind: "VALIDATION",
            message: message.into(),
        }
    }
}

impl From<MarketError> for ApiError {
    fn from(err: MarketError) -> Self {
        let status = match &err {
            MarketError::Validation { .. } => StatusCode::BAD_REQUEST,
            MarketError::UnknownStock { .. } => StatusCode::NOT_FOUND,
            MarketError::UndefinedRatio { .. }
            | MarketError::NoTradeData { .. }
            | MarketError::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
