//! API handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::calculator::{self, catalog, Calculation};
use crate::error::Error;

/// Root status message
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Calculator API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Evaluate a single binary arithmetic expression
pub async fn calculate(
    Json(payload): Json<CalculationRequest>,
) -> Result<Json<Calculation>, ApiError> {
    let calculation = calculator::calculate(payload.a, payload.b, &payload.operation)?;
    Ok(Json(calculation))
}

#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub a: f64,
    pub b: f64,
    pub operation: String,
}

/// List the supported operations
pub async fn operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: catalog::operations(),
    })
}

#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    pub operations: &'static [catalog::OperationDescriptor],
}

/// Maps core errors onto HTTP status codes and the `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::InvalidOperation { .. } | Error::DivisionByZero => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            Error::Internal(_) => {
                tracing::error!(error = %self.0, "calculation failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Calculation error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
