use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ingest::IngestError;
use serde_json::json;
use thiserror::Error;

/// Shown whenever a request arrives without a file.
pub const UPLOAD_PROMPT: &str = "Please upload a CSV file to proceed.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file was uploaded")]
    NoUpload,
    #[error("Upload error: {0}")]
    Ingest(#[from] IngestError),
    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NoUpload | AppError::Ingest(IngestError::EmptyUpload) => {
                (StatusCode::BAD_REQUEST, json!({ "error": UPLOAD_PROMPT }))
            }
            AppError::Ingest(IngestError::MissingColumns(columns)) => {
                tracing::warn!(?columns, "Upload rejected: missing columns.");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": "The upload is missing required columns",
                        "missing_columns": columns,
                    }),
                )
            }
            AppError::Ingest(ingest_err) => {
                tracing::warn!(error = %ingest_err, "Upload could not be parsed.");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": ingest_err.to_string() }),
                )
            }
            AppError::Analytics(analytics_err) => {
                tracing::error!(error = ?analytics_err, "Analytics error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An error occurred while calculating the dashboard" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
