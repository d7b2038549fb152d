//! Genie space lookup by ID.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::AppState;

pub const SPACE_NOT_FOUND: &str = "Genie space not found";

/// Phrases Databricks uses when a resource is missing.
const MISSING_RESOURCE_PHRASES: [&str; 2] = ["not found", "does not exist"];

#[derive(Debug, Deserialize)]
pub struct GenieGetParams {
    pub space_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// True when an upstream error message reads as "resource missing".
///
/// Case-insensitive substring match. Anything else is treated as a genuine
/// failure by the caller.
pub fn is_missing_resource_message(message: &str) -> bool {
    let message = message.to_lowercase();
    MISSING_RESOURCE_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

fn space_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope {
            error: SPACE_NOT_FOUND.to_string(),
        }),
    )
        .into_response()
}

/// `GET /genie/get?space_id=...`
///
/// Found spaces pass through untouched. Absence, whether reported as `None` or
/// as a "not found" style error, becomes a 404 envelope; every other failure
/// propagates as an internal error.
pub async fn genie_get(
    State(state): State<AppState>,
    Query(params): Query<GenieGetParams>,
) -> Result<Response, AppError> {
    let manager = state.managers.manager();

    match manager.genie_get(&params.space_id).await {
        Ok(Some(space)) => Ok(Json(space).into_response()),
        Ok(None) => {
            tracing::info!(space_id = %params.space_id, "Genie space not found");
            Ok(space_not_found())
        }
        Err(err) if is_missing_resource_message(&err.to_string()) => {
            tracing::info!(
                space_id = %params.space_id,
                error = %err,
                "Genie space reported missing by Databricks"
            );
            Ok(space_not_found())
        }
        Err(err) => Err(AppError::InternalError(anyhow::Error::new(err))),
    }
}
