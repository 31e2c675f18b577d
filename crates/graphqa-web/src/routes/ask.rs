//! Ask route handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use graphqa_core::{Ask, AskResponse, FieldErrors, QaError};

use crate::state::AppState;

/// POST /api/ask/ - Answer a natural-language question from the graph.
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AskResponse>, (StatusCode, Json<Value>)> {
    let Json(body) = payload.map_err(|rejection| {
        let mut errors = FieldErrors::new();
        errors.add("body", rejection.body_text());
        invalid(errors)
    })?;

    let ask = Ask::from_json(&body).map_err(invalid)?;

    let answer = state.qa.ask(&ask).await.map_err(|e| match e {
        QaError::Validation(errors) => invalid(errors),
        other => {
            error!(error = %other, question = %ask.question, "Failed to answer question");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": other.to_string() })),
            )
        }
    })?;

    Ok(Json(answer))
}

fn invalid(errors: FieldErrors) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": "Invalid request", "errors": errors })),
    )
}
