use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{Outfit, SuggestRequest};
use crate::services::{recommend, CAPTURED_TIP};

use super::AppState;

/// Echoed in place of an empty questionnaire answer
const ANY: &str = "any";

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub occasion: String,
    pub gender: String,
    pub style: String,
    pub budget: String,
    pub image_path: Option<String>,
    #[serde(flatten)]
    pub outfit: Outfit,
}

fn echo(answer: Option<&str>) -> String {
    match answer {
        Some(answer) if !answer.is_empty() => answer.to_string(),
        _ => ANY.to_string(),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Recommends an outfit for a questionnaire, optionally storing a captured photo
///
/// Bodies that are not valid JSON are read as an empty questionnaire. Only an
/// oversized body is rejected.
pub async fn suggest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> AppResult<Json<SuggestResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(AppError::PayloadTooLarge(rejection.body_text()));
        }
        Err(rejection) => {
            tracing::debug!(
                request_id = %request_id,
                reason = %rejection.body_text(),
                "Unreadable body, using an empty questionnaire"
            );
            SuggestRequest::default()
        }
    };

    let occasion = request.occasion.as_deref().unwrap_or_default();
    let gender = request.gender.as_deref().unwrap_or_default();
    let style = request.style.as_deref().unwrap_or_default();
    let budget = request.budget.as_deref().unwrap_or_default();

    let image_path = match request.image.as_deref().filter(|image| !image.is_empty()) {
        Some(data_url) => match state.photo_store.save(data_url).await {
            Ok(path) => Some(path.display().to_string()),
            Err(e) if e.is_not_a_photo() => {
                tracing::debug!(request_id = %request_id, "Image is not a photo, ignoring it");
                None
            }
            Err(e) => {
                tracing::warn!(request_id = %request_id, error = %e, "Discarding captured photo");
                None
            }
        },
        None => None,
    };

    let mut outfit = recommend(occasion, gender, style, budget);
    if image_path.is_some() {
        outfit = outfit.with_tip(CAPTURED_TIP);
    }

    tracing::info!(
        request_id = %request_id,
        occasion,
        gender,
        style,
        budget,
        photo_saved = image_path.is_some(),
        "Generated outfit suggestion"
    );

    Ok(Json(SuggestResponse {
        occasion: echo(request.occasion.as_deref()),
        gender: echo(request.gender.as_deref()),
        style: echo(request.style.as_deref()),
        budget: echo(request.budget.as_deref()),
        image_path,
        outfit,
    }))
}
