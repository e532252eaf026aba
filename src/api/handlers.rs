use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{DramaResponse, RecommendQuery},
    services,
};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Welcome endpoint
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the KDrama Recommendation API",
    })
}

/// Liveness endpoint
pub async fn monitor() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Monitoring the API",
    })
}

/// Returns the best matching drama for the given filters
///
/// Invalid queries and empty year matches come back as `{"error": ...}` with a 200 status.
pub async fn recommend(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<DramaResponse>> {
    tracing::info!(
        request_id = %request_id,
        genre = ?params.genre,
        year = ?params.year,
        actor = ?params.actor,
        platform = ?params.platform,
        content_rating = ?params.content_rating,
        "Processing recommendation request"
    );

    let catalog = Arc::clone(&state.catalog);
    let outcome = tokio::task::spawn_blocking(move || {
        services::recommend(&catalog, &params)
            .map(|scored| (DramaResponse::from(scored.drama), scored.similarity))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    match outcome {
        Ok((response, similarity)) => {
            tracing::info!(
                request_id = %request_id,
                name = %response.name,
                similarity,
                "Recommendation completed"
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::info!(
                request_id = %request_id,
                outcome = e.kind(),
                "No recommendation"
            );
            Err(e)
        }
    }
}
