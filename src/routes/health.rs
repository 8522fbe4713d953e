use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once at least one itinerary dataset loaded; with all four absent
/// there is nothing to serve.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    if app.store.has_ready() {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        tracing::error!("readiness check failed: no itinerary dataset loaded");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "no_itinerary_data"
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
