use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;
use tripdeck_itinerary::ItineraryStore;

use crate::error::AppError;

mod health;
pub(crate) mod itinerary;
mod map_data;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Arc<ItineraryStore>,
}

pub async fn fallback() -> impl IntoResponse {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(itinerary::page))
        .route("/itinerary/cards", get(itinerary::cards))
        .route("/itinerary/map-data", get(map_data::data))
        .route("/static/{*path}", get(crate::assets::static_handler))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
