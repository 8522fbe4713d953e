use axum::Json;
use axum::extract::{Query, State};
use tripdeck_itinerary::{MapView, derive_map};

use crate::routes::AppState;
use crate::routes::itinerary::ViewQuery;

/// GET /itinerary/map-data - markers and route polyline for the active
/// option. Language does not change coordinates, but the active dataset is
/// resolved the same way as for the cards so marker names follow it.
pub async fn data(State(app): State<AppState>, Query(query): Query<ViewQuery>) -> Json<MapView> {
    let view = query.view_state();
    let records = app
        .store
        .current_days(view.active_option(), view.active_language());

    if records.is_empty() {
        tracing::warn!(option = %view.active_option(), "map requested for an empty dataset");
    }

    Json(derive_map(records))
}
