use axum::extract::State;
use axum::http::StatusCode;

use super::list_events::EventData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::router::AppState;

/// Admin-only listing across all owners. The admin check happens in the
/// route's middleware stack, not here.
pub async fn list_all_events(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EventData>>, ApiError> {
    state
        .event_service
        .list_all()
        .await
        .map_err(ApiError::from)
        .map(|events| {
            ApiSuccess::new(StatusCode::OK, events.iter().map(EventData::from).collect())
        })
}
