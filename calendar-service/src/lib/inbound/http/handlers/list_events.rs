use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::models::Event;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<Vec<EventData>>, ApiError> {
    state
        .event_service
        .list_for_owner(&principal.account.username)
        .await
        .map_err(ApiError::from)
        .map(|events| {
            ApiSuccess::new(StatusCode::OK, events.iter().map(EventData::from).collect())
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_defined: bool,
    pub owner: String,
}

impl From<&Event> for EventData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start_time,
            end_time: event.end_time,
            user_defined: event.user_defined,
            owner: event.owner.as_str().to_string(),
        }
    }
}
