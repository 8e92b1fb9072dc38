use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn create_event(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateEventRequest>,
) -> Result<ApiSuccess<CreateEventResponseData>, ApiError> {
    // The owner is always the authenticated principal
    let owner = principal.account.username.clone();

    state
        .event_service
        .create_event(body.into_command(), owner)
        .await
        .map_err(ApiError::from)
        .map(|event| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateEventResponseData {
                    id: event.id.to_string(),
                },
            )
        })
}

/// HTTP request body for creating an event (raw JSON). Has no owner field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEventRequest {
    title: String,
    description: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    user_defined: bool,
}

impl CreateEventRequest {
    fn into_command(self) -> CreateEventCommand {
        CreateEventCommand::new(
            self.title,
            self.description,
            self.start_time,
            self.end_time,
            self.user_defined,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEventResponseData {
    pub id: String,
}
