use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::Username;

/// Calendar event entity.
///
/// `owner` is always the username of the principal that created the event;
/// it never comes from the request body.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_defined: bool,
    pub owner: Username,
}

/// Event unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Generate a new random event ID.
    ///
    /// # Returns
    /// EventId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new event with domain types.
///
/// Carries no owner: the service stamps the authenticated principal's
/// username.
#[derive(Debug)]
pub struct CreateEventCommand {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_defined: bool,
}

impl CreateEventCommand {
    /// Construct a new create event command.
    ///
    /// # Arguments
    /// * `title` - Event title
    /// * `description` - Event description
    /// * `start_time` - Scheduled start
    /// * `end_time` - Scheduled end
    /// * `user_defined` - Whether the event was entered by hand
    pub fn new(
        title: String,
        description: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        user_defined: bool,
    ) -> Self {
        Self {
            title,
            description,
            start_time,
            end_time,
            user_defined,
        }
    }
}
