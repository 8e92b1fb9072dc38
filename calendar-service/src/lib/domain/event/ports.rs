use async_trait::async_trait;

use crate::domain::account::models::Username;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;

/// Port for event domain service operations.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    /// Create a new event owned by the given principal.
    ///
    /// # Arguments
    /// * `command` - Event fields from the request
    /// * `owner` - Username of the authenticated principal
    ///
    /// # Returns
    /// Stored event with its assigned id
    ///
    /// # Errors
    /// * `StoreUnavailable` - Event store could not be reached
    async fn create_event(
        &self,
        command: CreateEventCommand,
        owner: Username,
    ) -> Result<Event, EventError>;

    /// List events owned by the given principal.
    ///
    /// # Arguments
    /// * `owner` - Username whose events to list
    ///
    /// # Returns
    /// The owner's events, at most 100
    ///
    /// # Errors
    /// * `StoreUnavailable` - Event store could not be reached
    async fn list_for_owner(&self, owner: &Username) -> Result<Vec<Event>, EventError>;

    /// List events across all owners.
    ///
    /// # Returns
    /// All events, at most 100
    ///
    /// # Errors
    /// * `StoreUnavailable` - Event store could not be reached
    async fn list_all(&self) -> Result<Vec<Event>, EventError>;
}

/// Persistence operations for the event store.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    /// Persist a new event.
    ///
    /// # Arguments
    /// * `event` - Event entity to store
    ///
    /// # Returns
    /// Stored event entity
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be reached
    async fn insert(&self, event: Event) -> Result<Event, EventError>;

    /// Retrieve events for one owner, oldest first.
    ///
    /// # Arguments
    /// * `owner` - Username whose events to retrieve
    /// * `limit` - Maximum number of events to return
    ///
    /// # Returns
    /// Matching events, truncated to `limit`
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be reached
    async fn find_by_owner(
        &self,
        owner: &Username,
        limit: usize,
    ) -> Result<Vec<Event>, EventError>;

    /// Retrieve events across all owners, oldest first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of events to return
    ///
    /// # Returns
    /// Events, truncated to `limit`
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be reached
    async fn find_all(&self, limit: usize) -> Result<Vec<Event>, EventError>;
}
