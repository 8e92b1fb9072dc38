use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::models::Username;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::ports::EventRepository;
use crate::domain::event::ports::EventServicePort;

/// Domain service implementation for event operations.
///
/// Concrete implementation of EventServicePort with dependency injection.
pub struct EventService<R>
where
    R: EventRepository,
{
    repository: Arc<R>,
}

impl<R> EventService<R>
where
    R: EventRepository,
{
    /// Listings never return more than this many events.
    const LIST_LIMIT: usize = 100;

    /// Create a new event service.
    ///
    /// # Arguments
    /// * `repository` - Event persistence implementation
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EventServicePort for EventService<R>
where
    R: EventRepository,
{
    async fn create_event(
        &self,
        command: CreateEventCommand,
        owner: Username,
    ) -> Result<Event, EventError> {
        let event = Event {
            id: EventId::new(),
            title: command.title,
            description: command.description,
            start_time: command.start_time,
            end_time: command.end_time,
            user_defined: command.user_defined,
            owner,
        };

        self.repository.insert(event).await
    }

    async fn list_for_owner(&self, owner: &Username) -> Result<Vec<Event>, EventError> {
        self.repository.find_by_owner(owner, Self::LIST_LIMIT).await
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventError> {
        self.repository.find_all(Self::LIST_LIMIT).await
    }
}
