use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::models::Username;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::ports::EventRepository;

/// In-memory event store.
///
/// Events are held in insertion order, so listings come back oldest first.
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: Event) -> Result<Event, EventError> {
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn find_by_owner(
        &self,
        owner: &Username,
        limit: usize,
    ) -> Result<Vec<Event>, EventError> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|event| &event.owner == owner)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_all(&self, limit: usize) -> Result<Vec<Event>, EventError> {
        let events = self.events.read().await;
        Ok(events.iter().take(limit).cloned().collect())
    }
}
