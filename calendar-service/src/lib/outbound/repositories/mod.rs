pub mod account;
pub mod event;

pub use account::InMemoryAccountDirectory;
pub use event::InMemoryEventRepository;
