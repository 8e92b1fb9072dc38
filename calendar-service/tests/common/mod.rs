use std::sync::Arc;

use auth::TokenConfig;
use auth::TokenService;
use calendar_service::domain::account::service::AccountService;
use calendar_service::domain::event::service::EventService;
use calendar_service::inbound::http::router::create_router;
use calendar_service::outbound::repositories::InMemoryAccountDirectory;
use calendar_service::outbound::repositories::InMemoryEventRepository;
use chrono::Duration;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    /// Signs with the same secret as the server, so tests can mint tokens
    /// the server's validator accepts.
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::minutes(30)).await
    }

    /// Spawn with a custom token lifetime (for expiry tests)
    pub async fn spawn_with_ttl(ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_config = TokenConfig::new(TEST_SECRET).with_ttl(ttl);

        let account_directory = Arc::new(InMemoryAccountDirectory::new());
        let event_repository = Arc::new(InMemoryEventRepository::new());

        let account_service = Arc::new(AccountService::new(account_directory));
        let event_service = Arc::new(EventService::new(event_repository));
        let token_service = Arc::new(TokenService::new(&token_config));

        let router = create_router(account_service, event_service, token_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            token_service: TokenService::new(&token_config),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }
}
