use std::sync::Arc;

use auth::TokenConfig;
use auth::TokenService;
use calendar_service::config::Config;
use calendar_service::domain::account::service::AccountService;
use calendar_service::domain::event::service::EventService;
use calendar_service::inbound::http::router::create_router;
use calendar_service::outbound::repositories::InMemoryAccountDirectory;
use calendar_service::outbound::repositories::InMemoryEventRepository;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calendar_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "calendar-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.ttl_minutes,
        "Configuration loaded"
    );

    let token_config = TokenConfig::new(config.jwt.secret.as_bytes())
        .with_ttl(Duration::minutes(config.jwt.ttl_minutes));
    let token_service = Arc::new(TokenService::new(&token_config));

    let account_directory = Arc::new(InMemoryAccountDirectory::new());
    let event_repository = Arc::new(InMemoryEventRepository::new());

    let account_service = Arc::new(AccountService::new(account_directory));
    let event_service = Arc::new(EventService::new(event_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service, event_service, token_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
