use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_account::create_account;
use super::handlers::create_event::create_event;
use super::handlers::list_all_events::list_all_events;
use super::handlers::list_events::list_events;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_active;
use super::middleware::require_admin;
use crate::domain::account::service::AccountService;
use crate::domain::event::service::EventService;
use crate::outbound::repositories::InMemoryAccountDirectory;
use crate::outbound::repositories::InMemoryEventRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<InMemoryAccountDirectory>>,
    pub event_service: Arc<EventService<InMemoryEventRepository>>,
    pub token_service: Arc<TokenService>,
}

pub fn create_router(
    account_service: Arc<AccountService<InMemoryAccountDirectory>>,
    event_service: Arc<EventService<InMemoryEventRepository>>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState {
        account_service,
        event_service,
        token_service,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/accounts", post(create_account));

    // The last-added route_layer runs first: authenticate resolves the
    // principal, then the status check sees it.
    let event_routes = Router::new()
        .route("/api/events", post(create_event))
        .route("/api/events", get(list_events))
        .route_layer(middleware::from_fn(require_active))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/api/admin/events", get(list_all_events))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(event_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
