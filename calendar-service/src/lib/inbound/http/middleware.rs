use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::Role;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through the request
#[derive(Debug, Clone)]
pub struct Principal {
    pub account: Account,
}

/// Middleware that validates bearer tokens and resolves the principal.
///
/// The token subject is looked up in the directory on every request, so a
/// token issued for a since-removed account stops working immediately.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate token and extract claims (from auth library)
    let claims = state.token_service.validate(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid or expired token"
            })),
        )
            .into_response()
    })?;

    // The subject is a username
    let username = Username::new(claims.sub).map_err(|e| {
        tracing::warn!("Invalid username in token subject: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid token format"
            })),
        )
            .into_response()
    })?;

    // Resolve the principal against the directory
    let account = state
        .account_service
        .get_account(&username)
        .await
        .map_err(|e| match e {
            AccountError::NotFound(_) => {
                tracing::warn!("Token subject no longer exists: {}", username);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Invalid or expired token"
                    })),
                )
                    .into_response()
            }
            AccountError::DirectoryUnavailable(ref msg) => {
                tracing::error!("Account directory unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "error": "Account directory unavailable"
                    })),
                )
                    .into_response()
            }
            _ => {
                tracing::error!("Principal lookup failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                )
                    .into_response()
            }
        })?;

    // Add the resolved principal to request extensions
    req.extensions_mut().insert(Principal { account });

    Ok(next.run(req).await)
}

/// Middleware that rejects disabled principals. Runs after `authenticate`.
pub async fn require_active(req: Request, next: Next) -> Result<Response, Response> {
    let principal = principal_from_extensions(&req)?;

    if principal.account.status.is_disabled() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "inactive user"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

/// Middleware that rejects principals without the admin role. Runs after
/// `authenticate`.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let principal = principal_from_extensions(&req)?;

    if principal.account.role != Role::Admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "Insufficient permissions"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

fn principal_from_extensions(req: &Request) -> Result<&Principal, Response> {
    req.extensions().get::<Principal>().ok_or_else(|| {
        tracing::error!("Principal missing from request extensions; authenticate layer not applied");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        )
            .into_response()
    })
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
