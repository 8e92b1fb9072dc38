use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Verify credentials; the rejection is the same for unknown usernames
    // and wrong passwords
    let account = state
        .account_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect username or password".to_string())
            }
            _ => ApiError::from(e),
        })?;

    // Issue a bearer token with the username as subject
    let access_token = state
        .token_service
        .issue(account.username.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token,
            token_type: "Bearer".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
