use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::RoleError;
use crate::domain::account::errors::UsernameError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountStatus;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Role;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<ApiSuccess<CreateAccountResponseData>, ApiError> {
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountRequest {
    username: String,
    password: String,
    full_name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    disabled: Option<bool>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateAccountRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

impl CreateAccountRequest {
    fn try_into_command(self) -> Result<CreateAccountCommand, ParseCreateAccountRequestError> {
        let username = Username::new(self.username)?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let role = self
            .role
            .as_deref()
            .map(|r| r.parse::<Role>())
            .transpose()?
            .unwrap_or_default();
        let status = AccountStatus::from_disabled(self.disabled.unwrap_or(false));
        Ok(CreateAccountCommand::new(
            username,
            self.password,
            self.full_name,
            email,
            role,
            status,
        ))
    }
}

impl From<ParseCreateAccountRequestError> for ApiError {
    fn from(err: ParseCreateAccountRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Response for a created account. Carries no password material, not even
/// the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAccountResponseData {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for CreateAccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.as_str().to_string(),
            full_name: account.full_name.clone(),
            email: account.email.as_ref().map(|e| e.as_str().to_string()),
            role: account.role.to_string(),
            disabled: account.status.is_disabled(),
            created_at: account.created_at,
        }
    }
}
