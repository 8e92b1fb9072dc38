use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountDirectory;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
/// Owns credential hashing and the uniform login rejection; everything it
/// stores or reads goes through the directory port.
pub struct AccountService<D>
where
    D: AccountDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
}

impl<D> AccountService<D>
where
    D: AccountDirectory,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `directory` - Account store adapter
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<D> AccountServicePort for AccountService<D>
where
    D: AccountDirectory,
{
    async fn register(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            username: command.username,
            full_name: command.full_name,
            email: command.email,
            password_hash,
            status: command.status,
            role: command.role,
            created_at: Utc::now(),
        };

        self.directory.create(account).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        // A username that fails validation cannot exist in the directory, so
        // it gets the same rejection as one that is merely absent.
        let Ok(username) = Username::new(username.to_string()) else {
            return Err(AccountError::InvalidCredentials);
        };

        let account = self
            .directory
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }

    async fn get_account(&self, username: &Username) -> Result<Account, AccountError> {
        self.directory
            .find_by_username(username)
            .await?
            .ok_or_else(|| AccountError::NotFound(username.to_string()))
    }
}
