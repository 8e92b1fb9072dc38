use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountDirectory;

/// In-memory account directory keyed by username.
///
/// Stands in for the external document store. Uniqueness is enforced at
/// insert time under the write lock, so concurrent registrations of the same
/// username cannot both succeed.
pub struct InMemoryAccountDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(account.username.as_str()) {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.to_string(),
            ));
        }

        accounts.insert(account.username.as_str().to_string(), account.clone());
        Ok(account)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(username.as_str()).cloned())
    }
}
