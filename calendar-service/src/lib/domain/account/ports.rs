use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account, hashing its password before it is stored.
    ///
    /// # Arguments
    /// * `command` - Validated registration command
    ///
    /// # Returns
    /// The stored account
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DirectoryUnavailable` - Account store could not be reached
    async fn register(&self, command: CreateAccountCommand) -> Result<Account, AccountError>;

    /// Verify a login attempt against the directory.
    ///
    /// Unknown usernames and wrong passwords both come back as
    /// `InvalidCredentials` so a caller cannot probe which usernames exist.
    /// A disabled account with a correct password still authenticates.
    ///
    /// # Arguments
    /// * `username` - Claimed username, unvalidated
    /// * `password` - Plain text password to check
    ///
    /// # Returns
    /// The matching account
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such account or wrong password
    /// * `DirectoryUnavailable` - Account store could not be reached
    async fn authenticate(&self, username: &str, password: &str) -> Result<Account, AccountError>;

    /// Retrieve an account by its unique username.
    ///
    /// # Arguments
    /// * `username` - Username to look up
    ///
    /// # Returns
    /// The matching account
    ///
    /// # Errors
    /// * `NotFound` - No account under that username
    /// * `DirectoryUnavailable` - Account store could not be reached
    async fn get_account(&self, username: &Username) -> Result<Account, AccountError>;
}

/// Port for the account store.
///
/// The store owns uniqueness enforcement: a conflicting insert surfaces as
/// `UsernameAlreadyExists` rather than overwriting the existing record.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Persist a new account. The password must already be hashed.
    ///
    /// # Arguments
    /// * `account` - Account to store
    ///
    /// # Returns
    /// The stored account
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DirectoryUnavailable` - Store could not be reached
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Look up an account by username.
    ///
    /// # Arguments
    /// * `username` - Username to look up
    ///
    /// # Returns
    /// The account, or `None` when absent
    ///
    /// # Errors
    /// * `DirectoryUnavailable` - Store could not be reached
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;
}
