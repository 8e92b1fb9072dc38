use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::RoleError;
use crate::domain::account::errors::UsernameError;

/// Account aggregate entity.
///
/// Represents a registered account; `username` is the unique key under which
/// the directory stores it. The password is only ever held as a hash.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: Username,
    pub full_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub password_hash: String,
    pub status: AccountStatus,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// Validates length and character constraints.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Get username as string slice.
    ///
    /// # Returns
    /// Username string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    ///
    /// # Returns
    /// Email string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Account role gating privileged endpoints.
///
/// Parsed from its wire form at the boundary so an unrecognized role string
/// cannot reach the domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Get the wire representation of this role.
    ///
    /// # Returns
    /// `"user"` or `"admin"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account may use guarded endpoints.
///
/// Disabled accounts can still log in; the access guard's active layer is
/// what locks them out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountStatus {
    #[default]
    Active,
    Disabled,
}

impl AccountStatus {
    /// Build a status from the wire-level `disabled` flag.
    ///
    /// # Arguments
    /// * `disabled` - True when the account is disabled
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            AccountStatus::Disabled
        } else {
            AccountStatus::Active
        }
    }

    /// Check whether this status blocks guarded endpoints.
    pub fn is_disabled(&self) -> bool {
        matches!(self, AccountStatus::Disabled)
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub username: Username,
    pub password: String,
    pub full_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub role: Role,
    pub status: AccountStatus,
}

impl CreateAccountCommand {
    /// Construct a new registration command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (hashed by the service)
    /// * `full_name` - Optional display name
    /// * `email` - Optional validated email address
    /// * `role` - Account role
    /// * `status` - Initial active/disabled state
    pub fn new(
        username: Username,
        password: String,
        full_name: Option<String>,
        email: Option<EmailAddress>,
        role: Role,
        status: AccountStatus,
    ) -> Self {
        Self {
            username,
            password,
            full_name,
            email,
            role,
            status,
        }
    }
}
