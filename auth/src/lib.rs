//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the calendar backend:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and validation (HS256 JWTs)
//!
//! The service defines its own domain traits and adapts these implementations.
//! This keeps credential handling reusable without coupling it to storage or
//! HTTP concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenConfig, TokenService};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new(b"secret_key_at_least_32_bytes_long!")
//!     .with_ttl(Duration::minutes(30));
//! let tokens = TokenService::new(&config);
//!
//! let token = tokens.issue("alice").unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenConfig;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
