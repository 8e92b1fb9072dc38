use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// `sub` identifies the account the token was issued for; `exp` and `iat`
/// are Unix timestamps in seconds. All three are required, so a payload
/// missing any of them fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account username)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier to embed as `sub`
    /// * `ttl` - Lifetime added to the current time to produce `exp`
    ///
    /// # Returns
    /// Claims with `sub`, `exp`, and `iat` set
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.into(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}
