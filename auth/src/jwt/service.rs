use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Immutable signing configuration for the token service.
///
/// Passed in at construction rather than read from globals so every service
/// (and every test) can carry its own secret and lifetime.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenConfig {
    /// Lifetime applied when no explicit TTL is configured.
    pub const DEFAULT_TTL_MINUTES: i64 = 15;

    /// Create a config with the given signing secret and the default
    /// 15-minute token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    ///
    /// # Returns
    /// TokenConfig with the default lifetime
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
            ttl: Duration::minutes(Self::DEFAULT_TTL_MINUTES),
        }
    }

    /// Override the token lifetime.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime for tokens issued without an explicit TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Issues and validates signed bearer tokens.
///
/// Tokens are stateless HS256 JWTs carrying `{sub, exp, iat}`. There is no
/// server-side record of an issued token: validity is determined purely by
/// signature and expiry at validation time.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from a signing configuration.
    ///
    /// # Arguments
    /// * `config` - Signing secret and default lifetime
    ///
    /// # Returns
    /// TokenService using the fixed HS256 algorithm
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            algorithm: Algorithm::HS256,
            ttl: config.ttl,
        }
    }

    /// Issue a token for `subject` with the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Account identifier embedded as the `sub` claim
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// Two calls for the same subject at different times produce different
    /// tokens, because the expiry differs.
    ///
    /// # Arguments
    /// * `subject` - Account identifier embedded as the `sub` claim
    /// * `ttl` - Explicit lifetime, overriding the configured one
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(subject, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Expiry is checked with zero leeway, so an `exp` in the past always
    /// fails. Signature mismatch, a malformed payload, and a missing `sub`
    /// claim all come back as `Invalid`; attacker-supplied input can only
    /// produce a typed error, never a panic.
    ///
    /// # Arguments
    /// * `token` - Encoded token string to validate
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Expired` - Current time is past the `exp` claim
    /// * `Invalid` - Signature or payload did not verify
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}
