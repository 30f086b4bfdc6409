/**
 * Session Tokens
 *
 * This module issues and verifies the stateless bearer tokens handed out at
 * login. A token is a compact JWT (`header.payload.signature`, base64url)
 * whose payload carries the subject (username) and an absolute expiry.
 *
 * # Verification Order
 *
 * The signature is checked before any claim is looked at. Only a token that
 * was signed with the server secret gets its `sub`/`exp` claims inspected,
 * so a forged token is always reported as a signature failure even when its
 * claims are also expired or incomplete.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::{AuthConfig, ConfigError};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Payload as decoded before the required claims are checked
///
/// Optional fields keep a signed but incomplete token from failing as a
/// JSON error, so it can be reported as a missing claim instead.
#[derive(Debug, Deserialize)]
struct TokenPayload {
    sub: Option<String>,
    exp: Option<u64>,
    #[serde(default)]
    iat: u64,
}

/// Why a token could not be issued
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("token lifetime runs past the representable time range")]
    ExpiryOutOfRange,

    #[error(transparent)]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Why a token was rejected
///
/// Kept distinct for diagnostics only; callers of the authorization gate
/// never see which kind occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("token is missing the `{0}` claim")]
    MissingClaim(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            // A header naming another algorithm is a forgery attempt, not a parse error
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::MissingRequiredClaim(claim) => Self::MissingClaim(claim.clone()),
            _ => Self::Malformed,
        }
    }
}

/// Issues and verifies signed, time-limited bearer tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    access_ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .field("access_ttl", &self.access_ttl)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenCodec {
    /// Create a codec signing with `secret` under an HMAC algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty secret or a
    /// non-HMAC algorithm.
    pub fn new(secret: &[u8], algorithm: Algorithm, access_ttl: Duration) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(ConfigError::InvalidValue {
                key: "JWT_ALGORITHM",
                message: format!("{:?} is not an HMAC algorithm", algorithm),
            });
        }

        let mut validation = Validation::new(algorithm);
        // Expiry is checked by `verify_at` against the caller's clock, after the signature
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            access_ttl,
        })
    }

    /// Create the codec described by the startup configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        Self::new(config.jwt_secret.expose(), config.algorithm, config.token_ttl)
    }

    /// Lifetime given to tokens issued at login
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Create a token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, IssueError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Create a token for `subject` as if issued at `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        let expires_at = now.checked_add_signed(ttl).ok_or(IssueError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: subject.to_string(),
            exp: unix_seconds(expires_at),
            iat: unix_seconds(now),
        };

        Ok(encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?)
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as of `now`.
    ///
    /// The token is expired once `now` reaches its `exp` instant.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let payload = decode::<TokenPayload>(token, &self.decoding_key, &self.validation)?.claims;

        let sub = payload.sub.ok_or_else(|| TokenError::MissingClaim("sub".to_string()))?;
        let exp = payload.exp.ok_or_else(|| TokenError::MissingClaim("exp".to_string()))?;

        if exp <= unix_seconds(now) {
            return Err(TokenError::Expired);
        }

        Ok(Claims {
            sub,
            exp,
            iat: payload.iat,
        })
    }
}

/// Seconds since the epoch, clamped to zero for pre-epoch instants
fn unix_seconds(instant: DateTime<Utc>) -> u64 {
    u64::try_from(instant.timestamp()).unwrap_or(0)
}
