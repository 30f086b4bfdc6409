//! Caller-facing authentication errors
//!
//! The token codec and the identity resolver report precise failure kinds
//! ([`TokenError`](super::sessions::TokenError),
//! [`ResolveError`](super::identity::ResolveError)) for logging. Nothing past
//! the authorization gate ever sees them: every rejection becomes
//! [`AuthError::Unauthenticated`] and every login failure becomes
//! [`AuthError::InvalidCredentials`].

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token absent, malformed, forged, expired, or naming an unknown user
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// The user store could not be reached; safe to retry
    #[error("Service temporarily unavailable")]
    Unavailable,
}
