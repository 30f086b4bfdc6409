/**
 * Authorization Gate
 *
 * This module protects routes that require an authenticated user. It
 * extracts the bearer token from the Authorization header, verifies it,
 * re-reads the user it names, and hands that user to the handler.
 *
 * # Rejections
 *
 * A missing header, a non-Bearer scheme, a malformed, forged or expired
 * token, and a subject that no longer exists all produce the same
 * `401 Could not validate credentials`. The precise reason is only logged.
 * A database outage is reported separately as 503 so clients can retry.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::identity::{IdentityResolver, ResolveError};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// Authenticated user resolved for the current request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Composes the token codec and the identity resolver into a single
/// "current user or reject" decision.
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<TokenCodec>,
    resolver: IdentityResolver,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenCodec>, resolver: IdentityResolver) -> Self {
        Self { tokens, resolver }
    }

    /// Resolve the caller of a protected operation.
    ///
    /// # Errors
    ///
    /// [`AuthError::Unauthenticated`] on every rejection path,
    /// [`AuthError::Unavailable`] when the user store cannot be read.
    pub async fn authenticate(&self, raw_token: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        let token = raw_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::debug!("Rejected request: no bearer token");
                AuthError::Unauthenticated
            })?;

        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::warn!("Rejected request: {}", e);
            AuthError::Unauthenticated
        })?;

        match self.resolver.resolve(&claims.sub).await {
            Ok(identity) => Ok(AuthenticatedUser {
                user_id: identity.id,
                username: identity.username,
            }),
            Err(ResolveError::NotFound) => {
                tracing::warn!("Rejected request: token subject {} does not exist", claims.sub);
                Err(AuthError::Unauthenticated)
            }
            Err(ResolveError::Unavailable(e)) => {
                tracing::error!("User lookup failed: {}", e);
                Err(AuthError::Unavailable)
            }
        }
    }
}

/// Extract the raw token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively. Any other scheme, or a header
/// that is not valid ASCII, yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

/// Authentication middleware
///
/// Runs the gate and attaches the [`AuthenticatedUser`] to the request
/// extensions for [`AuthUser`] to pick up. The gate is pulled out of
/// [`AppState`](crate::backend::server::state::AppState) through `FromRef`.
pub async fn auth_middleware(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = gate.authenticate(bearer_token(request.headers())).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes layered with [`auth_middleware`]; anywhere else it
/// rejects like a missing token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(AuthError::Unauthenticated)
            })?;

        Ok(AuthUser(user))
    }
}
