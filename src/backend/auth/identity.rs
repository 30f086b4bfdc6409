//! Identity resolution
//!
//! Maps the subject of a verified token to the user it names. Every call is
//! a fresh read through the [`UserStore`]; nothing is cached between
//! requests, so a deleted user stops resolving immediately.

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::users::{Identity, UserStore};
use crate::backend::error::StoreError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no user matches the token subject")]
    NotFound,

    #[error(transparent)]
    Unavailable(StoreError),
}

#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, subject: &str) -> Result<Identity, ResolveError> {
        match self.store.find_identity_by_username(subject).await {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => Err(ResolveError::NotFound),
            Err(e) => Err(ResolveError::Unavailable(e)),
        }
    }
}
