//! Access-resolution error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while resolving an identity to a role.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The identity is in neither the administrator nor the member registry.
    #[error("no portal role for identity {0:?}")]
    IdentityNotFound(String),

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
