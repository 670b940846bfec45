//! Statement aggregation error types.

use pensio_shared::types::SapId;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while producing a statement.
#[derive(Debug, Error)]
pub enum StatementError {
    /// The requested SAP ID has no backing member record.
    #[error("no member found for SAP ID {0}")]
    MemberNotFound(SapId),

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
