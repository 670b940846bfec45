//! Repository implementations of the core store traits.
//!
//! Repositories hide the `SeaORM` query details from the rest of the
//! application; the core only ever sees the store traits.

pub mod contribution;
pub mod member;

pub use contribution::ContributionRepository;
pub use member::MemberRepository;

use pensio_core::store::StoreError;
use sea_orm::DbErr;

pub(crate) fn store_error(err: DbErr) -> StoreError {
    StoreError::Backend(err.to_string())
}
