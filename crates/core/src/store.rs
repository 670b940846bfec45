//! Narrow read interfaces to the backing data store.
//!
//! The core services are constructor-injected with these traits and never
//! reach into ambient state. The db crate implements them over `SeaORM`;
//! tests use the generated mocks or hand-rolled fakes.

use async_trait::async_trait;
use pensio_shared::types::{ContributionTypeId, SapId};
use thiserror::Error;

use crate::member::{AdminUser, Member};
use crate::statement::{ComputedInterestRecord, ContributionRecord, ContributionType};

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed to answer a query.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Read access to contribution and interest rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributionStore: Send + Sync {
    /// Enumerates the known contribution types.
    ///
    /// The returned order defines the statement account order.
    async fn contribution_types(&self) -> Result<Vec<ContributionType>, StoreError>;

    /// Fetches a member's contributions recorded under one contribution type.
    async fn contributions_by_type(
        &self,
        sap_id: SapId,
        type_id: ContributionTypeId,
    ) -> Result<Vec<ContributionRecord>, StoreError>;

    /// Fetches a member's full contribution history, most recent for-period first.
    async fn contribution_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ContributionRecord>, StoreError>;

    /// Fetches a member's computed-interest history, most recent period first.
    async fn interest_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ComputedInterestRecord>, StoreError>;
}

/// Read access to the member and administrator registries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Looks up an administrator by login email.
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError>;

    /// Looks up a member by login email.
    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError>;

    /// Looks up a member by SAP ID.
    async fn find_member_by_sap_id(&self, sap_id: SapId) -> Result<Option<Member>, StoreError>;
}
