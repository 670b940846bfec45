//! Member and administrator registry repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use pensio_core::member::{AdminUser, Member};
use pensio_core::store::{IdentityStore, StoreError};
use pensio_shared::types::{PensionId, SapId};

use super::store_error;
use crate::entities::{admin_users, members};

/// Repository for member and administrator lookups.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    /// Creates a new member repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_member(model: members::Model) -> Member {
    Member {
        sap_id: SapId::new(model.sap_id),
        pension_id: model.pension_id.map(PensionId::new),
        full_name: model.full_name,
        email: model.email,
    }
}

fn to_admin(model: admin_users::Model) -> AdminUser {
    AdminUser {
        id: model.id,
        email: model.email,
    }
}

#[async_trait]
impl IdentityStore for MemberRepository {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError> {
        admin_users::Entity::find()
            .filter(admin_users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|row| row.map(to_admin))
            .map_err(store_error)
    }

    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        members::Entity::find()
            .filter(members::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|row| row.map(to_member))
            .map_err(store_error)
    }

    async fn find_member_by_sap_id(&self, sap_id: SapId) -> Result<Option<Member>, StoreError> {
        members::Entity::find_by_id(sap_id.into_inner())
            .one(&self.db)
            .await
            .map(|row| row.map(to_member))
            .map_err(store_error)
    }
}
