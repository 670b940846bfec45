//! `SeaORM` Entity for the members registry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sap_id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: Option<String>,
    pub pension_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contributions::Entity")]
    Contributions,
    #[sea_orm(has_many = "super::computed_interests::Entity")]
    ComputedInterests,
}

impl Related<super::contributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contributions.def()
    }
}

impl Related<super::computed_interests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComputedInterests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
