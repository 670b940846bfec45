//! `SeaORM` Entity for raw contribution rows.
//!
//! Upstream imports leave most columns nullable; the aggregation layer
//! applies the zero/empty defaults.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "contributions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sap_id: i64,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub amount: Option<Decimal>,
    pub for_period: Option<i32>,
    pub in_period: Option<i32>,
    pub office_id: Option<i64>,
    pub contribution_type_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::SapId",
        to = "super::members::Column::SapId"
    )]
    Members,
    #[sea_orm(
        belongs_to = "super::offices::Entity",
        from = "Column::OfficeId",
        to = "super::offices::Column::Id"
    )]
    Offices,
    #[sea_orm(
        belongs_to = "super::contribution_types::Entity",
        from = "Column::ContributionTypeId",
        to = "super::contribution_types::Column::Id"
    )]
    ContributionTypes,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl Related<super::offices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offices.def()
    }
}

impl Related<super::contribution_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContributionTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
