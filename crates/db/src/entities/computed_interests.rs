//! `SeaORM` Entity for computed-interest rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "computed_interests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sap_id: i64,
    pub year_month: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub interest: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::SapId",
        to = "super::members::Column::SapId"
    )]
    Members,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
