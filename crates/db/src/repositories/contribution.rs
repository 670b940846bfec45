//! Contribution and interest row repository.
//!
//! History rows are read through a left join so contributions keep flowing
//! even when their office or type reference is missing; absent names map to
//! empty strings.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use pensio_core::statement::{ComputedInterestRecord, ContributionRecord, ContributionType};
use pensio_core::store::{ContributionStore, StoreError};
use pensio_shared::types::{ContributionTypeId, Period, SapId};

use super::store_error;
use crate::entities::{computed_interests, contribution_types, contributions, offices};

/// Repository for contribution and computed-interest rows.
#[derive(Debug, Clone)]
pub struct ContributionRepository {
    db: DatabaseConnection,
}

impl ContributionRepository {
    /// Creates a new contribution repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct ContributionRow {
    sap_id: i64,
    amount: Option<Decimal>,
    for_period: Option<i32>,
    in_period: Option<i32>,
    office_name: Option<String>,
    contribution_type_name: Option<String>,
}

fn joined_rows() -> Select<contributions::Entity> {
    contributions::Entity::find()
        .select_only()
        .column(contributions::Column::SapId)
        .column(contributions::Column::Amount)
        .column(contributions::Column::ForPeriod)
        .column(contributions::Column::InPeriod)
        .column_as(offices::Column::Name, "office_name")
        .column_as(contribution_types::Column::Name, "contribution_type_name")
        .join(JoinType::LeftJoin, contributions::Relation::Offices.def())
        .join(
            JoinType::LeftJoin,
            contributions::Relation::ContributionTypes.def(),
        )
}

fn to_record(row: ContributionRow) -> ContributionRecord {
    ContributionRecord {
        sap_id: SapId::new(row.sap_id),
        amount: row.amount,
        for_period: row.for_period.map(Period::from_raw),
        in_period: row.in_period.map(Period::from_raw),
        office_name: row.office_name.unwrap_or_default(),
        contribution_type_name: row.contribution_type_name.unwrap_or_default(),
    }
}

fn to_type(model: contribution_types::Model) -> ContributionType {
    ContributionType {
        id: ContributionTypeId::new(model.id),
        name: model.name,
    }
}

fn to_interest(model: computed_interests::Model) -> ComputedInterestRecord {
    ComputedInterestRecord {
        sap_id: SapId::new(model.sap_id),
        period: Period::from_raw(model.year_month),
        interest: model.interest,
    }
}

#[async_trait]
impl ContributionStore for ContributionRepository {
    async fn contribution_types(&self) -> Result<Vec<ContributionType>, StoreError> {
        contribution_types::Entity::find()
            .order_by_asc(contribution_types::Column::Id)
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(to_type).collect())
            .map_err(store_error)
    }

    async fn contributions_by_type(
        &self,
        sap_id: SapId,
        type_id: ContributionTypeId,
    ) -> Result<Vec<ContributionRecord>, StoreError> {
        joined_rows()
            .filter(contributions::Column::SapId.eq(sap_id.into_inner()))
            .filter(contributions::Column::ContributionTypeId.eq(type_id.into_inner()))
            .into_model::<ContributionRow>()
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(to_record).collect())
            .map_err(store_error)
    }

    async fn contribution_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ContributionRecord>, StoreError> {
        joined_rows()
            .filter(contributions::Column::SapId.eq(sap_id.into_inner()))
            .order_by_with_nulls(
                contributions::Column::ForPeriod,
                Order::Desc,
                NullOrdering::Last,
            )
            .into_model::<ContributionRow>()
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(to_record).collect())
            .map_err(store_error)
    }

    async fn interest_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ComputedInterestRecord>, StoreError> {
        computed_interests::Entity::find()
            .filter(computed_interests::Column::SapId.eq(sap_id.into_inner()))
            .order_by_desc(computed_interests::Column::YearMonth)
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(to_interest).collect())
            .map_err(store_error)
    }
}
