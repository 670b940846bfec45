//! Test utilities for exercising the portal router over in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pensio_core::access::AccessService;
use pensio_core::member::{AdminUser, Member};
use pensio_core::render::HtmlStatementRenderer;
use pensio_core::statement::{
    ComputedInterestRecord, ContributionRecord, ContributionType, StatementService,
};
use pensio_core::store::{ContributionStore, IdentityStore, StoreError};
use pensio_shared::JwtService;
use pensio_shared::jwt::JwtConfig;
use pensio_shared::types::{ContributionTypeId, PensionId, Period, SapId};

use crate::{AppState, create_router};

/// In-memory identity registry with fixed rows.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    /// Administrator rows.
    pub admins: Vec<AdminUser>,
    /// Member rows.
    pub members: Vec<Member>,
}

#[async_trait]
impl IdentityStore for FakeRegistry {
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError> {
        Ok(self.admins.iter().find(|a| a.email == email).cloned())
    }

    async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        Ok(self.members.iter().find(|m| m.email == email).cloned())
    }

    async fn find_member_by_sap_id(&self, sap_id: SapId) -> Result<Option<Member>, StoreError> {
        Ok(self.members.iter().find(|m| m.sap_id == sap_id).cloned())
    }
}

/// In-memory contribution ledger with fixed rows.
#[derive(Debug, Default)]
pub struct FakeLedger {
    /// Known contribution types, in statement account order.
    pub types: Vec<ContributionType>,
    /// Contribution rows, tagged with the type they were recorded under.
    pub rows: Vec<(ContributionTypeId, ContributionRecord)>,
    /// Computed-interest rows.
    pub interests: Vec<ComputedInterestRecord>,
}

#[async_trait]
impl ContributionStore for FakeLedger {
    async fn contribution_types(&self) -> Result<Vec<ContributionType>, StoreError> {
        Ok(self.types.clone())
    }

    async fn contributions_by_type(
        &self,
        sap_id: SapId,
        type_id: ContributionTypeId,
    ) -> Result<Vec<ContributionRecord>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|(tagged, row)| *tagged == type_id && row.sap_id == sap_id)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn contribution_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ContributionRecord>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|(_, row)| row.sap_id == sap_id)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn interest_history(
        &self,
        sap_id: SapId,
    ) -> Result<Vec<ComputedInterestRecord>, StoreError> {
        Ok(self
            .interests
            .iter()
            .filter(|row| row.sap_id == sap_id)
            .cloned()
            .collect())
    }
}

/// Builds one contribution row for the given member and type.
pub fn contribution(
    sap_id: i64,
    type_id: ContributionTypeId,
    type_name: &str,
    amount: Decimal,
    period: i32,
) -> (ContributionTypeId, ContributionRecord) {
    (
        type_id,
        ContributionRecord {
            sap_id: SapId::new(sap_id),
            amount: Some(amount),
            for_period: Some(Period::from_raw(period)),
            in_period: Some(Period::from_raw(period)),
            office_name: "Head Office".to_string(),
            contribution_type_name: type_name.to_string(),
        },
    )
}

/// Builds one computed-interest row.
pub fn interest(sap_id: i64, period: i32, amount: Decimal) -> ComputedInterestRecord {
    ComputedInterestRecord {
        sap_id: SapId::new(sap_id),
        period: Period::from_raw(period),
        interest: amount,
    }
}

/// Registry used by most tests: one administrator and two members.
pub fn reference_registry() -> FakeRegistry {
    FakeRegistry {
        admins: vec![AdminUser {
            id: 1,
            email: "admin@fund.example".to_string(),
        }],
        members: vec![
            Member {
                sap_id: SapId::new(1001),
                pension_id: Some(PensionId::new(900_101)),
                full_name: Some("Jane Pensioner".to_string()),
                email: "jane@fund.example".to_string(),
            },
            Member {
                sap_id: SapId::new(1002),
                pension_id: Some(PensionId::new(900_202)),
                full_name: Some("Sam Saver".to_string()),
                email: "sam@fund.example".to_string(),
            },
        ],
    }
}

/// Ledger used by most tests.
///
/// Member 1001 holds 100.00 employee and 50.00 employer contributions plus
/// 5.00 cumulative interest, so their TOTAL line closes at 155.00. Member
/// 1002 holds a single 999.00 employee contribution.
pub fn reference_ledger() -> FakeLedger {
    let employee = ContributionTypeId::new(1);
    let employer = ContributionTypeId::new(2);

    FakeLedger {
        types: vec![
            ContributionType {
                id: employee,
                name: "EMPLOYEE".to_string(),
            },
            ContributionType {
                id: employer,
                name: "EMPLOYER".to_string(),
            },
        ],
        rows: vec![
            contribution(1001, employee, "EMPLOYEE", dec!(100.00), 202_401),
            contribution(1001, employer, "EMPLOYER", dec!(50.00), 202_401),
            contribution(1002, employee, "EMPLOYEE", dec!(999.00), 202_403),
        ],
        interests: vec![
            interest(1001, 202_402, dec!(3.00)),
            interest(1001, 202_401, dec!(2.00)),
        ],
    }
}

/// Builds the portal router over the reference rows, returning the signing
/// service for minting request tokens.
pub fn portal() -> (Router, Arc<JwtService>) {
    portal_with(reference_registry(), reference_ledger())
}

/// Builds the portal router over custom registry and ledger rows.
pub fn portal_with(registry: FakeRegistry, ledger: FakeLedger) -> (Router, Arc<JwtService>) {
    let registry = Arc::new(registry);
    let ledger = Arc::new(ledger);
    let jwt_service = Arc::new(JwtService::new(JwtConfig::default()));

    let state = AppState {
        statements: Arc::new(StatementService::new(
            Arc::clone(&ledger) as Arc<dyn ContributionStore>,
            Arc::clone(&registry) as Arc<dyn IdentityStore>,
        )),
        access: Arc::new(AccessService::new(registry)),
        renderer: Arc::new(HtmlStatementRenderer),
        jwt_service: Arc::clone(&jwt_service),
    };

    (create_router(state), jwt_service)
}

/// Mints a bearer header value for the given login email.
///
/// # Panics
///
/// Panics if token generation fails.
pub fn bearer(jwt: &JwtService, email: &str) -> String {
    format!(
        "Bearer {}",
        jwt.generate_token(email).expect("should generate token")
    )
}
