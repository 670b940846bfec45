//! Statement domain types.

use chrono::{DateTime, Utc};
use pensio_shared::types::{ContributionTypeId, PensionId, Period, SapId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account name of the synthesized interest rollup line.
pub const CUMULATIVE_INTERESTS_ACCOUNT: &str = "CUMULATIVE INTERESTS";

/// Account name of the synthesized grand-total line.
pub const TOTAL_ACCOUNT: &str = "TOTAL";

/// A category of pension contribution (e.g. employee or employer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionType {
    /// Type identifier.
    pub id: ContributionTypeId,
    /// Display name, reused as the statement account name.
    pub name: String,
}

/// One raw contribution row as recorded for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Member the contribution was recorded for.
    pub sap_id: SapId,
    /// Contributed amount; absent amounts count as zero.
    pub amount: Option<Decimal>,
    /// Month the contribution is for.
    pub for_period: Option<Period>,
    /// Month the contribution was recorded in.
    pub in_period: Option<Period>,
    /// Name of the office that recorded the row; empty when unknown.
    pub office_name: String,
    /// Contribution-type display name; empty when unknown.
    pub contribution_type_name: String,
}

/// One computed-interest row for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedInterestRecord {
    /// Member the interest was computed for.
    pub sap_id: SapId,
    /// Month the interest applies to.
    pub period: Period,
    /// Interest amount for that month.
    pub interest: Decimal,
}

/// A named ledger line inside a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account display name.
    pub name: String,
    /// Sum of contribution amounts; for the interest rollup line, the sum of
    /// interest rows.
    pub balance: Decimal,
    /// Interest column; non-zero only on the TOTAL line.
    pub interest: Decimal,
    /// Withdrawals column; no withdrawal source exists upstream, so this is
    /// always zero.
    pub withdrawals: Decimal,
    /// Closing balance for the line.
    pub closing_balance: Decimal,
}

impl Account {
    /// Creates an all-zero account line with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: Decimal::ZERO,
            interest: Decimal::ZERO,
            withdrawals: Decimal::ZERO,
            closing_balance: Decimal::ZERO,
        }
    }
}

/// A member's aggregated statement at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Member full name; empty when the registry has none.
    pub employee_full_name: String,
    /// Evaluation timestamp of the aggregation.
    pub as_of: DateTime<Utc>,
    /// Member SAP ID.
    pub employee_id: SapId,
    /// Member pension ID; zero when the registry has none.
    pub pension_id: PensionId,
    /// Per-type accounts, then CUMULATIVE INTERESTS, then TOTAL.
    pub accounts: Vec<Account>,
}

/// The full aggregation result for one statement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementBundle {
    /// The assembled statement.
    pub statement: Statement,
    /// Copy of the TOTAL account for direct consumption by presenters.
    pub total: Account,
    /// Full contribution history, most recent for-period first.
    pub contributions: Vec<ContributionRecord>,
    /// Full computed-interest history, most recent period first.
    pub computed_interests: Vec<ComputedInterestRecord>,
}
