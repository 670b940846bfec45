//! Statement aggregation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pensio_shared::types::{PensionId, SapId};
use rust_decimal::Decimal;

use super::error::StatementError;
use super::types::{
    Account, ComputedInterestRecord, ContributionRecord, ContributionType,
    CUMULATIVE_INTERESTS_ACCOUNT, Statement, StatementBundle, TOTAL_ACCOUNT,
};
use crate::member::Member;
use crate::store::{ContributionStore, IdentityStore};

/// Produces statements by reading raw rows through the injected stores and
/// folding them into accounts.
pub struct StatementService {
    contributions: Arc<dyn ContributionStore>,
    identities: Arc<dyn IdentityStore>,
}

impl StatementService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(
        contributions: Arc<dyn ContributionStore>,
        identities: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            contributions,
            identities,
        }
    }

    /// Aggregates the statement bundle for a known member.
    ///
    /// Absent rows are not an error: a member with no contributions and no
    /// interest gets an all-zero statement with the synthesized accounts
    /// still present.
    ///
    /// # Errors
    ///
    /// Returns `StatementError::Store` if any row fetch fails.
    pub async fn generate(&self, member: &Member) -> Result<StatementBundle, StatementError> {
        let types = self.contributions.contribution_types().await?;

        let mut per_type = Vec::with_capacity(types.len());
        for contribution_type in types {
            let records = self
                .contributions
                .contributions_by_type(member.sap_id, contribution_type.id)
                .await?;
            per_type.push((contribution_type, records));
        }

        let contributions = self.contributions.contribution_history(member.sap_id).await?;
        let computed_interests = self.contributions.interest_history(member.sap_id).await?;

        Ok(build_bundle(
            member,
            Utc::now(),
            per_type,
            contributions,
            computed_interests,
        ))
    }

    /// Looks up the member behind a SAP ID, then aggregates their bundle.
    ///
    /// This is the single aggregation entry point for callers that only hold
    /// an identifier; it shares the fold with [`Self::generate`].
    ///
    /// # Errors
    ///
    /// Returns `StatementError::MemberNotFound` if the SAP ID has no member
    /// row, and `StatementError::Store` if any row fetch fails.
    pub async fn generate_by_sap_id(
        &self,
        sap_id: SapId,
    ) -> Result<StatementBundle, StatementError> {
        let member = self
            .identities
            .find_member_by_sap_id(sap_id)
            .await?
            .ok_or(StatementError::MemberNotFound(sap_id))?;

        self.generate(&member).await
    }
}

/// Folds pre-fetched rows into a statement bundle.
///
/// Pure and synchronous; all ordering comes from the inputs (contribution
/// types in enumeration order, histories most recent first).
#[must_use]
pub fn build_bundle(
    member: &Member,
    as_of: DateTime<Utc>,
    per_type: Vec<(ContributionType, Vec<ContributionRecord>)>,
    contributions: Vec<ContributionRecord>,
    computed_interests: Vec<ComputedInterestRecord>,
) -> StatementBundle {
    let mut statement = Statement {
        employee_full_name: member.full_name.clone().unwrap_or_default(),
        as_of,
        employee_id: member.sap_id,
        pension_id: member.pension_id.unwrap_or(PensionId::new(0)),
        accounts: Vec::with_capacity(per_type.len() + 2),
    };
    let mut total = Account::new(TOTAL_ACCOUNT);

    for (contribution_type, records) in per_type {
        let mut account = Account::new(contribution_type.name);
        account.balance = sum_amounts(&records);
        account.closing_balance = account.balance + account.interest + account.withdrawals;

        total.balance += account.balance;
        total.interest += account.interest;
        total.withdrawals += account.withdrawals;
        total.closing_balance += account.closing_balance;

        statement.accounts.push(account);
    }

    let mut cumulative = Account::new(CUMULATIVE_INTERESTS_ACCOUNT);
    cumulative.balance = computed_interests.iter().map(|row| row.interest).sum();
    cumulative.closing_balance = cumulative.balance;

    // The cumulative balance lands in the balance, interest, and closing
    // columns of the total line. Issued statements carry exactly this shape.
    total.balance += cumulative.balance;
    total.interest += cumulative.balance;
    total.closing_balance += cumulative.balance;

    statement.accounts.push(cumulative);
    statement.accounts.push(total.clone());

    StatementBundle {
        statement,
        total,
        contributions,
        computed_interests,
    }
}

fn sum_amounts(records: &[ContributionRecord]) -> Decimal {
    records
        .iter()
        .map(|row| row.amount.unwrap_or(Decimal::ZERO))
        .sum()
}
