//! Statement routes for the authenticated portal.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use pensio_core::access::{AccessError, Resolution, Role};
use pensio_core::render::format_amount;
use pensio_core::statement::{Account, StatementBundle, StatementError};
use pensio_shared::types::SapId;

use crate::AppState;
use crate::middleware::auth::AuthIdentity;

/// Creates the statement router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/statement", get(get_statement))
}

/// Query parameters accepted by the statement endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct StatementQuery {
    /// Target member SAP ID. Administrators must supply it; for pensioners it
    /// is ignored.
    pub sap_id: Option<String>,
}

/// One statement account line with presentation-rounded amounts.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account display name.
    pub name: String,
    /// Account balance.
    pub balance: String,
    /// Interest column.
    pub interest: String,
    /// Withdrawals column.
    pub withdrawals: String,
    /// Closing balance.
    pub closing_balance: String,
}

/// The aggregated statement.
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    /// Member full name; empty when the registry has none.
    pub employee_full_name: String,
    /// Evaluation timestamp, RFC 3339.
    pub as_of: String,
    /// Member SAP ID.
    pub employee_id: i64,
    /// Member pension ID; zero when the registry has none.
    pub pension_id: i64,
    /// Per-type accounts, then CUMULATIVE INTERESTS, then TOTAL.
    pub accounts: Vec<AccountResponse>,
}

/// One contribution history row.
#[derive(Debug, Serialize)]
pub struct ContributionResponse {
    /// Contributed amount; zero when the row has none.
    pub amount: String,
    /// Month the contribution is for.
    pub for_period: Option<String>,
    /// Month the contribution was recorded in.
    pub in_period: Option<String>,
    /// Recording office name; empty when unknown.
    pub office: String,
    /// Contribution-type name; empty when unknown.
    pub contribution_type: String,
}

/// One computed-interest history row.
#[derive(Debug, Serialize)]
pub struct InterestResponse {
    /// Month the interest applies to.
    pub period: String,
    /// Interest amount.
    pub interest: String,
}

/// Full response body of the statement endpoint.
#[derive(Debug, Serialize)]
pub struct StatementBundleResponse {
    /// Role the request was served under.
    pub role: Role,
    /// The aggregated statement.
    pub statement: StatementResponse,
    /// Copy of the TOTAL account.
    pub total: AccountResponse,
    /// Full contribution history, most recent for-period first.
    pub contributions: Vec<ContributionResponse>,
    /// Full computed-interest history, most recent period first.
    pub computed_interests: Vec<InterestResponse>,
}

/// Response body of the profile endpoint.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Login email of the resolved identity.
    pub email: String,
    /// Resolved portal role.
    pub role: Role,
    /// Member SAP ID; absent for administrators.
    pub sap_id: Option<i64>,
    /// Member full name; absent for administrators and legacy rows.
    pub full_name: Option<String>,
}

fn account_response(account: &Account) -> AccountResponse {
    AccountResponse {
        name: account.name.clone(),
        balance: format_amount(account.balance),
        interest: format_amount(account.interest),
        withdrawals: format_amount(account.withdrawals),
        closing_balance: format_amount(account.closing_balance),
    }
}

fn bundle_response(role: Role, bundle: &StatementBundle) -> StatementBundleResponse {
    StatementBundleResponse {
        role,
        statement: StatementResponse {
            employee_full_name: bundle.statement.employee_full_name.clone(),
            as_of: bundle.statement.as_of.to_rfc3339(),
            employee_id: bundle.statement.employee_id.into_inner(),
            pension_id: bundle.statement.pension_id.into_inner(),
            accounts: bundle.statement.accounts.iter().map(account_response).collect(),
        },
        total: account_response(&bundle.total),
        contributions: bundle
            .contributions
            .iter()
            .map(|row| ContributionResponse {
                amount: format_amount(row.amount.unwrap_or_default()),
                for_period: row.for_period.map(|p| p.to_string()),
                in_period: row.in_period.map(|p| p.to_string()),
                office: row.office_name.clone(),
                contribution_type: row.contribution_type_name.clone(),
            })
            .collect(),
        computed_interests: bundle
            .computed_interests
            .iter()
            .map(|row| InterestResponse {
                period: row.period.to_string(),
                interest: format_amount(row.interest),
            })
            .collect(),
    }
}

pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred while processing the request"
        })),
    )
        .into_response()
}

/// Parses the optional SAP ID parameter, resolves the caller's role, and
/// applies the statement-target policy.
///
/// A malformed identifier is rejected before any registry lookup happens,
/// whatever the caller's role would have been.
pub(crate) async fn resolve_target(
    state: &AppState,
    identity: &str,
    requested: Option<&str>,
) -> Result<(Role, SapId), Response> {
    let requested = match requested.map(SapId::from_str).transpose() {
        Ok(parsed) => parsed,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_identifier",
                    "message": "sap_id must be a numeric identifier"
                })),
            )
                .into_response());
        }
    };

    let resolution = match state.access.resolve(identity).await {
        Ok(resolution) => resolution,
        Err(AccessError::IdentityNotFound(email)) => {
            info!(email = %email, "Identity has no portal role");
            return Err((
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": "no_role",
                    "message": "No portal role is associated with this identity"
                })),
            )
                .into_response());
        }
        Err(AccessError::Store(e)) => {
            error!(error = %e, "Registry lookup failed");
            return Err(internal_error());
        }
    };

    let role = resolution.role();
    match resolution.statement_target(requested) {
        Some(target) => Ok((role, target)),
        None => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_target",
                "message": "sap_id query parameter is required for administrators"
            })),
        )
            .into_response()),
    }
}

/// GET /me - Profile and role of the authenticated identity.
async fn me(State(state): State<AppState>, identity: AuthIdentity) -> Response {
    match state.access.resolve(identity.identity()).await {
        Ok(Resolution::Admin(admin)) => (
            StatusCode::OK,
            Json(MeResponse {
                email: admin.email,
                role: Role::Admin,
                sap_id: None,
                full_name: None,
            }),
        )
            .into_response(),
        Ok(Resolution::Pensioner(member)) => (
            StatusCode::OK,
            Json(MeResponse {
                email: member.email,
                role: Role::Pensioner,
                sap_id: Some(member.sap_id.into_inner()),
                full_name: member.full_name,
            }),
        )
            .into_response(),
        Err(AccessError::IdentityNotFound(email)) => {
            info!(email = %email, "Identity has no portal role");
            (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": "no_role",
                    "message": "No portal role is associated with this identity"
                })),
            )
                .into_response()
        }
        Err(AccessError::Store(e)) => {
            error!(error = %e, "Registry lookup failed");
            internal_error()
        }
    }
}

/// GET /statement - Aggregated statement for the resolved target member.
async fn get_statement(
    State(state): State<AppState>,
    identity: AuthIdentity,
    Query(query): Query<StatementQuery>,
) -> Response {
    let (role, target) =
        match resolve_target(&state, identity.identity(), query.sap_id.as_deref()).await {
            Ok(pair) => pair,
            Err(response) => return response,
        };

    match state.statements.generate_by_sap_id(target).await {
        Ok(bundle) => {
            info!(sap_id = %target, role = %role, "Statement aggregated");
            (StatusCode::OK, Json(bundle_response(role, &bundle))).into_response()
        }
        Err(StatementError::MemberNotFound(sap_id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "statement_not_found",
                "message": format!("No pension statement found for SAP ID {sap_id}")
            })),
        )
            .into_response(),
        Err(StatementError::Store(e)) => {
            error!(error = %e, "Statement aggregation failed");
            internal_error()
        }
    }
}
