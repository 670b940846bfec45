//! Statement export as a downloadable document.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{error, info};

use pensio_core::statement::StatementError;

use crate::AppState;
use crate::middleware::auth::AuthIdentity;
use crate::routes::statement::{StatementQuery, internal_error, resolve_target};

/// Creates the export router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/statement/export", get(export_statement))
}

/// GET /statement/export - Rendered statement document as an attachment.
///
/// Target resolution follows the same policy as the statement endpoint, so a
/// pensioner always downloads their own statement.
async fn export_statement(
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
            let document = state.renderer.render(&bundle);
            info!(sap_id = %target, role = %role, file_name = %document.file_name, "Statement exported");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", document.file_name),
                    ),
                ],
                document.body,
            )
                .into_response()
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
