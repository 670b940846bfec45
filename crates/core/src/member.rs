//! Member and administrator profiles.

use pensio_shared::types::{PensionId, SapId};
use serde::{Deserialize, Serialize};

/// A pension-fund member as loaded from the member registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// SAP identifier; the key all contribution data is recorded under.
    pub sap_id: SapId,
    /// Pension identifier, absent on legacy rows.
    pub pension_id: Option<PensionId>,
    /// Full display name, absent on legacy rows.
    pub full_name: Option<String>,
    /// Login email the identity resolution matches against.
    pub email: String,
}

/// An administrative user allowed to look up any member's statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Registry row identifier.
    pub id: i64,
    /// Login email the identity resolution matches against.
    pub email: String,
}
