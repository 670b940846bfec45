//! Access-resolution types.

use pensio_shared::types::SapId;
use serde::{Deserialize, Serialize};

use crate::member::{AdminUser, Member};

/// Role attached to a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unrestricted statement lookup by SAP ID.
    Admin,
    /// Restricted to the identity's own statement.
    Pensioner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Pensioner => write!(f, "pensioner"),
        }
    }
}

/// Outcome of resolving an authenticated identity against the registries.
///
/// Each variant carries the registry row it was resolved from, so callers
/// never re-fetch the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identity is an administrator; statement targets come from the
    /// request.
    Admin(AdminUser),
    /// The identity is a member; the only statement target is their own.
    Pensioner(Member),
}

impl Resolution {
    /// Returns the role of the resolved identity.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Admin(_) => Role::Admin,
            Self::Pensioner(_) => Role::Pensioner,
        }
    }

    /// Chooses the SAP ID a statement request may be served for.
    ///
    /// Administrators read the requested value. A pensioner's own SAP ID is
    /// used unconditionally, so a supplied parameter can never redirect a
    /// pensioner to another member's data.
    #[must_use]
    pub fn statement_target(&self, requested: Option<SapId>) -> Option<SapId> {
        match self {
            Self::Admin(_) => requested,
            Self::Pensioner(member) => Some(member.sap_id),
        }
    }
}
