//! Identity-to-role resolution.

use std::sync::Arc;

use super::error::AccessError;
use super::types::Resolution;
use crate::store::IdentityStore;

/// Resolves authenticated identities to portal roles.
pub struct AccessService {
    identities: Arc<dyn IdentityStore>,
}

impl AccessService {
    /// Creates a service over the given identity store.
    #[must_use]
    pub fn new(identities: Arc<dyn IdentityStore>) -> Self {
        Self { identities }
    }

    /// Resolves a login email to a portal role.
    ///
    /// The administrator registry is consulted first, so an email present in
    /// both registries resolves as an administrator. Lookups use the
    /// normalized form of the email (trimmed, lowercased), matching how the
    /// login boundary records identities.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IdentityNotFound` when the email is in neither
    /// registry, and `AccessError::Store` if a lookup fails.
    pub async fn resolve(&self, email: &str) -> Result<Resolution, AccessError> {
        let email = normalize_email(email);

        if let Some(admin) = self.identities.find_admin_by_email(&email).await? {
            return Ok(Resolution::Admin(admin));
        }

        if let Some(member) = self.identities.find_member_by_email(&email).await? {
            return Ok(Resolution::Pensioner(member));
        }

        Err(AccessError::IdentityNotFound(email))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
