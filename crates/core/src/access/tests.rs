//! Tests for identity resolution and the statement-target policy.

use std::sync::Arc;

use mockall::predicate;
use rstest::rstest;

use pensio_shared::types::{PensionId, SapId};

use super::service::AccessService;
use super::types::{Resolution, Role};
use crate::access::AccessError;
use crate::member::{AdminUser, Member};
use crate::store::{IdentityStore, MockIdentityStore};

fn admin() -> AdminUser {
    AdminUser {
        id: 1,
        email: "admin@fund.example".to_string(),
    }
}

fn member() -> Member {
    Member {
        sap_id: SapId::new(1001),
        pension_id: Some(PensionId::new(900_101)),
        full_name: Some("Jane Pensioner".to_string()),
        email: "jane@fund.example".to_string(),
    }
}

fn service(identities: MockIdentityStore) -> AccessService {
    AccessService::new(Arc::new(identities) as Arc<dyn IdentityStore>)
}

#[tokio::test]
async fn test_admin_email_resolves_as_admin() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_admin_by_email()
        .with(predicate::eq("admin@fund.example"))
        .returning(|_| Ok(Some(admin())));

    let resolution = service(identities)
        .resolve("admin@fund.example")
        .await
        .unwrap();

    assert_eq!(resolution.role(), Role::Admin);
}

#[tokio::test]
async fn test_member_email_resolves_as_pensioner() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_admin_by_email()
        .returning(|_| Ok(None));
    identities
        .expect_find_member_by_email()
        .with(predicate::eq("jane@fund.example"))
        .returning(|_| Ok(Some(member())));

    let resolution = service(identities)
        .resolve("jane@fund.example")
        .await
        .unwrap();

    assert_eq!(resolution.role(), Role::Pensioner);
    assert!(matches!(
        resolution,
        Resolution::Pensioner(profile) if profile.sap_id == SapId::new(1001)
    ));
}

/// An email present in both registries resolves as administrator; the member
/// registry is not even consulted.
#[tokio::test]
async fn test_admin_registry_takes_precedence() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_admin_by_email()
        .returning(|_| Ok(Some(admin())));
    identities.expect_find_member_by_email().never();

    let resolution = service(identities)
        .resolve("admin@fund.example")
        .await
        .unwrap();

    assert_eq!(resolution.role(), Role::Admin);
}

#[tokio::test]
async fn test_unknown_email_has_no_role() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_admin_by_email()
        .returning(|_| Ok(None));
    identities
        .expect_find_member_by_email()
        .returning(|_| Ok(None));

    let err = service(identities)
        .resolve("stranger@fund.example")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AccessError::IdentityNotFound(email) if email == "stranger@fund.example"
    ));
}

/// Lookups run on the normalized email, not the raw header value.
#[tokio::test]
async fn test_email_normalized_before_lookup() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_admin_by_email()
        .with(predicate::eq("admin@fund.example"))
        .returning(|_| Ok(Some(admin())));

    let resolution = service(identities)
        .resolve("  Admin@Fund.EXAMPLE  ")
        .await
        .unwrap();

    assert_eq!(resolution.role(), Role::Admin);
}

// ============================================================================
// Statement-target policy
// ============================================================================

#[rstest]
#[case(Some(SapId::new(2002)), Some(SapId::new(2002)))]
#[case(None, None)]
fn test_admin_target_follows_request(
    #[case] requested: Option<SapId>,
    #[case] expected: Option<SapId>,
) {
    let resolution = Resolution::Admin(admin());
    assert_eq!(resolution.statement_target(requested), expected);
}

#[rstest]
#[case(Some(SapId::new(2002)))]
#[case(Some(SapId::new(1001)))]
#[case(None)]
fn test_pensioner_target_is_always_their_own(#[case] requested: Option<SapId>) {
    let resolution = Resolution::Pensioner(member());
    assert_eq!(
        resolution.statement_target(requested),
        Some(SapId::new(1001))
    );
}

#[test]
fn test_role_display() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Pensioner.to_string(), "pensioner");
}
