//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `SapId` where an
//! `OfficeId` is expected. All registry keys are plain integers upstream, so
//! the wrappers are `i64`-backed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a well-formed numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a numeric identifier: {value:?}")]
pub struct ParseIdError {
    /// The rejected input.
    pub value: String,
}

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw numeric value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the inner numeric value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| ParseIdError {
                    value: s.to_string(),
                })
            }
        }
    };
}

typed_id!(
    SapId,
    "SAP identifier of a member; the key all contribution data is recorded under."
);
typed_id!(PensionId, "Pension identifier printed on statements.");
typed_id!(OfficeId, "Unique identifier for a recording office.");
typed_id!(
    ContributionTypeId,
    "Unique identifier for a contribution type."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_creation() {
        let id = SapId::new(1001);
        assert_eq!(id.into_inner(), 1001);
    }

    #[test]
    fn test_typed_id_display() {
        let id = SapId::new(1001);
        assert_eq!(format!("{}", id), "1001");
    }

    #[test]
    fn test_typed_id_from_str() {
        let id = SapId::from_str("1001").unwrap();
        assert_eq!(id.into_inner(), 1001);
    }

    #[test]
    fn test_typed_id_from_str_trims_whitespace() {
        let id = SapId::from_str(" 1001 ").unwrap();
        assert_eq!(id.into_inner(), 1001);
    }

    #[test]
    fn test_typed_id_from_str_error() {
        let err = SapId::from_str("abc").unwrap_err();
        assert_eq!(err.value, "abc");
        assert!(SapId::from_str("10.5").is_err());
        assert!(SapId::from_str("").is_err());
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let id = PensionId::new(900_123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "900123");

        let back: PensionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_distinct_id_types_are_distinct() {
        // Compile-time property really, but pin the runtime shape too.
        let sap = SapId::new(7);
        let office = OfficeId::new(7);
        assert_eq!(sap.into_inner(), office.into_inner());
    }
}
