//! Contribution periods in YYYYMM form.
//!
//! Upstream systems record months as a single integer, e.g. `202405` for
//! May 2024. Periods stay in that encoding end to end; only presentation
//! formats them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an integer is not a well-formed YYYYMM period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a valid YYYYMM period")]
pub struct PeriodError(pub i32);

/// A contribution month encoded as YYYYMM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(i32);

impl Period {
    /// Creates a validated period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError` if the month part is outside 1..=12 or the year
    /// part is outside 1900..=9999.
    pub const fn new(raw: i32) -> Result<Self, PeriodError> {
        let year = raw / 100;
        let month = raw % 100;
        if month < 1 || month > 12 || year < 1900 || year > 9999 {
            return Err(PeriodError(raw));
        }
        Ok(Self(raw))
    }

    /// Wraps a raw stored value without validation.
    ///
    /// Registry rows predate validation; statements must still render them.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw YYYYMM encoding.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns the year part.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0 / 100
    }

    /// Returns the month part.
    #[must_use]
    pub const fn month(self) -> i32 {
        self.0 % 100
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(202_401, 2024, 1)]
    #[case(202_412, 2024, 12)]
    #[case(190_001, 1900, 1)]
    #[case(999_912, 9999, 12)]
    fn test_valid_periods(#[case] raw: i32, #[case] year: i32, #[case] month: i32) {
        let period = Period::new(raw).unwrap();
        assert_eq!(period.year(), year);
        assert_eq!(period.month(), month);
        assert_eq!(period.as_i32(), raw);
    }

    #[rstest]
    #[case(202_400)]
    #[case(202_413)]
    #[case(189_912)]
    #[case(0)]
    #[case(-202_405)]
    fn test_invalid_periods(#[case] raw: i32) {
        assert_eq!(Period::new(raw), Err(PeriodError(raw)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Period::new(202_405).unwrap().to_string(), "2024-05");
        assert_eq!(Period::new(199_912).unwrap().to_string(), "1999-12");
    }

    #[test]
    fn test_from_raw_skips_validation() {
        // Stored junk still round-trips instead of failing the statement.
        let period = Period::from_raw(202_499);
        assert_eq!(period.as_i32(), 202_499);
    }

    #[test]
    fn test_ordering_follows_encoding() {
        let earlier = Period::new(202_312).unwrap();
        let later = Period::new(202_401).unwrap();
        assert!(earlier < later);
    }
}
