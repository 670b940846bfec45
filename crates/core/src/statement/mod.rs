//! Pension statement aggregation.
//!
//! A statement is a pure rollup of raw registry rows: one account per
//! contribution type, a synthesized CUMULATIVE INTERESTS account, and a
//! synthesized TOTAL account, in that order. Nothing here is persisted;
//! every request recomputes from the rows.

pub mod error;
pub mod service;
pub mod types;


pub use error::StatementError;
pub use service::{StatementService, build_bundle};
pub use types::*;
