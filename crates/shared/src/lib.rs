//! Shared types, errors, and configuration for Pensio.
//!
//! This crate provides common types used across all other crates:
//! - Typed numeric IDs for type-safe member and reference-data keys
//! - Contribution periods in YYYYMM form
//! - Session token (JWT) handling
//! - Configuration management

pub mod config;
pub mod jwt;
pub mod types;

pub use config::AppConfig;
pub use jwt::{Claims, JwtService};
