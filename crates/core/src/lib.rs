//! Core business logic for Pensio.
//!
//! This crate contains the pure domain of the pension portal:
//! - Statement aggregation over raw contribution and interest rows
//! - Identity-to-role resolution and statement access policy
//! - Statement presentation (renderers for the export endpoint)
//! - Narrow store traits the persistence layer implements
//!
//! Everything here is exercised through constructor-injected collaborators;
//! there is no web or database code in this crate.

pub mod access;
pub mod member;
pub mod render;
pub mod statement;
pub mod store;
