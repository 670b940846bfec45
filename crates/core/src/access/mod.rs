//! Statement access resolution.
//!
//! Every request resolves the authenticated login email against the
//! registries to a role. The administrator registry wins when an email is in
//! both. The resolved role alone decides which member's statement a request
//! may be served for.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::AccessError;
pub use service::AccessService;
pub use types::{Resolution, Role};
