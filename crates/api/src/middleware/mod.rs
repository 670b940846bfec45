//! Request middleware.

pub mod auth;

pub use auth::{AuthIdentity, auth_middleware};
