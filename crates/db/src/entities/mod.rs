//! `SeaORM` entity definitions for the pension registries.

pub mod admin_users;
pub mod computed_interests;
pub mod contribution_types;
pub mod contributions;
pub mod members;
pub mod offices;
