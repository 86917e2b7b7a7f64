//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in the initial migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";
