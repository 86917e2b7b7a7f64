//! Domain constants, descriptors and pure validation for the Reboot shop.
//!
//! Nothing in this crate touches the database or HTTP, so it is shared by the
//! repository layer, the API server and their tests.

pub mod approval;
pub mod catalog;
pub mod error;
pub mod money;
pub mod review;
pub mod roles;
pub mod status;
pub mod types;
