//! Row models and input DTOs, one module per table.

pub mod approval;
pub mod booking;
pub mod notification;
pub mod order;
pub mod product;
pub mod review;
pub mod user;
