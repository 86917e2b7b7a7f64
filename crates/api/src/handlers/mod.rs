pub mod approval;
pub mod auth;
pub mod booking;
pub mod notification;
pub mod review;
pub mod shop;
