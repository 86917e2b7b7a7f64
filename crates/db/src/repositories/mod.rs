//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any `PgExecutor`) as the first argument.

pub mod approval_repo;
pub mod booking_repo;
pub mod notification_repo;
pub mod order_repo;
pub mod product_repo;
pub mod review_repo;
pub mod user_repo;

pub use approval_repo::ApprovalRepo;
pub use booking_repo::BookingRepo;
pub use notification_repo::NotificationRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
