//! Status vocabularies for `orders` and `bookings`.
//!
//! The values mirror the check constraints in `db/migrations`. Both tables
//! start every row in [`STATUS_PENDING`] and share [`STATUS_CANCELLED`] as the
//! rejected state.

/// Initial state of every order and booking.
pub const STATUS_PENDING: &str = "pending";

/// Terminal state for rejected orders and bookings.
pub const STATUS_CANCELLED: &str = "cancelled";

/// Order accepted by an admin and being prepared.
pub const ORDER_PROCESSING: &str = "processing";
pub const ORDER_SHIPPED: &str = "shipped";
pub const ORDER_DELIVERED: &str = "delivered";

/// Booking accepted by an admin.
pub const BOOKING_CONFIRMED: &str = "confirmed";
pub const BOOKING_COMPLETED: &str = "completed";

pub const ORDER_STATUSES: &[&str] = &[
    STATUS_PENDING,
    ORDER_PROCESSING,
    ORDER_SHIPPED,
    ORDER_DELIVERED,
    STATUS_CANCELLED,
];

pub const BOOKING_STATUSES: &[&str] = &[
    STATUS_PENDING,
    BOOKING_CONFIRMED,
    BOOKING_COMPLETED,
    STATUS_CANCELLED,
];

/// Whether an order in `status` may be reviewed by its owner.
///
/// Orders that were never approved (still pending) or were rejected cannot
/// carry a review.
pub fn order_is_reviewable(status: &str) -> bool {
    status != STATUS_PENDING && status != STATUS_CANCELLED && ORDER_STATUSES.contains(&status)
}
