//! Admin approval workflow for pending orders and bookings.
//!
//! Orders and bookings share one transition: `pending -> <approved status>` or
//! `pending -> cancelled` with a reason. The per-table differences (table
//! name, approved status, notification wording) live in a [`TransitionTable`]
//! descriptor so the repository and handler code is written once.
//!
//! The outcome of a submission is an [`ApprovalOutcome`]. It travels back to
//! the approvals list in the redirect query string and is turned into a
//! user-visible [`Flash`] there, so no session state is kept between the
//! POST and the following GET.

use serde::{Deserialize, Serialize};

use crate::status::{BOOKING_CONFIRMED, ORDER_PROCESSING, STATUS_CANCELLED};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Form vocabulary
// ---------------------------------------------------------------------------

/// Which table a decision targets (`type` form field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalKind {
    Order,
    Booking,
}

impl ApprovalKind {
    /// Parse the `type` form value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "order" => Some(Self::Order),
            "booking" => Some(Self::Booking),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Booking => "booking",
        }
    }

    /// The descriptor for the table this kind lives in.
    pub fn table(self) -> &'static TransitionTable {
        match self {
            Self::Order => &ORDERS,
            Self::Booking => &BOOKINGS,
        }
    }
}

/// What the admin asked for (`action` form field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    /// Parse the `action` form value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table descriptors
// ---------------------------------------------------------------------------

/// Static description of a table that supports the pending-approval transition.
///
/// `table` is interpolated into SQL, so descriptors must only ever be the
/// compile-time constants below.
#[derive(Debug)]
pub struct TransitionTable {
    /// SQL table name.
    pub table: &'static str,
    /// Human-readable entity name used in errors and logs.
    pub entity: &'static str,
    /// Value written to `notifications.related_type`.
    pub related_type: &'static str,
    /// Status written on approval.
    pub approved_status: &'static str,
    /// Status written on rejection.
    pub rejected_status: &'static str,
    pub approved_title: &'static str,
    pub approved_body: &'static str,
    pub rejected_title: &'static str,
    /// Rejection body; the admin's reason is appended.
    pub rejected_body_prefix: &'static str,
}

impl TransitionTable {
    /// Notification body sent to the owner of a rejected row.
    pub fn rejected_body(&self, reason: &str) -> String {
        format!("{}{reason}", self.rejected_body_prefix)
    }
}

/// Orders move to `processing` when approved.
pub static ORDERS: TransitionTable = TransitionTable {
    table: "orders",
    entity: "Order",
    related_type: "order",
    approved_status: ORDER_PROCESSING,
    rejected_status: STATUS_CANCELLED,
    approved_title: "Order Approved",
    approved_body: "Your order has been approved and is now being processed!",
    rejected_title: "Order Rejected",
    rejected_body_prefix: "Your order has been rejected. Reason: ",
};

/// Bookings move to `confirmed` when approved.
pub static BOOKINGS: TransitionTable = TransitionTable {
    table: "bookings",
    entity: "Booking",
    related_type: "booking",
    approved_status: BOOKING_CONFIRMED,
    rejected_status: STATUS_CANCELLED,
    approved_title: "Booking Approved",
    approved_body: "Your booking has been approved!",
    rejected_title: "Booking Rejected",
    rejected_body_prefix: "Your booking has been rejected. Reason: ",
};

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// Approve, or reject with a non-empty reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject { reason: String },
}

/// A validated approval submission, built by [`Decision::from_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub kind: ApprovalKind,
    pub id: DbId,
    pub verdict: Verdict,
}

impl Decision {
    /// Validate raw form values.
    ///
    /// The id must be a positive integer and `type`/`action` must be known
    /// values, otherwise [`ApprovalOutcome::InvalidRequest`]. A rejection
    /// whose reason is empty after trimming yields
    /// [`ApprovalOutcome::ReasonRequired`].
    pub fn from_form(
        kind: Option<&str>,
        id: Option<&str>,
        action: Option<&str>,
        reason: Option<&str>,
    ) -> Result<Self, ApprovalOutcome> {
        let id = id
            .and_then(|raw| raw.trim().parse::<DbId>().ok())
            .filter(|id| *id > 0)
            .ok_or(ApprovalOutcome::InvalidRequest)?;
        let kind = kind
            .and_then(ApprovalKind::parse)
            .ok_or(ApprovalOutcome::InvalidRequest)?;
        let action = action
            .and_then(ApprovalAction::parse)
            .ok_or(ApprovalOutcome::InvalidRequest)?;

        let verdict = match action {
            ApprovalAction::Approve => Verdict::Approve,
            ApprovalAction::Reject => {
                let reason = reason.map(str::trim).unwrap_or_default();
                if reason.is_empty() {
                    return Err(ApprovalOutcome::ReasonRequired);
                }
                Verdict::Reject {
                    reason: reason.to_string(),
                }
            }
        };

        Ok(Self { kind, id, verdict })
    }

    pub fn table(&self) -> &'static TransitionTable {
        self.kind.table()
    }

    /// Status the row moves to if it is still pending.
    pub fn target_status(&self) -> &'static str {
        match self.verdict {
            Verdict::Approve => self.table().approved_status,
            Verdict::Reject { .. } => self.table().rejected_status,
        }
    }

    /// Value stored in `status_message`: the reason for rejections.
    pub fn status_message(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Approve => None,
            Verdict::Reject { reason } => Some(reason),
        }
    }

    /// Title and body of the notification sent to the row's owner.
    pub fn notification(&self) -> (&'static str, String) {
        let table = self.table();
        match &self.verdict {
            Verdict::Approve => (table.approved_title, table.approved_body.to_string()),
            Verdict::Reject { reason } => (table.rejected_title, table.rejected_body(reason)),
        }
    }

    /// Outcome reported when the transition was applied.
    pub fn applied_outcome(&self) -> ApprovalOutcome {
        match (self.kind, &self.verdict) {
            (ApprovalKind::Order, Verdict::Approve) => ApprovalOutcome::OrderApproved,
            (ApprovalKind::Order, Verdict::Reject { .. }) => ApprovalOutcome::OrderRejected,
            (ApprovalKind::Booking, Verdict::Approve) => ApprovalOutcome::BookingApproved,
            (ApprovalKind::Booking, Verdict::Reject { .. }) => ApprovalOutcome::BookingRejected,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes and flash messages
// ---------------------------------------------------------------------------

/// Result of one approval submission, carried as `?flash=<value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalOutcome {
    OrderApproved,
    OrderRejected,
    BookingApproved,
    BookingRejected,
    /// Missing id or unknown type/action.
    InvalidRequest,
    /// Rejection submitted without a reason.
    ReasonRequired,
    /// The row does not exist or already left `pending`.
    NotPending,
    /// A statement failed; details are logged, not shown.
    PersistenceFailed,
}

impl ApprovalOutcome {
    const ALL: [Self; 8] = [
        Self::OrderApproved,
        Self::OrderRejected,
        Self::BookingApproved,
        Self::BookingRejected,
        Self::InvalidRequest,
        Self::ReasonRequired,
        Self::NotPending,
        Self::PersistenceFailed,
    ];

    /// Parse a `?flash=` value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|outcome| outcome.as_str() == value)
    }

    /// Query-string value; matches the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OrderApproved => "order_approved",
            Self::OrderRejected => "order_rejected",
            Self::BookingApproved => "booking_approved",
            Self::BookingRejected => "booking_rejected",
            Self::InvalidRequest => "invalid_request",
            Self::ReasonRequired => "reason_required",
            Self::NotPending => "not_pending",
            Self::PersistenceFailed => "persistence_failed",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            Self::OrderApproved | Self::OrderRejected | Self::BookingApproved | Self::BookingRejected
        )
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::OrderApproved => {
                "Order approved successfully. It has been removed from pending list."
            }
            Self::OrderRejected => "Order rejected. It has been removed from pending list.",
            Self::BookingApproved => "Booking approved successfully.",
            Self::BookingRejected => "Booking rejected.",
            Self::InvalidRequest => "Invalid approval request.",
            Self::ReasonRequired => "Rejection reason is required.",
            Self::NotPending => "This request is no longer pending. No changes were made.",
            Self::PersistenceFailed => "Failed to update the request. Please try again.",
        }
    }

    pub fn flash(self) -> Flash {
        Flash {
            kind: if self.is_success() {
                FlashKind::Success
            } else {
                FlashKind::Error
            },
            message: self.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// A one-shot message shown above the approvals list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: &'static str,
}
