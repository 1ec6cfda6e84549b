//! Order lifecycle domain module.
//!
//! Pure decision logic over the order status enumeration: which status changes
//! are legal, which orders may be cancelled or returned, and how each status is
//! presented. No IO, no storage; the order record belongs to the caller.

pub mod policy;
pub mod status;
pub mod summary;
pub mod transition;

pub use policy::{
    DEFAULT_STATUS_COLOR, can_cancel_order, can_request_return, is_valid_transition,
    next_possible_statuses, status_color, status_display_text,
};
pub use status::OrderStatus;
pub use summary::StatusSummary;
pub use transition::{
    OrderId, StatusChanged, TransitionError, ensure_transition, plan_status_change,
};
