use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// Order status lifecycle.
///
/// Declaration order is significant: transition rows and listings follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
    ReturnRequested,
    ReturnApproved,
    ReturnPicked,
    Refunded,
}

use OrderStatus::*;

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [OrderStatus; 11] = [
        Pending,
        Confirmed,
        Processing,
        Shipped,
        OutForDelivery,
        Delivered,
        Cancelled,
        ReturnRequested,
        ReturnApproved,
        ReturnPicked,
        Refunded,
    ];

    /// Status assigned to a newly created order.
    pub const INITIAL: OrderStatus = Pending;

    /// Persisted text token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Pending => "pending",
            Confirmed => "confirmed",
            Processing => "processing",
            Shipped => "shipped",
            OutForDelivery => "out_for_delivery",
            Delivered => "delivered",
            Cancelled => "cancelled",
            ReturnRequested => "return_requested",
            ReturnApproved => "return_approved",
            ReturnPicked => "return_picked",
            Refunded => "refunded",
        }
    }

    /// Look up a persisted token. `None` for anything outside the enumeration.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }

    /// Statuses reachable in one step, in declaration order.
    ///
    /// Not a DAG: `Delivered -> ReturnRequested -> Delivered` is how a rejected
    /// return goes back.
    pub const fn next_statuses(self) -> &'static [OrderStatus] {
        match self {
            Pending => &[Confirmed, Cancelled],
            Confirmed => &[Processing, Cancelled],
            Processing => &[Shipped, Cancelled],
            Shipped => &[OutForDelivery, Delivered],
            OutForDelivery => &[Delivered],
            Delivered => &[ReturnRequested],
            ReturnRequested => &[ReturnApproved, Delivered],
            ReturnApproved => &[ReturnPicked],
            ReturnPicked => &[Refunded],
            Cancelled | Refunded => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub const fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Business allowlist for customer cancellation.
    ///
    /// Kept separate from the transition table on purpose: the two may diverge.
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Pending | Confirmed | Processing)
    }

    pub const fn is_returnable(self) -> bool {
        matches!(self, Delivered)
    }

    /// Human-readable label.
    pub const fn display_text(self) -> &'static str {
        match self {
            Pending => "Order Placed",
            Confirmed => "Confirmed",
            Processing => "Processing",
            Shipped => "Shipped",
            OutForDelivery => "Out for Delivery",
            Delivered => "Delivered",
            Cancelled => "Cancelled",
            ReturnRequested => "Return Requested",
            ReturnApproved => "Return Approved",
            ReturnPicked => "Return Picked Up",
            Refunded => "Refunded",
        }
    }

    /// Hex color token used by clients to badge the status.
    pub const fn color(self) -> &'static str {
        match self {
            Pending => "#FFA500",
            Confirmed => "#2196F3",
            Processing => "#9C27B0",
            Shipped => "#3F51B5",
            OutForDelivery => "#FF9800",
            Delivered => "#4CAF50",
            Cancelled => "#F44336",
            ReturnRequested => "#FF5722",
            ReturnApproved => "#795548",
            ReturnPicked => "#607D8B",
            Refunded => "#009688",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .ok_or_else(|| DomainError::validation(format!("unknown order status: {s}")))
    }
}
