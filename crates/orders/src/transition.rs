//! Strict transition checks for callers that persist status changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{DomainError, DomainResult, ExpectedStatus};

use crate::status::OrderStatus;

storefront_core::uuid_newtype! {
    /// Order identifier. The order record itself lives in the caller's store.
    pub struct OrderId;
}

/// Why a proposed status change was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A token outside the status enumeration (corrupt or legacy data, bad input).
    #[error("unrecognized order status: {0:?}")]
    UnknownStatus(String),

    /// Both statuses are known but the lifecycle has no such edge.
    #[error("cannot move order from {from} to {to}")]
    NotPermitted { from: OrderStatus, to: OrderStatus },
}

impl From<TransitionError> for DomainError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::UnknownStatus(_) => DomainError::validation(err.to_string()),
            TransitionError::NotPermitted { .. } => DomainError::invariant(err.to_string()),
        }
    }
}

fn parse(token: &str) -> Result<OrderStatus, TransitionError> {
    OrderStatus::from_token(token).ok_or_else(|| TransitionError::UnknownStatus(token.to_string()))
}

/// Validate `current -> next`, returning the parsed pair.
///
/// `current` is checked before `next`, so a corrupt stored status is reported
/// as such even when the proposed status is also bad.
pub fn ensure_transition(
    current: &str,
    next: &str,
) -> Result<(OrderStatus, OrderStatus), TransitionError> {
    let from = parse(current)?;
    let to = parse(next)?;

    if !from.can_transition_to(to) {
        tracing::debug!(
            %from,
            %to,
            allowed = ?from.next_statuses(),
            "order status transition rejected"
        );
        return Err(TransitionError::NotPermitted { from, to });
    }

    Ok((from, to))
}

/// Record of an accepted status change, for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

impl StatusChanged {
    /// Stable event name for downstream consumers.
    pub fn event_type(&self) -> &'static str {
        "orders.order.status_changed"
    }

    pub fn is_terminal(&self) -> bool {
        self.to.is_terminal()
    }
}

/// Decide whether an order may move from its stored status to `next`.
///
/// `stored` is the status the order store currently holds; `expected` is what
/// the caller read when it started the update. A stale read is a `Conflict`
/// even when the edge from `stored` would also be refused. Nothing is written
/// here.
pub fn plan_status_change(
    order_id: OrderId,
    stored: &str,
    next: &str,
    expected: ExpectedStatus<OrderStatus>,
    occurred_at: DateTime<Utc>,
) -> DomainResult<StatusChanged> {
    let current = parse(stored)?;
    expected.check(&current)?;
    let (from, to) = ensure_transition(stored, next)?;

    Ok(StatusChanged {
        order_id,
        from,
        to,
        occurred_at,
    })
}
