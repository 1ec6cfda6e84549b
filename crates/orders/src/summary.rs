use serde::Serialize;

use crate::policy::{
    can_cancel_order, can_request_return, next_possible_statuses, status_color,
    status_display_text,
};
use crate::status::OrderStatus;

/// Everything a client needs to render one status and its available actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub status: String,
    pub label: String,
    pub color: &'static str,
    pub next: Vec<OrderStatus>,
    pub can_cancel: bool,
    pub can_request_return: bool,
    pub terminal: bool,
}

impl StatusSummary {
    /// Summarize a persisted token. Unknown tokens get the neutral presentation
    /// and no actions; they are not reported as terminal.
    pub fn of(status: &str) -> Self {
        let next = next_possible_statuses(status);
        Self {
            status: status.to_string(),
            label: status_display_text(status).to_string(),
            color: status_color(status),
            next: next.to_vec(),
            can_cancel: can_cancel_order(status),
            can_request_return: can_request_return(status),
            terminal: OrderStatus::from_token(status).is_some_and(OrderStatus::is_terminal),
        }
    }

    /// One summary per status, in declaration order.
    pub fn all() -> Vec<Self> {
        OrderStatus::ALL.into_iter().map(|s| Self::of(s.as_str())).collect()
    }

    pub fn is_recognized(&self) -> bool {
        OrderStatus::from_token(&self.status).is_some()
    }
}

impl From<OrderStatus> for StatusSummary {
    fn from(status: OrderStatus) -> Self {
        Self::of(status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_STATUS_COLOR;

    #[test]
    fn delivered_summary_offers_return_only() {
        let summary = StatusSummary::from(OrderStatus::Delivered);
        assert_eq!(summary.label, "Delivered");
        assert_eq!(summary.next, vec![OrderStatus::ReturnRequested]);
        assert!(summary.can_request_return);
        assert!(!summary.can_cancel);
        assert!(!summary.terminal);
    }

    #[test]
    fn unknown_summary_is_neutral() {
        let summary = StatusSummary::of("archived");
        assert!(!summary.is_recognized());
        assert_eq!(summary.label, "archived");
        assert_eq!(summary.color, DEFAULT_STATUS_COLOR);
        assert!(summary.next.is_empty());
        assert!(!summary.can_cancel);
        assert!(!summary.terminal);
    }

    #[test]
    fn all_covers_every_status_in_order() {
        let all = StatusSummary::all();
        let statuses: Vec<_> = all.iter().map(|s| s.status.as_str()).collect();
        let expected: Vec<_> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(statuses, expected);

        let terminal: Vec<_> = all
            .iter()
            .filter(|s| s.terminal)
            .map(|s| s.status.as_str())
            .collect();
        assert_eq!(terminal, vec!["cancelled", "refunded"]);
    }

    #[test]
    fn serializes_next_as_tokens() {
        let json = serde_json::to_value(StatusSummary::from(OrderStatus::Shipped)).unwrap();
        assert_eq!(json["next"], serde_json::json!(["out_for_delivery", "delivered"]));
        assert_eq!(json["color"], "#3F51B5");
    }
}
