//! Lenient status queries over persisted text tokens.
//!
//! Callers hand over whatever string the order store holds. A token outside the
//! enumeration (legacy data, typos) degrades to "no transitions", `false`, or a
//! neutral presentation instead of an error, so a bad row never breaks a listing.
//! Callers that must reject an update use [`crate::ensure_transition`].

use crate::status::OrderStatus;

/// Color returned for tokens outside the enumeration.
pub const DEFAULT_STATUS_COLOR: &str = "#6B7280";

/// Whether `next` is directly reachable from `current`.
pub fn is_valid_transition(current: &str, next: &str) -> bool {
    match (OrderStatus::from_token(current), OrderStatus::from_token(next)) {
        (Some(current), Some(next)) => current.can_transition_to(next),
        _ => false,
    }
}

/// Allowed targets from `current`, in declaration order.
///
/// Empty for terminal and unrecognized statuses.
pub fn next_possible_statuses(current: &str) -> &'static [OrderStatus] {
    match OrderStatus::from_token(current) {
        Some(status) => status.next_statuses(),
        None => &[],
    }
}

pub fn can_cancel_order(current: &str) -> bool {
    OrderStatus::from_token(current).is_some_and(OrderStatus::is_cancellable)
}

pub fn can_request_return(current: &str) -> bool {
    OrderStatus::from_token(current).is_some_and(OrderStatus::is_returnable)
}

/// Label for `status`; unrecognized tokens are echoed back unchanged.
pub fn status_display_text(status: &str) -> &str {
    match OrderStatus::from_token(status) {
        Some(known) => known.display_text(),
        None => status,
    }
}

pub fn status_color(status: &str) -> &'static str {
    OrderStatus::from_token(status).map_or(DEFAULT_STATUS_COLOR, OrderStatus::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_flow_is_valid_step_by_step() {
        let path = ["pending", "confirmed", "processing", "shipped", "delivered"];
        for pair in path.windows(2) {
            assert!(
                is_valid_transition(pair[0], pair[1]),
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
        assert!(can_request_return("delivered"));
    }

    #[test]
    fn skipping_intermediate_states_is_invalid() {
        assert!(!is_valid_transition("pending", "shipped"));
        assert!(!is_valid_transition("confirmed", "delivered"));
        assert!(!is_valid_transition("delivered", "processing"));
    }

    #[test]
    fn rejected_return_goes_back_to_delivered_and_can_retry() {
        assert!(is_valid_transition("delivered", "return_requested"));
        assert!(is_valid_transition("return_requested", "delivered"));
        assert!(is_valid_transition("delivered", "return_requested"));
    }

    #[test]
    fn terminal_statuses_have_no_targets() {
        for terminal in ["cancelled", "refunded"] {
            assert!(next_possible_statuses(terminal).is_empty());
            for status in OrderStatus::ALL {
                assert!(!is_valid_transition(terminal, status.as_str()));
            }
        }
    }

    #[test]
    fn unknown_status_degrades_quietly() {
        assert!(next_possible_statuses("archived").is_empty());
        assert!(!is_valid_transition("archived", "pending"));
        assert!(!is_valid_transition("pending", "archived"));
        assert!(!can_cancel_order("archived"));
        assert!(!can_request_return("archived"));
        assert_eq!(status_display_text("archived"), "archived");
        assert_eq!(status_color("archived"), DEFAULT_STATUS_COLOR);
        assert_eq!(status_display_text(""), "");
    }

    #[test]
    fn cancel_allowlist_ignores_reachability() {
        assert!(can_cancel_order("pending"));
        assert!(can_cancel_order("confirmed"));
        assert!(can_cancel_order("processing"));
        assert!(!can_cancel_order("shipped"));
        assert!(!can_cancel_order("out_for_delivery"));
        assert!(!can_cancel_order("delivered"));
        assert!(!can_cancel_order("cancelled"));
    }

    #[test]
    fn known_statuses_use_fixed_presentation() {
        assert_eq!(status_display_text("out_for_delivery"), "Out for Delivery");
        assert_eq!(status_display_text("pending"), "Order Placed");
        assert_eq!(status_color("delivered"), "#4CAF50");
        assert_ne!(status_color("cancelled"), DEFAULT_STATUS_COLOR);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = OrderStatus> {
            proptest::sample::select(OrderStatus::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: validity is exactly membership in the next-status row.
            #[test]
            fn validity_matches_row_membership(from in any_status(), to in any_status()) {
                let row = next_possible_statuses(from.as_str());
                prop_assert_eq!(row, from.next_statuses());
                prop_assert_eq!(is_valid_transition(from.as_str(), to.as_str()), row.contains(&to));
            }

            /// Property: tokens outside the enumeration never yield transitions or flags.
            #[test]
            fn unknown_tokens_degrade(token in "[a-z_]{0,24}") {
                prop_assume!(OrderStatus::from_token(&token).is_none());

                prop_assert!(next_possible_statuses(&token).is_empty());
                prop_assert!(!can_cancel_order(&token));
                prop_assert!(!can_request_return(&token));
                prop_assert_eq!(status_color(&token), DEFAULT_STATUS_COLOR);
                prop_assert_eq!(status_display_text(&token), token.as_str());
                for status in OrderStatus::ALL {
                    prop_assert!(!is_valid_transition(&token, status.as_str()));
                    prop_assert!(!is_valid_transition(status.as_str(), &token));
                }
            }
        }
    }
}
