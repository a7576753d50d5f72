//! In-memory stand-in for the order-management backend.
//!
//! The function tools forward to this module and return its responses
//! verbatim. It exists so the assistant's tool surface can be exercised
//! without a live commerce system behind it; responses are canned and
//! the backend holds no mutable state.

use serde::{Deserialize, Serialize};

/// A single order as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend order number (e.g. "ORD-1001").
    pub order_number: String,
    /// What was ordered.
    pub item: String,
    /// Total charged, formatted by the backend.
    pub total: String,
    /// ISO 8601 date the order was placed.
    pub ordered_at: String,
}

/// Canned order backend.
#[derive(Debug, Clone)]
pub struct MockOrdersApi {
    orders: Vec<Order>,
}

impl Default for MockOrdersApi {
    fn default() -> Self {
        Self::new(vec![
            Order {
                order_number: "ORD-1001".to_string(),
                item: "Wireless headphones".to_string(),
                total: "$89.99".to_string(),
                ordered_at: "2025-03-14".to_string(),
            },
            Order {
                order_number: "ORD-1002".to_string(),
                item: "Espresso grinder".to_string(),
                total: "$142.50".to_string(),
                ordered_at: "2025-04-02".to_string(),
            },
            Order {
                order_number: "ORD-1003".to_string(),
                item: "Wool hiking socks (3 pack)".to_string(),
                total: "$24.00".to_string(),
                ordered_at: "2025-05-21".to_string(),
            },
        ])
    }
}

impl MockOrdersApi {
    /// Creates a backend serving the given orders.
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Returns every order on record for the caller.
    pub fn past_orders(&self) -> &[Order] {
        &self.orders
    }

    /// Accepts a refund request for an order number and returns the
    /// backend's acknowledgement. The number is echoed back as-is; the
    /// backend does not validate it.
    pub fn submit_refund_request(&self, order_number: &str) -> String {
        format!("Refund request for order {order_number} received and queued for review.")
    }
}
