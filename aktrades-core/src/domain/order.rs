//! Orders as submitted by a strategy, before execution.

use super::fill::Fill;
use super::side::Side;
use serde::{Deserialize, Serialize};

/// Order kind and its price parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Executes at the last traded price; the order price is ignored.
    Market,
    /// Executes once the market trades through the order price.
    Limit,
    /// Arms at `trigger_price`, then rests as a limit at the order price.
    StopLimit { trigger_price: f64 },
}

/// A single order in the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub ticker: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: i64,
    pub price: f64,
}

impl Order {
    pub fn market(ticker: impl Into<String>, side: Side, quantity: i64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: 0.0,
        }
    }

    pub fn limit(ticker: impl Into<String>, side: Side, quantity: i64, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price,
        }
    }

    /// The fill this order produces when executed at `ltp`.
    ///
    /// Whether the order is eligible at `ltp` is decided by the caller.
    pub fn fill_at(&self, ltp: f64) -> Fill {
        Fill::new(self.ticker.clone(), self.side, self.quantity, ltp)
    }
}
