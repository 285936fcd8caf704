//! InventoryLayer — one FIFO chunk of open inventory for a ticker.

use super::fill::Fill;
use super::side::Side;
use serde::{Deserialize, Serialize};

/// One open position chunk, carrying its own entry price.
///
/// While a layer sits in a ledger queue its quantity is non-zero. A layer
/// produced by [`crate::netting::reduce`] may carry a negative quantity when
/// the reducing fill overshot it; in that case `side` already holds the
/// fill's side and the magnitude is the part of the fill not yet absorbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLayer {
    pub ticker: String,
    pub side: Side,
    pub quantity: i64,
    pub price: f64,
}

impl InventoryLayer {
    pub fn new(ticker: impl Into<String>, side: Side, quantity: i64, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            side,
            quantity,
            price,
        }
    }

    /// Open a fresh layer from a fill.
    pub fn open(fill: &Fill) -> Self {
        Self::new(fill.ticker.clone(), fill.side, fill.quantity, fill.price)
    }

    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Signed net exposure: `quantity` if long, `-quantity` if short.
    pub fn exposure(&self) -> i64 {
        self.side.sign() * self.quantity
    }
}
