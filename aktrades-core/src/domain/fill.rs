use super::side::Side;
use serde::{Deserialize, Serialize};

/// An executed trade at a known price.
///
/// `quantity` is always positive; direction lives in `side`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub ticker: String,
    pub side: Side,
    pub quantity: i64,
    pub price: f64,
}

impl Fill {
    pub fn new(ticker: impl Into<String>, side: Side, quantity: i64, price: f64) -> Self {
        debug_assert!(quantity > 0, "fill quantity must be positive, got {quantity}");
        Self {
            ticker: ticker.into(),
            side,
            quantity,
            price,
        }
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

    /// Quantity signed by side: positive for buys, negative for sells.
    pub fn signed_quantity(&self) -> i64 {
        self.side.sign() * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withers_replace_one_field() {
        let fill = Fill::new("NIFTY", Side::Short, 10, 15.0);
        let smaller = fill.with_quantity(4);
        assert_eq!(smaller.quantity, 4);
        assert_eq!(smaller.price, 15.0);
        assert_eq!(smaller.side, Side::Short);

        let repriced = fill.with_price(16.5);
        assert_eq!(repriced.quantity, 10);
        assert_eq!(repriced.price, 16.5);
        // source value unchanged
        assert_eq!(fill.quantity, 10);
    }

    #[test]
    fn signed_quantity_uses_side() {
        assert_eq!(Fill::new("NIFTY", Side::Long, 3, 1.0).signed_quantity(), 3);
        assert_eq!(Fill::new("NIFTY", Side::Short, 3, 1.0).signed_quantity(), -3);
    }
}
