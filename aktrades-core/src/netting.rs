//! Netting engine — reduces one inventory layer against an opposing fill.
//!
//! `reduce` is a pure function: it never touches a ledger, it only derives
//! the residual layer and the realized PnL for the matched quantity. Routing
//! (which layer to reduce, what to do with the residual) belongs to
//! [`crate::ledger::Ledger`].

use crate::domain::{Fill, InventoryLayer, Side};
use thiserror::Error;

/// Contract violations of [`reduce`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NettingError {
    #[error("cannot net fill for '{fill}' against layer for '{layer}'")]
    TickerMismatch { layer: String, fill: String },

    #[error("cannot net a {side} fill against a {side} layer; same-side fills open a new layer")]
    SameSideMerge { side: Side },
}

/// Result of reducing one layer by one fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Layer left after the reduction. Quantity is zero when the fill matched
    /// the layer exactly, and negative when the fill overshot it.
    pub residual: InventoryLayer,
    /// Realized PnL on the matched quantity.
    pub pnl: f64,
    /// True when the whole fill fit within this layer.
    pub fully_consumed: bool,
}

/// Reduce `layer` by the opposing `fill`.
///
/// PnL follows the layer's side: closing a long above entry and closing a
/// short below entry are both profitable.
pub fn reduce(layer: &InventoryLayer, fill: &Fill) -> Result<Reduction, NettingError> {
    if layer.ticker != fill.ticker {
        return Err(NettingError::TickerMismatch {
            layer: layer.ticker.clone(),
            fill: fill.ticker.clone(),
        });
    }
    if layer.side == fill.side {
        return Err(NettingError::SameSideMerge { side: layer.side });
    }

    let overflow = fill.quantity > layer.quantity;
    let residual_price = if overflow { fill.price } else { layer.price };
    let residual_side = if overflow { fill.side } else { layer.side };
    let residual_quantity = layer.quantity - fill.quantity;

    let matched = fill.quantity.min(layer.quantity);
    let per_unit = match layer.side {
        Side::Long => fill.price - layer.price,
        Side::Short => layer.price - fill.price,
    };
    let pnl = matched as f64 * per_unit;

    Ok(Reduction {
        residual: InventoryLayer::new(
            layer.ticker.clone(),
            residual_side,
            residual_quantity,
            residual_price,
        ),
        pnl,
        fully_consumed: residual_quantity >= 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_mismatch_is_rejected() {
        let layer = InventoryLayer::new("NIFTY", Side::Long, 1, 10.0);
        let fill = Fill::new("BANKNIFTY", Side::Short, 1, 15.0);
        let err = reduce(&layer, &fill).unwrap_err();
        assert_eq!(
            err,
            NettingError::TickerMismatch {
                layer: "NIFTY".into(),
                fill: "BANKNIFTY".into(),
            }
        );
    }

    #[test]
    fn same_side_is_rejected() {
        let layer = InventoryLayer::new("NIFTY", Side::Long, 5, 10.0);
        let fill = Fill::new("NIFTY", Side::Long, 2, 15.0);
        assert_eq!(
            reduce(&layer, &fill).unwrap_err(),
            NettingError::SameSideMerge { side: Side::Long }
        );
    }

    #[test]
    fn exact_match_leaves_zero_layer() {
        let layer = InventoryLayer::new("NIFTY", Side::Long, 1, 10.0);
        let r = reduce(&layer, &Fill::new("NIFTY", Side::Short, 1, 15.0)).unwrap();
        assert_eq!(r.pnl, 5.0);
        assert_eq!(r.residual, layer.with_quantity(0));
        assert!(r.fully_consumed);
    }

    #[test]
    fn scale_down_keeps_layer_side_and_price() {
        let layer = InventoryLayer::new("NIFTY", Side::Long, 5, 10.0);
        let r = reduce(&layer, &Fill::new("NIFTY", Side::Short, 2, 15.0)).unwrap();
        assert_eq!(r.pnl, 10.0);
        assert_eq!(r.residual, InventoryLayer::new("NIFTY", Side::Long, 3, 10.0));
        assert!(r.fully_consumed);
    }

    #[test]
    fn overshoot_flips_to_fill_side_and_price() {
        let layer = InventoryLayer::new("NIFTY", Side::Long, 5, 10.0);
        let r = reduce(&layer, &Fill::new("NIFTY", Side::Short, 10, 15.0)).unwrap();
        // only the 5 held units realize PnL
        assert_eq!(r.pnl, 25.0);
        assert_eq!(r.residual, InventoryLayer::new("NIFTY", Side::Short, -5, 15.0));
        assert!(!r.fully_consumed);
    }

    #[test]
    fn short_layer_profits_when_covered_lower() {
        let layer = InventoryLayer::new("NIFTY", Side::Short, 4, 20.0);
        let r = reduce(&layer, &Fill::new("NIFTY", Side::Long, 4, 18.0)).unwrap();
        assert_eq!(r.pnl, 8.0);
        assert_eq!(r.residual.quantity, 0);
    }

    #[test]
    fn short_layer_loses_when_covered_higher() {
        let layer = InventoryLayer::new("NIFTY", Side::Short, 1, 11.0);
        let r = reduce(&layer, &Fill::new("NIFTY", Side::Long, 1, 15.0)).unwrap();
        assert_eq!(r.pnl, -4.0);
    }
}
