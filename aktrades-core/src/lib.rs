//! aktrades core — position netting and realized-PnL accounting.
//!
//! This crate holds the accounting engine of the backtest toolkit:
//! - Domain types (sides, fills, orders, inventory layers)
//! - Netting engine: FIFO reduction of one layer against an opposing fill
//! - Ledger: per-ticker layer queues, append-only fill log, running PnL
//!   and brokerage charges
//!
//! Deciding when an order executes, and at what price, happens upstream.
//! The ledger only receives executed fills.

pub mod domain;
pub mod ledger;
pub mod netting;

pub use domain::{Fill, InventoryLayer, Order, OrderType, Side};
pub use ledger::{FillOutcome, Ledger, LedgerSnapshot};
pub use netting::{reduce, NettingError, Reduction};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: independent ledgers can be moved to worker threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Side>();
        require_sync::<Side>();
        require_send::<Fill>();
        require_sync::<Fill>();
        require_send::<Order>();
        require_sync::<Order>();
        require_send::<InventoryLayer>();
        require_sync::<InventoryLayer>();
        require_send::<Reduction>();
        require_sync::<Reduction>();
        require_send::<NettingError>();
        require_sync::<NettingError>();
        require_send::<Ledger>();
        require_sync::<Ledger>();
        require_send::<LedgerSnapshot>();
        require_sync::<LedgerSnapshot>();
    }
}
