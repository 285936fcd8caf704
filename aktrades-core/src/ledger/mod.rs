//! Ledger — per-ticker FIFO inventory, fill log, running PnL and charges.
//!
//! One ledger per replay. `apply` is the only mutator; every call:
//! 1. appends the fill to the log and charges the flat brokerage fee,
//! 2. opens a layer if the ticker is flat, extends the tail on a same-side
//!    fill, or nets the fill FIFO against the oldest opposing layers,
//! 3. drops the ticker once its exposure returns to exactly zero.

pub mod snapshot;

pub use snapshot::LedgerSnapshot;

use crate::domain::{Fill, InventoryLayer, Order};
use crate::netting::reduce;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, trace};

/// Effect of a single [`Ledger::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillOutcome {
    /// PnL realized by this fill alone.
    pub realized_pnl: f64,
    /// Number of existing layers reduced by this fill.
    pub layers_touched: usize,
}

/// Aggregate accounting state for one backtest run.
#[derive(Debug, Clone)]
pub struct Ledger {
    brokerage_rate: f64,
    /// Oldest layer first. A ticker is present only while its queue is non-empty.
    positions: BTreeMap<String, VecDeque<InventoryLayer>>,
    fills: Vec<Fill>,
    pnl: f64,
    charges: f64,
}

impl Ledger {
    pub fn new(brokerage_rate: f64) -> Self {
        debug_assert!(
            brokerage_rate >= 0.0,
            "brokerage rate must be non-negative, got {brokerage_rate}"
        );
        Self {
            brokerage_rate,
            positions: BTreeMap::new(),
            fills: Vec::new(),
            pnl: 0.0,
            charges: 0.0,
        }
    }

    /// Apply an executed fill.
    pub fn apply(&mut self, fill: Fill) -> FillOutcome {
        self.charges += self.brokerage_rate;

        let queue = self.positions.remove(&fill.ticker).unwrap_or_default();
        let (queue, outcome) = settle(queue, &fill);
        self.pnl += outcome.realized_pnl;

        if queue.is_empty() {
            debug!(ticker = %fill.ticker, pnl = outcome.realized_pnl, "position closed");
        } else {
            self.positions.insert(fill.ticker.clone(), queue);
        }
        self.fills.push(fill);
        outcome
    }

    /// Execute `order` at the last traded price.
    pub fn execute(&mut self, order: &Order, ltp: f64) -> FillOutcome {
        self.apply(order.fill_at(ltp))
    }

    // ── Read accessors ─────────────────────────────────────────────────

    pub fn brokerage_rate(&self) -> f64 {
        self.brokerage_rate
    }

    /// Number of tickers with open inventory.
    pub fn active_ticker_count(&self) -> usize {
        self.positions.len()
    }

    pub fn running_pnl(&self) -> f64 {
        self.pnl
    }

    pub fn cumulative_charges(&self) -> f64 {
        self.charges
    }

    /// Realized PnL net of charges.
    pub fn net_pnl(&self) -> f64 {
        self.pnl - self.charges
    }

    /// Every fill applied so far, in application order.
    pub fn fill_log(&self) -> &[Fill] {
        &self.fills
    }

    /// Open layers for `ticker`, oldest first.
    pub fn layers(&self, ticker: &str) -> Option<&VecDeque<InventoryLayer>> {
        self.positions.get(ticker)
    }

    /// Tickers with open inventory, in sorted order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Signed net exposure for `ticker` (0 when flat).
    pub fn net_exposure(&self, ticker: &str) -> i64 {
        self.positions
            .get(ticker)
            .map(|q| q.iter().map(InventoryLayer::exposure).sum())
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            brokerage_rate: self.brokerage_rate,
            realized_pnl: self.pnl,
            charges: self.charges,
            net_pnl: self.net_pnl(),
            fills: self.fills.clone(),
            positions: self
                .positions
                .iter()
                .map(|(ticker, q)| (ticker.clone(), q.iter().cloned().collect()))
                .collect(),
        }
    }
}

/// Route `fill` through one ticker's queue and return the queue that replaces it.
fn settle(
    mut queue: VecDeque<InventoryLayer>,
    fill: &Fill,
) -> (VecDeque<InventoryLayer>, FillOutcome) {
    let mut outcome = FillOutcome::default();
    let mut working = fill.clone();

    loop {
        let Some(layer) = queue.pop_front() else {
            // flat, or the fill overshot every opposing layer
            let opened = InventoryLayer::open(&working);
            if outcome.layers_touched > 0 {
                debug!(
                    ticker = %opened.ticker,
                    side = %opened.side,
                    quantity = opened.quantity,
                    price = opened.price,
                    "position flipped"
                );
            } else {
                debug!(
                    ticker = %opened.ticker,
                    side = %opened.side,
                    quantity = opened.quantity,
                    price = opened.price,
                    "position opened"
                );
            }
            queue.push_back(opened);
            break;
        };

        if layer.side == working.side {
            // same-side fills extend inventory, they never net
            queue.push_front(layer);
            queue.push_back(InventoryLayer::open(&working));
            break;
        }

        let reduction = reduce(&layer, &working)
            .expect("ledger routes only same-ticker, opposite-side fills into reduce");
        outcome.layers_touched += 1;
        outcome.realized_pnl += reduction.pnl;
        trace!(
            ticker = %layer.ticker,
            layer_side = %layer.side,
            layer_quantity = layer.quantity,
            layer_price = layer.price,
            fill_quantity = working.quantity,
            pnl = reduction.pnl,
            "layer reduced"
        );

        if reduction.fully_consumed {
            if reduction.residual.quantity != 0 {
                queue.push_front(reduction.residual);
            }
            break;
        }

        // Overshoot: the residual magnitude is what the fill still has to
        // absorb. It is re-opened on the fill's side once the queue runs dry.
        working = working.with_quantity(reduction.residual.quantity.abs());
    }

    (queue, outcome)
}
