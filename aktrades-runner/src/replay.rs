//! Replay driver — feeds a fill stream through a fresh ledger.

use aktrades_core::{Fill, FillOutcome, Ledger, LedgerSnapshot};
use serde::Serialize;
use tracing::info;

/// Outcome of replaying one fill stream.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayResult {
    pub fingerprint: String,
    pub snapshot: LedgerSnapshot,
    /// Realized PnL of each fill, in application order.
    pub fill_pnl: Vec<f64>,
    /// Number of fills that reduced at least one existing layer.
    pub closing_fills: usize,
}

impl ReplayResult {
    pub fn fill_count(&self) -> usize {
        self.snapshot.fills.len()
    }

    /// Largest cumulative-PnL drawdown along the fill stream, before charges.
    pub fn max_drawdown(&self) -> f64 {
        let mut peak = 0.0_f64;
        let mut cumulative = 0.0;
        let mut worst = 0.0_f64;
        for pnl in &self.fill_pnl {
            cumulative += pnl;
            peak = peak.max(cumulative);
            worst = worst.max(peak - cumulative);
        }
        worst
    }
}

/// Apply `fills` in order to a new ledger charging `brokerage_rate` per fill.
pub fn replay(fills: impl IntoIterator<Item = Fill>, brokerage_rate: f64) -> ReplayResult {
    let mut ledger = Ledger::new(brokerage_rate);
    let mut fill_pnl = Vec::new();
    let mut closing_fills = 0;

    info!(brokerage_rate, "replay started");
    for fill in fills {
        let FillOutcome {
            realized_pnl,
            layers_touched,
        } = ledger.apply(fill);
        if layers_touched > 0 {
            closing_fills += 1;
        }
        fill_pnl.push(realized_pnl);
    }

    let snapshot = ledger.snapshot();
    let fingerprint = snapshot.fingerprint();
    let short_id = fingerprint.get(..12).unwrap_or(&fingerprint);
    info!(
        fills = snapshot.fills.len(),
        open_tickers = snapshot.positions.len(),
        realized_pnl = snapshot.realized_pnl,
        charges = snapshot.charges,
        fingerprint = %short_id,
        "replay finished"
    );

    ReplayResult {
        fingerprint,
        snapshot,
        fill_pnl,
        closing_fills,
    }
}
