//! Serializable point-in-time view of a ledger, for reporting.

use crate::domain::{Fill, InventoryLayer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ledger state captured at the end of (or during) a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub brokerage_rate: f64,
    pub realized_pnl: f64,
    pub charges: f64,
    pub net_pnl: f64,
    pub fills: Vec<Fill>,
    /// Open layers per ticker, oldest first.
    pub positions: BTreeMap<String, Vec<InventoryLayer>>,
}

impl LedgerSnapshot {
    /// Deterministic identifier of the fill stream that produced this state.
    ///
    /// BLAKE3 over the canonical JSON of the brokerage rate and fill log, so
    /// two replays of the same fills at the same rate share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::json!({
            "brokerage_rate": self.brokerage_rate,
            "fills": &self.fills,
        });
        let hash = blake3::hash(canonical.to_string().as_bytes());
        hash.to_hex().to_string()
    }

    pub fn is_flat(&self) -> bool {
        self.positions.is_empty()
    }

    /// Signed net exposure for `ticker` (0 when flat).
    pub fn net_exposure(&self, ticker: &str) -> i64 {
        self.positions
            .get(ticker)
            .map(|layers| layers.iter().map(InventoryLayer::exposure).sum())
            .unwrap_or(0)
    }
}
