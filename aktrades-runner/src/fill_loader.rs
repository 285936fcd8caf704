//! Fill-stream loading from CSV.
//!
//! Expected header: `ticker,side,quantity,price`. `side` accepts
//! `LONG`/`SHORT` as well as the broker spellings `BUY`/`SELL`.
//!
//! The ledger trusts its inputs, so this is where malformed fills stop:
//! a non-positive quantity, a negative or non-finite price, or an empty
//! ticker rejects the whole stream.

use aktrades_core::{Fill, Side};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from the fill loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid fill on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// One row of the fill CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct FillRecord {
    pub ticker: String,
    pub side: Side,
    pub quantity: i64,
    pub price: f64,
}

impl FillRecord {
    fn into_fill(self, line: u64) -> Result<Fill, LoadError> {
        let reason = if self.ticker.trim().is_empty() {
            Some("ticker is empty".to_string())
        } else if self.quantity <= 0 {
            Some(format!("quantity must be positive, got {}", self.quantity))
        } else if !self.price.is_finite() || self.price < 0.0 {
            Some(format!(
                "price must be finite and non-negative, got {}",
                self.price
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => {
                warn!(line, %reason, "rejecting fill record");
                Err(LoadError::InvalidRecord { line, reason })
            }
            None => Ok(Fill::new(
                self.ticker.trim(),
                self.side,
                self.quantity,
                self.price,
            )),
        }
    }
}

/// Read fills from any CSV source, in file order.
pub fn read_fills<R: Read>(reader: R) -> Result<Vec<Fill>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut fills = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let parsed: FillRecord = record.deserialize(Some(&headers))?;
        fills.push(parsed.into_fill(line)?);
    }
    Ok(fills)
}

/// Load fills from a CSV file.
pub fn load_fills(path: &Path) -> Result<Vec<Fill>, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let fills = read_fills(file)?;
    debug!(path = %path.display(), count = fills.len(), "loaded fills");
    Ok(fills)
}
