//! aktrades runner — offline replay of executed fills through the ledger.
//!
//! This crate builds on `aktrades-core` to provide:
//! - TOML replay configuration with validation
//! - CSV fill-stream loading (the validation boundary for fills)
//! - A replay driver that feeds fills to a fresh ledger
//! - JSON report export and a plain-text summary

pub mod config;
pub mod fill_loader;
pub mod replay;
pub mod report;

pub use config::{ConfigError, InputConfig, LedgerConfig, OutputConfig, ReplayConfig};
pub use fill_loader::{load_fills, read_fills, FillRecord, LoadError};
pub use replay::{replay, ReplayResult};
pub use report::{export_report, render_summary};
