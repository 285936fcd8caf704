//! Report export for replay results.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::replay::ReplayResult;

/// Flat, serializable summary written next to the full snapshot.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    fingerprint: &'a str,
    fill_count: usize,
    closing_fills: usize,
    brokerage_rate: f64,
    realized_pnl: f64,
    charges: f64,
    net_pnl: f64,
    max_drawdown: f64,
    open_exposure: BTreeMap<&'a str, i64>,
}

impl<'a> Summary<'a> {
    fn from_result(result: &'a ReplayResult) -> Self {
        let snap = &result.snapshot;
        Self {
            fingerprint: &result.fingerprint,
            fill_count: result.fill_count(),
            closing_fills: result.closing_fills,
            brokerage_rate: snap.brokerage_rate,
            realized_pnl: snap.realized_pnl,
            charges: snap.charges,
            net_pnl: snap.net_pnl,
            max_drawdown: result.max_drawdown(),
            open_exposure: snap
                .positions
                .keys()
                .map(|ticker| (ticker.as_str(), snap.net_exposure(ticker)))
                .collect(),
        }
    }
}

/// First 16 hex digits of the fingerprint, or all of it when shorter.
fn short_id(fingerprint: &str) -> &str {
    fingerprint.get(..16).unwrap_or(fingerprint)
}

/// Write `summary.json` and `snapshot.json` under `<output_dir>/<fingerprint[..16]>/`.
///
/// Returns the path of the summary file.
pub fn export_report(
    output_dir: impl AsRef<Path>,
    result: &ReplayResult,
    pretty: bool,
) -> Result<PathBuf> {
    let run_dir = output_dir.as_ref().join(short_id(&result.fingerprint));
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("creating report directory {}", run_dir.display()))?;

    let summary = Summary::from_result(result);
    let summary_path = run_dir.join("summary.json");
    write_json(&summary_path, &summary, pretty)?;
    write_json(&run_dir.join("snapshot.json"), &result.snapshot, pretty)?;

    Ok(summary_path)
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Human-readable summary for the terminal.
pub fn render_summary(result: &ReplayResult) -> String {
    let snap = &result.snapshot;
    let mut out = String::new();
    let _ = writeln!(out, "Replay {}", short_id(&result.fingerprint));
    let _ = writeln!(
        out,
        "  fills:         {} ({} closing)",
        result.fill_count(),
        result.closing_fills
    );
    let _ = writeln!(out, "  realized PnL:  {:.2}", snap.realized_pnl);
    let _ = writeln!(out, "  charges:       {:.2}", snap.charges);
    let _ = writeln!(out, "  net PnL:       {:.2}", snap.net_pnl);
    let _ = writeln!(out, "  max drawdown:  {:.2}", result.max_drawdown());
    if snap.is_flat() {
        let _ = writeln!(out, "  open positions: none");
    } else {
        let _ = writeln!(out, "  open positions:");
        for (ticker, layers) in &snap.positions {
            let _ = writeln!(
                out,
                "    {ticker:<12} net {:>8}  ({} layer{})",
                snap.net_exposure(ticker),
                layers.len(),
                if layers.len() == 1 { "" } else { "s" }
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::replay;
    use aktrades_core::{Fill, Side};

    fn sample() -> ReplayResult {
        replay(
            vec![
                Fill::new("NIFTY", Side::Long, 2, 100.0),
                Fill::new("NIFTY", Side::Short, 1, 104.0),
            ],
            20.0,
        )
    }

    #[test]
    fn summary_reports_open_exposure() {
        let result = sample();
        let summary = Summary::from_result(&result);
        assert_eq!(summary.realized_pnl, 4.0);
        assert_eq!(summary.charges, 40.0);
        assert_eq!(summary.open_exposure.get("NIFTY"), Some(&1));
    }

    #[test]
    fn short_fingerprint_renders_whole() {
        let mut result = sample();
        result.fingerprint = "abc".into();
        assert!(render_summary(&result).starts_with("Replay abc\n"));
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn export_with_short_fingerprint_uses_it_as_dir() {
        let dir = std::env::temp_dir().join(format!("aktrades_report_{}", std::process::id()));
        let mut result = sample();
        result.fingerprint = "abc".into();
        let path = export_report(&dir, &result, false).unwrap();
        assert_eq!(path, dir.join("abc").join("summary.json"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn render_lists_open_positions() {
        let text = render_summary(&sample());
        assert!(text.contains("realized PnL:  4.00"));
        assert!(text.contains("NIFTY"));
        assert!(text.contains("(1 layer)"));
    }
}
