//! Shared output helpers: format selection, table layout, number formatting.

use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Print a serializable value as pretty JSON or YAML on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails. Calling this with
/// [`OutputFormat::Table`] is a programming error and is rejected.
pub(crate) fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Table => anyhow::bail!("table output has no structured form"),
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Lay out rows under headers, each column padded to its widest cell.
pub(crate) fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = line(headers);
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// `"12.35 km"`, or an em dash when no distance was computed.
pub(crate) fn fmt_distance(distance_km: Option<f64>) -> String {
    distance_km.map_or_else(|| "\u{2014}".to_string(), |km| format!("{km:.2} km"))
}

/// Currency amount with exactly two decimals, half away from zero.
pub(crate) fn fmt_cost(amount: Decimal, symbol: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{symbol}{rounded}")
}
