//! Read-only listings: filter facets and the service tier table.

use std::path::Path;

use anyhow::Context;
use workshops_core::{load_dataset, AppConfig, Facets, ServiceTier};

use crate::output::{fmt_cost, print_structured, render_table, OutputFormat};

/// Print the values each filter accepts, as offered by the dataset.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or serialized.
pub(crate) fn run_facets(data_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(data_path)
        .with_context(|| format!("cannot load workshop dataset {}", data_path.display()))?;
    let facets = dataset.facets();

    if format == OutputFormat::Table {
        print!("{}", facets_text(&facets));
        Ok(())
    } else {
        print_structured(&facets, format)
    }
}

fn facets_text(facets: &Facets) -> String {
    let mut out = String::new();
    for (label, values) in [
        ("Channel", &facets.channels),
        ("Body shop", &facets.body_shops),
        ("State", &facets.states),
    ] {
        let mut options = vec!["All".to_string()];
        options.extend(values.iter().cloned());
        out.push_str(&format!("{label}: {}\n", options.join(", ")));
    }
    out
}

pub(crate) fn run_tiers(config: &AppConfig) {
    print!("{}", tiers_table(&config.currency_symbol));
}

fn tiers_table(symbol: &str) -> String {
    let headers: Vec<String> = ["TIER", "FIXED FEE", "FREE KM", "RATE/KM"]
        .iter()
        .map(|h| (*h).to_string())
        .collect();
    let rows: Vec<Vec<String>> = ServiceTier::ALL
        .iter()
        .map(|tier| {
            vec![
                tier.id().to_string(),
                fmt_cost(tier.fixed_fee(), symbol),
                tier.free_threshold_km()
                    .map_or_else(|| "\u{2014}".to_string(), |km| km.to_string()),
                fmt_cost(tier.rate_per_km(), symbol),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}
