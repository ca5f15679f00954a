//! `search` command: load the dataset, run one query, print the rows.

use std::path::Path;

use anyhow::Context;
use workshops_core::{
    load_dataset, AppConfig, Coordinate, Filters, Query, Reference, SearchOutcome, SearchRequest,
    ServiceTier,
};

use crate::output::{fmt_cost, fmt_distance, print_structured, render_table, OutputFormat};

#[derive(Debug, Clone)]
pub(crate) struct SearchArgs {
    pub pincode: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub channel: Option<String>,
    pub body_shop: Option<String>,
    pub state: Option<String>,
    pub limit: Option<u64>,
    pub tier: Option<ServiceTier>,
    pub format: OutputFormat,
}

/// Turn the raw command-line inputs into a core search request.
///
/// # Errors
///
/// Returns an error if the coordinates are out of range or only one of them
/// is given.
pub(crate) fn build_request(args: &SearchArgs) -> anyhow::Result<SearchRequest> {
    let query = match (&args.pincode, args.lat, args.lon) {
        (Some(code), _, _) => Some(Query::Pincode(code.clone())),
        (None, Some(lat), Some(lon)) => Some(Query::Coordinates(
            Coordinate::new(lat, lon).context("please supply a valid latitude and longitude")?,
        )),
        (None, None, None) => None,
        (None, _, _) => anyhow::bail!("both --lat and --lon are required for a coordinate search"),
    };

    Ok(SearchRequest {
        query,
        filters: Filters::from_selection(
            args.channel.as_deref(),
            args.body_shop.as_deref(),
            args.state.as_deref(),
        ),
        tier: args.tier,
    })
}

/// Run a search and print the result.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded (fatal), the query input
/// is invalid, or the output cannot be serialized.
pub(crate) fn run_search(
    config: &AppConfig,
    data_path: &Path,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let dataset = load_dataset(data_path)
        .with_context(|| format!("cannot load workshop dataset {}", data_path.display()))?;
    let request = build_request(args)?;

    if dataset.is_empty() {
        println!("no data available; check the dataset file");
        return Ok(());
    }

    let limit = match args.limit {
        Some(n) => usize::try_from(n).context("--limit is too large")?,
        None => config.result_limit,
    };

    let outcome = workshops_core::search(&dataset, &request, &config.distance_metric, limit)?;

    if args.format != OutputFormat::Table {
        return print_structured(&outcome, args.format);
    }

    if outcome.reference == Reference::Unresolved {
        if let Some(Query::Pincode(code)) = &request.query {
            println!("pincode {code} not found; showing default workshops without distances");
        }
    }

    if outcome.is_empty() {
        println!("no results found for the selected filters");
        return Ok(());
    }

    print!("{}", outcome_table(&outcome, dataset.headers(), config));
    Ok(())
}

/// Render a search outcome as an aligned text table.
///
/// Core columns come first, followed by every other dataset column in file
/// order. The cost column only appears when a tier was requested.
pub(crate) fn outcome_table(
    outcome: &SearchOutcome<'_>,
    dataset_headers: &[String],
    config: &AppConfig,
) -> String {
    let extra_headers: Vec<&String> = dataset_headers
        .iter()
        .filter(|h| outcome.rows.iter().any(|r| r.ranked.workshop.extra.contains_key(*h)))
        .collect();
    let with_cost = outcome.rows.iter().any(|r| r.cost.is_some());

    let mut headers: Vec<String> = vec!["#".to_string(), "DISTANCE".to_string()];
    if with_cost {
        headers.push("COST".to_string());
    }
    headers.extend(
        ["PINCODE", "CHANNEL", "BODY SHOP", "STATE", "LATITUDE", "LONGITUDE"]
            .iter()
            .map(|h| (*h).to_string()),
    );
    headers.extend(extra_headers.iter().map(|h| h.to_uppercase()));

    let dash = || "\u{2014}".to_string();
    let rows: Vec<Vec<String>> = outcome
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let w = row.ranked.workshop;
            let mut cells = vec![(i + 1).to_string(), fmt_distance(row.ranked.distance_km)];
            if with_cost {
                cells.push(
                    row.cost
                        .map_or_else(dash, |c| fmt_cost(c, &config.currency_symbol)),
                );
            }
            for value in [&w.pincode, &w.channel, &w.body_shop, &w.state] {
                cells.push(value.clone().unwrap_or_else(dash));
            }
            cells.push(w.location.map_or_else(dash, |c| format!("{:.6}", c.lat)));
            cells.push(w.location.map_or_else(dash, |c| format!("{:.6}", c.lon)));
            for header in &extra_headers {
                cells.push(w.extra.get(*header).cloned().unwrap_or_else(dash));
            }
            cells
        })
        .collect();

    render_table(&headers, &rows)
}
