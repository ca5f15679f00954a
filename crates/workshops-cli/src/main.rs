mod catalog;
mod cost;
mod output;
mod search;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workshops_core::ServiceTier;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "workshops-cli")]
#[command(about = "Find the nearest workshops and estimate service cost")]
struct Cli {
    /// Workshop dataset (CSV); overrides WORKSHOPS_DATA_PATH
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List workshops, nearest first when a pincode or coordinate is given
    Search {
        /// Pincode to search around (exact match against the dataset)
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        pincode: Option<String>,
        /// Latitude of the search point, in degrees
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude of the search point, in degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Channel filter ("All" for no filter)
        #[arg(long)]
        channel: Option<String>,
        /// Body shop filter ("All" for no filter)
        #[arg(long)]
        body_shop: Option<String>,
        /// State filter ("All" for no filter)
        #[arg(long)]
        state: Option<String>,
        /// Number of nearest workshops; defaults to WORKSHOPS_RESULT_LIMIT
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
        /// Add an estimated service cost for this tier to every ranked row
        #[arg(long)]
        tier: Option<ServiceTier>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Compute the service cost for a distance and tier
    Cost {
        /// Distance in kilometers
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Service tier id (see `tiers`)
        #[arg(long)]
        tier: ServiceTier,
    },
    /// Show the values available for each filter
    Facets {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show the service tiers and their rates
    Tiers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = workshops_core::load_app_config().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, metric = %config.distance_metric, "starting");

    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());

    match cli.command {
        Some(Commands::Search {
            pincode,
            lat,
            lon,
            channel,
            body_shop,
            state,
            limit,
            tier,
            format,
        }) => {
            let args = search::SearchArgs {
                pincode,
                lat,
                lon,
                channel,
                body_shop,
                state,
                limit,
                tier,
                format,
            };
            search::run_search(&config, &data_path, &args)?;
        }
        Some(Commands::Cost { distance, tier }) => cost::run_cost(&config, distance, tier)?,
        Some(Commands::Facets { format }) => catalog::run_facets(&data_path, format)?,
        Some(Commands::Tiers) => catalog::run_tiers(&config),
        None => println!("workshops-cli ready; see --help for commands"),
    }

    Ok(())
}
