use workshops_core::{compute_cost, AppConfig, ServiceTier};

use crate::output::fmt_cost;

/// Print the service cost for `distance_km` under `tier`.
///
/// # Errors
///
/// Returns an error if the distance is negative or not a finite number.
pub(crate) fn run_cost(
    config: &AppConfig,
    distance_km: f64,
    tier: ServiceTier,
) -> anyhow::Result<()> {
    let amount = compute_cost(distance_km, tier)?;
    tracing::debug!(distance_km, %tier, %amount, "computed service cost");
    println!(
        "{tier} for {distance_km} km: {}",
        fmt_cost(amount, &config.currency_symbol)
    );
    Ok(())
}
