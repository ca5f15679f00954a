//! Tiered per-kilometer service cost.
//!
//! Two tier families exist. Per-km tiers bill every kilometer at their rate.
//! Flat tiers charge a fixed fee that covers the first [`FREE_THRESHOLD_KM`]
//! and bill only the overage beyond it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PricingError;

/// Distance covered by the fixed fee of the flat tiers.
pub const FREE_THRESHOLD_KM: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceTier {
    /// No fixed fee, 24.04 per km.
    PerKmStandard,
    /// No fixed fee, 29.32 per km.
    PerKmPremium,
    /// 1600 fixed, 17 per km beyond the free threshold.
    FlatStandard,
    /// 1800 fixed, 20 per km beyond the free threshold.
    FlatPremium,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 4] = [
        ServiceTier::PerKmStandard,
        ServiceTier::PerKmPremium,
        ServiceTier::FlatStandard,
        ServiceTier::FlatPremium,
    ];

    /// Stable identifier used on the command line and in serialized output.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ServiceTier::PerKmStandard => "per-km-standard",
            ServiceTier::PerKmPremium => "per-km-premium",
            ServiceTier::FlatStandard => "flat-standard",
            ServiceTier::FlatPremium => "flat-premium",
        }
    }

    #[must_use]
    pub fn fixed_fee(self) -> Decimal {
        match self {
            ServiceTier::PerKmStandard | ServiceTier::PerKmPremium => Decimal::ZERO,
            ServiceTier::FlatStandard => Decimal::new(1600, 0),
            ServiceTier::FlatPremium => Decimal::new(1800, 0),
        }
    }

    #[must_use]
    pub fn rate_per_km(self) -> Decimal {
        match self {
            ServiceTier::PerKmStandard => Decimal::new(2404, 2),
            ServiceTier::PerKmPremium => Decimal::new(2932, 2),
            ServiceTier::FlatStandard => Decimal::new(17, 0),
            ServiceTier::FlatPremium => Decimal::new(20, 0),
        }
    }

    /// Kilometers included in the fixed fee; `None` for per-km tiers.
    #[must_use]
    pub fn free_threshold_km(self) -> Option<u32> {
        match self {
            ServiceTier::PerKmStandard | ServiceTier::PerKmPremium => None,
            ServiceTier::FlatStandard | ServiceTier::FlatPremium => Some(FREE_THRESHOLD_KM),
        }
    }
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ServiceTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ServiceTier::ALL
            .into_iter()
            .find(|tier| tier.id() == wanted)
            .ok_or_else(|| PricingError::InvalidServiceTier(s.to_string()))
    }
}

/// Cost of servicing a workshop `distance_km` away under `tier`.
///
/// The amount is not rounded; formatting is left to the caller.
///
/// # Errors
///
/// Returns [`PricingError::NegativeDistance`] for a negative distance and
/// [`PricingError::InvalidDistance`] for NaN, infinite or unrepresentable
/// values.
pub fn compute_cost(distance_km: f64, tier: ServiceTier) -> Result<Decimal, PricingError> {
    if !distance_km.is_finite() {
        return Err(PricingError::InvalidDistance(distance_km));
    }
    if distance_km < 0.0 {
        return Err(PricingError::NegativeDistance(distance_km));
    }
    let distance =
        Decimal::try_from(distance_km).map_err(|_| PricingError::InvalidDistance(distance_km))?;

    let billable = match tier.free_threshold_km() {
        Some(threshold) => (distance - Decimal::from(threshold)).max(Decimal::ZERO),
        None => distance,
    };

    billable
        .checked_mul(tier.rate_per_km())
        .and_then(|overage| overage.checked_add(tier.fixed_fee()))
        .ok_or(PricingError::InvalidDistance(distance_km))
}
