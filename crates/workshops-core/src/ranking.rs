//! Nearest-workshop selection.

use serde::Serialize;

use crate::distance::{Coordinate, DistanceMetric};
use crate::workshops::Workshop;

/// A workshop paired with its distance from the query point.
///
/// `distance_km` is `None` when no reference point could be resolved and the
/// row was returned unranked. That is a different state from a distance of
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWorkshop<'a> {
    pub workshop: &'a Workshop,
    pub distance_km: Option<f64>,
}

impl<'a> RankedWorkshop<'a> {
    #[must_use]
    pub fn unranked(workshop: &'a Workshop) -> Self {
        Self {
            workshop,
            distance_km: None,
        }
    }
}

/// The `k` candidates closest to `reference`, nearest first.
///
/// Candidates without a location are skipped. Equal distances keep their
/// dataset order. Returns fewer than `k` entries when fewer candidates have a
/// location, and nothing when `k` is zero.
pub fn rank_by_distance<'a, M: DistanceMetric + ?Sized>(
    metric: &M,
    reference: Coordinate,
    candidates: &'a [Workshop],
    k: usize,
) -> Vec<RankedWorkshop<'a>> {
    let mut ranked: Vec<RankedWorkshop<'a>> = candidates
        .iter()
        .filter_map(|workshop| {
            let location = workshop.location?;
            Some(RankedWorkshop {
                workshop,
                distance_km: Some(metric.distance_km(reference, location)),
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    ranked.truncate(k);
    ranked
}
