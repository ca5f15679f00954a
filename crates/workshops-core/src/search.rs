//! Query orchestration: resolve the reference point, rank, filter, and
//! optionally price each result.
//!
//! Filters are applied to the ranked (or browsed) rows, not before ranking,
//! so a filtered query shows those of the nearest `limit` workshops that
//! match.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::distance::{Coordinate, DistanceMetric};
use crate::pricing::{compute_cost, ServiceTier};
use crate::ranking::{rank_by_distance, RankedWorkshop};
use crate::workshops::{Dataset, Workshop};
use crate::SearchError;

/// Value that disables a categorical filter.
pub const ALL: &str = "All";

/// Where the search is anchored.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Resolved by exact match against the dataset's pincode column.
    Pincode(String),
    Coordinates(Coordinate),
}

/// Exact-match filters on categorical columns. `None` disables a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub channel: Option<String>,
    pub body_shop: Option<String>,
    pub state: Option<String>,
}

impl Filters {
    /// Build filters from user selections, treating `"All"` and blank values
    /// as "no filter".
    #[must_use]
    pub fn from_selection(
        channel: Option<&str>,
        body_shop: Option<&str>,
        state: Option<&str>,
    ) -> Self {
        fn pick(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty() && *v != ALL)
                .map(str::to_string)
        }
        Self {
            channel: pick(channel),
            body_shop: pick(body_shop),
            state: pick(state),
        }
    }

    #[must_use]
    pub fn matches(&self, workshop: &Workshop) -> bool {
        fn field_matches(filter: Option<&String>, value: Option<&String>) -> bool {
            filter.is_none_or(|f| value == Some(f))
        }
        field_matches(self.channel.as_ref(), workshop.channel.as_ref())
            && field_matches(self.body_shop.as_ref(), workshop.body_shop.as_ref())
            && field_matches(self.state.as_ref(), workshop.state.as_ref())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channel.is_none() && self.body_shop.is_none() && self.state.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: Option<Query>,
    pub filters: Filters,
    /// When set, every ranked row gets an estimated cost for this tier.
    pub tier: Option<ServiceTier>,
}

/// How the reference point of a search was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reference {
    /// No query was given; rows are listed in dataset order.
    Browse,
    Resolved { coordinate: Coordinate },
    /// The pincode matched no located workshop; the first rows of the
    /// dataset are returned without distances.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRow<'a> {
    #[serde(flatten)]
    pub ranked: RankedWorkshop<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    pub reference: Reference,
    pub rows: Vec<SearchRow<'a>>,
}

impl SearchOutcome<'_> {
    /// `true` when the filters left nothing to show. A normal outcome, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve a query against the dataset.
///
/// # Errors
///
/// Returns [`SearchError::EmptyPincode`] for a blank pincode.
pub fn resolve_reference(dataset: &Dataset, query: &Query) -> Result<Reference, SearchError> {
    match query {
        Query::Coordinates(coordinate) => Ok(Reference::Resolved {
            coordinate: *coordinate,
        }),
        Query::Pincode(code) => {
            if code.trim().is_empty() {
                return Err(SearchError::EmptyPincode);
            }
            Ok(dataset
                .locate_pincode(code)
                .map_or(Reference::Unresolved, |coordinate| Reference::Resolved {
                    coordinate,
                }))
        }
    }
}

/// Run one search against the dataset.
///
/// # Errors
///
/// Returns [`SearchError::EmptyPincode`] for a blank pincode and
/// [`SearchError::Pricing`] if a cost cannot be computed for a ranked row.
pub fn search<'a, M: DistanceMetric + ?Sized>(
    dataset: &'a Dataset,
    request: &SearchRequest,
    metric: &M,
    limit: usize,
) -> Result<SearchOutcome<'a>, SearchError> {
    let reference = match &request.query {
        None => Reference::Browse,
        Some(query) => resolve_reference(dataset, query)?,
    };

    let candidates: Vec<RankedWorkshop<'a>> = match reference {
        Reference::Browse => dataset
            .workshops()
            .iter()
            .map(RankedWorkshop::unranked)
            .collect(),
        Reference::Resolved { coordinate } => {
            rank_by_distance(metric, coordinate, dataset.workshops(), limit)
        }
        Reference::Unresolved => {
            tracing::warn!(
                query = ?request.query,
                "pincode not found in dataset; returning unranked workshops"
            );
            dataset
                .workshops()
                .iter()
                .take(limit)
                .map(RankedWorkshop::unranked)
                .collect()
        }
    };

    let rows = candidates
        .into_iter()
        .filter(|r| request.filters.matches(r.workshop))
        .map(|ranked| {
            let cost = match (request.tier, ranked.distance_km) {
                (Some(tier), Some(km)) => Some(compute_cost(km, tier)?),
                _ => None,
            };
            Ok(SearchRow { ranked, cost })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    tracing::debug!(
        reference = ?reference,
        filters = ?request.filters,
        rows = rows.len(),
        "search complete"
    );

    Ok(SearchOutcome { reference, rows })
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
