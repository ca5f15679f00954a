//! Coordinates and the distance functions used to rank workshops.
//!
//! Ranking only depends on [`DistanceMetric`], so a different formula (or a
//! spatial index that answers the same question) can be plugged in without
//! touching the ranking code.

use ::geo::{GeodesicDistance, HaversineDistance, Point};
use serde::{Deserialize, Serialize};

use crate::app_config::MetricKind;
use crate::SearchError;

const METERS_PER_KM: f64 = 1000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is NaN.
    pub fn new(lat: f64, lon: f64) -> Result<Self, SearchError> {
        if lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
        {
            Ok(Self { lat, lon })
        } else {
            Err(SearchError::InvalidCoordinate { lat, lon })
        }
    }

    // geo points are (x = lon, y = lat)
    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Surface distance between two coordinates, in kilometers.
pub trait DistanceMetric {
    fn distance_km(&self, a: Coordinate, b: Coordinate) -> f64;
}

/// Shortest path on the WGS-84 ellipsoid (Karney's algorithm).
#[derive(Debug, Clone, Copy, Default)]
pub struct Geodesic;

impl DistanceMetric for Geodesic {
    fn distance_km(&self, a: Coordinate, b: Coordinate) -> f64 {
        a.to_point().geodesic_distance(&b.to_point()) / METERS_PER_KM
    }
}

/// Great-circle distance on a sphere of mean Earth radius.
///
/// Cheaper than [`Geodesic`] and within ~0.5% of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_km(&self, a: Coordinate, b: Coordinate) -> f64 {
        a.to_point().haversine_distance(&b.to_point()) / METERS_PER_KM
    }
}

impl DistanceMetric for MetricKind {
    fn distance_km(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            MetricKind::Geodesic => Geodesic.distance_km(a, b),
            MetricKind::Haversine => Haversine.distance_km(a, b),
        }
    }
}
