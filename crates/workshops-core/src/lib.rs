pub mod app_config;
pub mod config;
pub mod distance;
pub mod pricing;
pub mod ranking;
pub mod search;
pub mod workshops;

pub use app_config::{AppConfig, Environment, MetricKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{Coordinate, DistanceMetric, Geodesic, Haversine};
pub use pricing::{compute_cost, ServiceTier, FREE_THRESHOLD_KM};
pub use ranking::{rank_by_distance, RankedWorkshop};
pub use search::{search, Filters, Query, Reference, SearchOutcome, SearchRequest, SearchRow};
pub use workshops::{load_dataset, read_dataset, Dataset, Facets, Workshop};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while loading the workshop dataset. All of them are fatal:
/// no query can run without a valid dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing columns in the dataset: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("pincode must not be empty")]
    EmptyPincode,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("invalid service tier: {0}")]
    InvalidServiceTier(String),

    #[error("distance must not be negative, got {0} km")]
    NegativeDistance(f64),

    #[error("distance must be a finite number, got {0}")]
    InvalidDistance(f64),
}
