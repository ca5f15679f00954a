use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which distance formula ranks workshops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricKind {
    #[default]
    Geodesic,
    Haversine,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricKind::Geodesic => write!(f, "geodesic"),
            MetricKind::Haversine => write!(f, "haversine"),
        }
    }
}

impl std::str::FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geodesic" => Ok(MetricKind::Geodesic),
            "haversine" => Ok(MetricKind::Haversine),
            other => Err(format!(
                "unknown distance metric '{other}'; expected 'geodesic' or 'haversine'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub data_path: PathBuf,
    pub log_level: String,
    /// Number of nearest workshops returned per query. Always at least 1.
    pub result_limit: usize,
    pub distance_metric: MetricKind,
    /// Prefix used when printing cost amounts.
    pub currency_symbol: String,
}
