//! Workshop records and the dataset they are loaded into.
//!
//! The dataset is read once from a CSV file and never mutated afterwards.
//! Header names are trimmed and lower-cased before lookup, so `" Body Shop"`
//! and `"body shop"` name the same column.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::distance::Coordinate;
use crate::DatasetError;

pub const COL_PINCODE: &str = "pincode";
pub const COL_CHANNEL: &str = "channel";
pub const COL_BODY_SHOP: &str = "body shop";
pub const COL_STATE: &str = "state";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// Columns that must be present for the dataset to load. `pincode` is not
/// among them: without it every pincode query falls back to unranked rows.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_CHANNEL,
    COL_BODY_SHOP,
    COL_STATE,
    COL_LATITUDE,
    COL_LONGITUDE,
];

/// One workshop row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workshop {
    /// Zero-based position in the source file.
    pub row: usize,
    pub pincode: Option<String>,
    pub channel: Option<String>,
    pub body_shop: Option<String>,
    pub state: Option<String>,
    /// `None` when latitude or longitude is missing, unparsable or out of
    /// range. Such workshops are never ranked.
    pub location: Option<Coordinate>,
    /// Every other column, keyed by normalized header. Serialized under
    /// `columns` so a sheet column named like a field above cannot shadow it.
    #[serde(rename = "columns")]
    pub extra: BTreeMap<String, String>,
}

/// The distinct values offered for each categorical filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// In order of first appearance.
    pub channels: Vec<String>,
    /// Sorted.
    pub body_shops: Vec<String>,
    /// In order of first appearance.
    pub states: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    workshops: Vec<Workshop>,
}

impl Dataset {
    #[must_use]
    pub fn new(headers: Vec<String>, workshops: Vec<Workshop>) -> Self {
        Self { headers, workshops }
    }

    /// Normalized header names in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }

    /// Location of the first workshop whose pincode equals `pincode` and
    /// which has usable coordinates.
    #[must_use]
    pub fn locate_pincode(&self, pincode: &str) -> Option<Coordinate> {
        let wanted = pincode.trim();
        self.workshops
            .iter()
            .filter(|w| w.pincode.as_deref() == Some(wanted))
            .find_map(|w| w.location)
    }

    #[must_use]
    pub fn facets(&self) -> Facets {
        let channels = distinct_in_order(self.workshops.iter().map(|w| w.channel.as_deref()));
        let mut body_shops =
            distinct_in_order(self.workshops.iter().map(|w| w.body_shop.as_deref()));
        body_shops.sort();
        let states = distinct_in_order(self.workshops.iter().map(|w| w.state.as_deref()));
        Facets {
            channels,
            body_shops,
            states,
        }
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Load the workshop dataset from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened,
/// [`DatasetError::Csv`] if it is not valid CSV, and
/// [`DatasetError::MissingColumns`] naming every required column that is absent.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let dataset = read_dataset(file)?;
    tracing::info!(
        path = %path.display(),
        workshops = dataset.len(),
        "loaded workshop dataset"
    );
    Ok(dataset)
}

/// Parse a workshop dataset from any CSV source.
///
/// # Errors
///
/// See [`load_dataset`].
pub fn read_dataset<R: Read>(source: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let index_of = |name: &str| headers.iter().position(|h| h == name);
    let pincode_idx = index_of(COL_PINCODE);
    let channel_idx = index_of(COL_CHANNEL);
    let body_shop_idx = index_of(COL_BODY_SHOP);
    let state_idx = index_of(COL_STATE);
    let lat_idx = index_of(COL_LATITUDE);
    let lon_idx = index_of(COL_LONGITUDE);
    let known = [
        pincode_idx,
        channel_idx,
        body_shop_idx,
        state_idx,
        lat_idx,
        lon_idx,
    ];

    let mut workshops = Vec::new();
    let mut unlocated = 0_usize;
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let location = parse_location(cell(lat_idx).as_deref(), cell(lon_idx).as_deref());
        if location.is_none() {
            unlocated += 1;
            tracing::warn!(row, "workshop has no usable coordinates; excluded from ranking");
        }

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !known.contains(&Some(*i)))
            .filter_map(|(i, h)| {
                record
                    .get(i)
                    .filter(|v| !v.is_empty())
                    .map(|v| (h.clone(), v.to_string()))
            })
            .collect();

        workshops.push(Workshop {
            row,
            pincode: cell(pincode_idx),
            channel: cell(channel_idx),
            body_shop: cell(body_shop_idx),
            state: cell(state_idx),
            location,
            extra,
        });
    }

    if unlocated > 0 {
        tracing::warn!(unlocated, "some workshops lack coordinates");
    }

    Ok(Dataset::new(headers, workshops))
}

/// Trim and lower-case a header name.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn parse_location(lat: Option<&str>, lon: Option<&str>) -> Option<Coordinate> {
    let lat = lat?.parse::<f64>().ok()?;
    let lon = lon?.parse::<f64>().ok()?;
    Coordinate::new(lat, lon).ok()
}

#[cfg(test)]
#[path = "workshops_test.rs"]
mod tests;
