//! Geographic location types shared by queries, series and analyses.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weather_odds::LatLon;
///
/// let cairo = LatLon(30.0444, 31.2357);
/// assert_eq!(cairo.0, 30.0444); // Latitude
/// assert_eq!(cairo.1, 31.2357); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A named place an analysis is run for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Identifier assigned by whoever stores locations, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, e.g. "Cairo, Egypt".
    pub name: String,
    /// Latitude in decimal degrees (positive for North).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East).
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Location {
    /// Creates a location with only a name and coordinates.
    pub fn new(name: impl Into<String>, coordinate: LatLon) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude: coordinate.0,
            longitude: coordinate.1,
            country: None,
            region: None,
        }
    }

    pub fn coordinate(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }

    /// Whether both refer to the same place: equal ids when both carry one,
    /// otherwise equal names and coordinates.
    pub fn same_place(&self, other: &Location) -> bool {
        match (&self.id, &other.id) {
            (Some(id), Some(other_id)) => id == other_id,
            _ => self.name == other.name && self.coordinate() == other.coordinate(),
        }
    }
}
