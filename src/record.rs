//! Route records as they arrive from the loader.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NetworkError;

/// One validated row of the route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub passengers: u64,
    pub flights: u64,
    pub origin_lat: Option<f64>,
    pub origin_long: Option<f64>,
    pub dest_lat: Option<f64>,
    pub dest_long: Option<f64>,
}

impl RouteRecord {
    /// Builds a record without coordinates.
    pub fn new(origin: &str, destination: &str, passengers: u64, flights: u64) -> Self {
        RouteRecord {
            origin: origin.to_string(),
            destination: destination.to_string(),
            passengers,
            flights,
            origin_lat: None,
            origin_long: None,
            dest_lat: None,
            dest_long: None,
        }
    }

    /// Attaches endpoint coordinates as `(lat, long)` pairs.
    pub fn with_coordinates(mut self, origin: (f64, f64), destination: (f64, f64)) -> Self {
        self.origin_lat = Some(origin.0);
        self.origin_long = Some(origin.1);
        self.dest_lat = Some(destination.0);
        self.dest_long = Some(destination.1);
        self
    }

    pub fn route_key(&self) -> RouteKey {
        RouteKey::new(&self.origin, &self.destination)
    }
}

/// A single row deserialized from the route CSV, before validation.
///
/// Columns not listed here (cities, seats, distance, fly date, populations)
/// are ignored by the deserializer.
#[derive(Debug, Deserialize)]
pub struct RawRouteRow {
    #[serde(rename = "Origin_airport")]
    pub(crate) origin: Option<String>,
    #[serde(rename = "Destination_airport")]
    pub(crate) destination: Option<String>,
    #[serde(rename = "Passengers")]
    pub(crate) passengers: u64,
    #[serde(rename = "Flights")]
    pub(crate) flights: u64,
    #[serde(rename = "Org_airport_lat", default)]
    pub(crate) origin_lat: Option<f64>,
    #[serde(rename = "Org_airport_long", default)]
    pub(crate) origin_long: Option<f64>,
    #[serde(rename = "Dest_airport_lat", default)]
    pub(crate) dest_lat: Option<f64>,
    #[serde(rename = "Dest_airport_long", default)]
    pub(crate) dest_long: Option<f64>,
}

impl TryFrom<(usize, RawRouteRow)> for RouteRecord {
    type Error = NetworkError;

    /// Validates a raw row; `row` is the 1-based data row number used in errors.
    fn try_from((row, raw): (usize, RawRouteRow)) -> Result<Self, Self::Error> {
        let origin = airport_code(raw.origin, row, "Origin_airport")?;
        let destination = airport_code(raw.destination, row, "Destination_airport")?;
        Ok(RouteRecord {
            origin,
            destination,
            passengers: raw.passengers,
            flights: raw.flights,
            origin_lat: raw.origin_lat,
            origin_long: raw.origin_long,
            dest_lat: raw.dest_lat,
            dest_long: raw.dest_long,
        })
    }
}

fn airport_code(
    value: Option<String>,
    row: usize,
    column: &'static str,
) -> Result<String, NetworkError> {
    // codes are kept verbatim; whitespace-only counts as missing
    match value {
        Some(code) if !code.trim().is_empty() => Ok(code),
        _ => Err(NetworkError::MissingAirportCode { row, column }),
    }
}

/// Directed (origin, destination) pair used to group records.
///
/// Orders by origin, then destination. Serializes as `ORIG->DEST` so it can
/// key a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: &str, destination: &str) -> Self {
        RouteKey {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}

impl Serialize for RouteKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(origin: Option<&str>, destination: Option<&str>) -> RawRouteRow {
        RawRouteRow {
            origin: origin.map(str::to_string),
            destination: destination.map(str::to_string),
            passengers: 10,
            flights: 1,
            origin_lat: None,
            origin_long: None,
            dest_lat: None,
            dest_long: None,
        }
    }

    #[test]
    fn test_try_from_valid_row() {
        let record = RouteRecord::try_from((1, raw(Some("MHK"), Some("AMW")))).unwrap();
        assert_eq!(record, RouteRecord::new("MHK", "AMW", 10, 1));
    }

    #[test]
    fn test_try_from_keeps_codes_verbatim() {
        let record = RouteRecord::try_from((1, raw(Some(" EUG "), Some("RDM")))).unwrap();
        assert_eq!(record.origin, " EUG ");
    }

    #[test]
    fn test_try_from_missing_origin() {
        let err = RouteRecord::try_from((4, raw(None, Some("RDM")))).unwrap_err();
        match err {
            NetworkError::MissingAirportCode { row, column } => {
                assert_eq!(row, 4);
                assert_eq!(column, "Origin_airport");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_try_from_blank_destination() {
        let err = RouteRecord::try_from((2, raw(Some("EUG"), Some("  ")))).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::MissingAirportCode {
                column: "Destination_airport",
                ..
            }
        ));
    }

    #[test]
    fn test_route_key_display_and_order() {
        let a = RouteKey::new("ATL", "ORD");
        let b = RouteKey::new("ATL", "SEA");
        let c = RouteKey::new("BOS", "ATL");
        assert_eq!(a.to_string(), "ATL->ORD");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_route_key_as_json_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(RouteKey::new("A", "B"), 150u64);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"A->B":150}"#);
    }
}
