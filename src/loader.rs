//! CSV loader for route records.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{NetworkError, Result};
use crate::record::{RawRouteRow, RouteRecord};

/// Reads route records from a CSV file, decompressing it first when the path
/// ends in `.gz`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a row fails to deserialize,
/// or a row lacks an airport code. The first bad row aborts the load.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RouteRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        debug!("Reading gzip compressed routes");
        load_records_from_reader(GzDecoder::new(file))?
    } else {
        load_records_from_reader(file)?
    };

    info!(records = records.len(), "Route records loaded");
    Ok(records)
}

/// Parses route records from any reader producing CSV with a header row.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut records = Vec::new();

    for (i, result) in rdr.deserialize::<RawRouteRow>().enumerate() {
        let raw = result?;
        records.push(RouteRecord::try_from((i + 1, raw))?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::env;
    use std::fs;
    use std::io::Write;

    const HEADER: &str = "Origin_airport,Destination_airport,Origin_city,Passengers,Seats,Flights";

    #[test]
    fn test_load_ignores_extra_columns() {
        let csv = format!("{HEADER}\nMHK,AMW,\"Manhattan, KS\",21,30,1\nEUG,RDM,\"Eugene, OR\",41,396,22\n");
        let records = load_records_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RouteRecord::new("MHK", "AMW", 21, 1));
        assert_eq!(records[1].flights, 22);
        assert_eq!(records[1].origin_lat, None);
    }

    #[test]
    fn test_load_reads_coordinates() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights,Org_airport_lat,Org_airport_long,Dest_airport_lat,Dest_airport_long\n\
                   EUG,RDM,41,22,44.12,-123.21,44.25,-121.15\n\
                   RDM,EUG,10,2,,,44.12,-123.21\n";
        let records = load_records_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(records[0].origin_lat, Some(44.12));
        assert_eq!(records[0].dest_long, Some(-121.15));
        assert_eq!(records[1].origin_lat, None);
        assert_eq!(records[1].dest_lat, Some(44.12));
    }

    #[test]
    fn test_load_empty_file_with_header() {
        let csv = format!("{HEADER}\n");
        let records = load_records_from_reader(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_missing_code_reports_row() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights\nA,B,1,1\n,C,2,1\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            NetworkError::MissingAirportCode { row, column } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Origin_airport");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_keeps_padded_codes_distinct() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights\nEUG,RDM,1,1\n EUG ,RDM,2,1\n";
        let records = load_records_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records[0].origin, "EUG");
        assert_eq!(records[1].origin, " EUG ");

        let (network, _) = crate::network::build(records);
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn test_load_blank_code_is_missing() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights\nA,   ,1,1\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::MissingAirportCode {
                row: 1,
                column: "Destination_airport"
            }
        ));
    }

    #[test]
    fn test_load_non_numeric_passengers() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights\nA,B,lots,1\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, NetworkError::Csv { .. }));
    }

    #[test]
    fn test_load_negative_flights() {
        let csv = "Origin_airport,Destination_airport,Passengers,Flights\nA,B,10,-1\n";
        assert!(load_records_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records("/nonexistent/flight_network/routes.csv").unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[test]
    fn test_load_records_gzip() {
        let path = format!("{}/flight_network_test_routes.csv.gz", env::temp_dir().display());
        let _ = fs::remove_file(&path);

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(b"Origin_airport,Destination_airport,Passengers,Flights\nA,B,100,2\n")
            .unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records, vec![RouteRecord::new("A", "B", 100, 2)]);

        fs::remove_file(&path).unwrap();
    }
}
