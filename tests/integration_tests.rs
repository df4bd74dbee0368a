use flight_network::analyzers::analyzer::analyze;
use flight_network::analyzers::segments::route_segments;
use flight_network::analyzers::types::AnalysisSummary;
use flight_network::loader::{load_records, load_records_from_reader};
use flight_network::network::build;
use flight_network::record::RouteKey;

const FIXTURE: &[u8] = include_bytes!("fixtures/sample_routes.csv");

#[test]
fn test_full_pipeline() {
    let records = load_records_from_reader(FIXTURE).expect("Failed to load routes");
    assert_eq!(records.len(), 12);

    let (network, records) = build(records);
    let result = analyze(&network, &records);

    assert_eq!(result.node_count, 8);
    assert_eq!(result.edge_count, 10);
    assert!((result.density - 20.0 / 56.0).abs() < 1e-9);

    assert_eq!(result.out_degree["SEA"], 4);
    assert_eq!(result.in_degree["RDM"], 3);
    assert_eq!(result.out_degree["AMW"], 0);
    assert_eq!(result.in_degree["BOI"], 0);
    assert_eq!(result.out_degree.values().sum::<usize>(), result.edge_count);
    assert_eq!(result.in_degree.values().sum::<usize>(), result.edge_count);

    // totals sorted [1, 1, 1, 2, 3, 3, 3, 6] -> P90 = 3 + 0.3 * 3
    assert!((result.hub_threshold - 3.9).abs() < 1e-9);
    assert_eq!(result.hub_set, vec!["SEA".to_string()]);
}

#[test]
fn test_repeated_route_edge_vs_flow() {
    let records = load_records_from_reader(FIXTURE).unwrap();
    let (network, records) = build(records);
    let result = analyze(&network, &records);

    let edge = network.route("EUG", "RDM").unwrap();
    assert_eq!(edge.passengers, 11);
    assert_eq!(edge.flights, 4);

    let key = RouteKey::new("EUG", "RDM");
    assert_eq!(result.route_passenger_flow[&key], 140);
    assert!((result.route_avg_passengers_per_flight[&key] - 140.0 / 45.0).abs() < 1e-9);
}

#[test]
fn test_zero_flight_route_in_summary() {
    let records = load_records_from_reader(FIXTURE).unwrap();
    let (network, records) = build(records);
    let result = analyze(&network, &records);

    assert!(result.route_avg_passengers_per_flight[&RouteKey::new("BOI", "SEA")].is_nan());

    let summary = AnalysisSummary::from_result(&result, 20);
    assert_eq!(summary.most_efficient_routes.len(), 9);
    assert_eq!(summary.most_efficient_routes[0].route, RouteKey::new("SEA", "PDX"));
    assert_eq!(summary.busiest_routes[0].value, 5400.0);
    assert!(
        summary
            .most_efficient_routes
            .iter()
            .all(|r| r.value.is_finite())
    );
}

#[test]
fn test_route_segments_from_fixture() {
    let records = load_records_from_reader(FIXTURE).unwrap();
    let segments = route_segments(&records);

    let routes: Vec<_> = segments
        .iter()
        .map(|s| format!("{}->{}", s.origin, s.destination))
        .collect();
    assert_eq!(
        routes,
        vec![
            "EUG->RDM", "PDX->EUG", "PDX->SEA", "SEA->EUG", "SEA->MFR", "SEA->PDX", "SEA->RDM"
        ]
    );
    assert_eq!(segments[0].passengers, 140);
}

#[test]
fn test_load_records_from_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_routes.csv");
    let records = load_records(path).unwrap();
    assert_eq!(records.len(), 12);
    assert_eq!(records[0].origin, "MHK");
    assert_eq!(records[0].dest_lat, None);
}
