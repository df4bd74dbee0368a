use tracing::{debug, info, warn};

use crate::analyzers::aggregate::{passenger_flow, passengers_per_flight, route_totals};
use crate::analyzers::degree::Degrees;
use crate::analyzers::hubs::{DEFAULT_HUB_PERCENTILE, check_percentile, classify_hubs};
use crate::analyzers::types::AnalysisResult;
use crate::analyzers::utility::density;
use crate::error::Result;
use crate::network::FlightNetwork;
use crate::record::RouteRecord;

/// Analyzes `network` and the records it was built from with the default
/// hub percentile.
pub fn analyze(network: &FlightNetwork, records: &[RouteRecord]) -> AnalysisResult {
    run(network, records, DEFAULT_HUB_PERCENTILE)
}

/// Analyzes with a caller-chosen hub percentile.
///
/// # Errors
///
/// Returns [`NetworkError::InvalidPercentile`](crate::error::NetworkError::InvalidPercentile)
/// when `hub_percentile` is NaN or outside `[0, 100]`.
pub fn analyze_with_percentile(
    network: &FlightNetwork,
    records: &[RouteRecord],
    hub_percentile: f64,
) -> Result<AnalysisResult> {
    let hub_percentile = check_percentile(hub_percentile)?;
    Ok(run(network, records, hub_percentile))
}

/// Computes structural metrics from the network and route aggregates from
/// the raw records.
///
/// The two halves are independent: route flow sums every record for a pair,
/// while the network's edges only carry the last one.
#[tracing::instrument(skip(network, records), fields(records = records.len()))]
fn run(network: &FlightNetwork, records: &[RouteRecord], hub_percentile: f64) -> AnalysisResult {
    let node_count = network.node_count();
    let edge_count = network.edge_count();
    let density = density(node_count, edge_count);
    debug!(node_count, edge_count, density, "Structural counts");

    let degrees = Degrees::from_network(network);
    let totals = degrees.totals(network.airports());
    let (hub_threshold, hub_set) = classify_hubs(&totals, hub_percentile);
    debug!(hub_threshold, hubs = hub_set.len(), "Hubs classified");

    let route_totals = route_totals(records);
    let route_passenger_flow = passenger_flow(&route_totals);
    let route_avg_passengers_per_flight = passengers_per_flight(&route_totals);

    let non_finite = route_avg_passengers_per_flight
        .values()
        .filter(|v| !v.is_finite())
        .count();
    if non_finite > 0 {
        warn!(routes = non_finite, "Routes with zero flights have no passengers-per-flight value");
    }

    info!(
        airports = node_count,
        routes = edge_count,
        hubs = hub_set.len(),
        "Analysis complete"
    );

    AnalysisResult {
        node_count,
        edge_count,
        density,
        in_degree: degrees.in_degree,
        out_degree: degrees.out_degree,
        hub_threshold,
        hub_set,
        route_passenger_flow,
        route_avg_passengers_per_flight,
    }
}
