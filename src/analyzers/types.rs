//! Data types produced by the analysis pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::record::RouteKey;

/// Structural and traffic metrics for one analysis run.
///
/// Degree maps hold an entry for every airport, including those with degree
/// zero. Route maps are keyed by the pairs present in the record set.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub in_degree: BTreeMap<String, usize>,
    pub out_degree: BTreeMap<String, usize>,
    /// Percentile of total degree a hub must strictly exceed
    pub hub_threshold: f64,
    /// Hub airports in network order
    pub hub_set: Vec<String>,
    pub route_passenger_flow: BTreeMap<RouteKey, u64>,
    /// May hold NaN or infinity for routes flown zero times
    pub route_avg_passengers_per_flight: BTreeMap<RouteKey, f64>,
}

impl AnalysisResult {
    pub fn is_hub(&self, code: &str) -> bool {
        self.hub_set.iter().any(|h| h == code)
    }

    pub fn total_degree(&self, code: &str) -> Option<usize> {
        Some(self.in_degree.get(code)? + self.out_degree.get(code)?)
    }
}

/// A route with the value it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRoute {
    pub route: RouteKey,
    pub value: f64,
}

/// Report derived from an [`AnalysisResult`] for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub generated_at: DateTime<Utc>,
    pub airports: usize,
    pub routes: usize,
    pub density: f64,
    /// degree -> number of airports with that in-degree
    pub in_degree_distribution: BTreeMap<usize, usize>,
    pub out_degree_distribution: BTreeMap<usize, usize>,
    pub busiest_routes: Vec<RankedRoute>,
    pub most_efficient_routes: Vec<RankedRoute>,
    pub hub_threshold: f64,
    pub hubs: Vec<String>,
}

/// Route prepared for a map renderer: endpoint coordinates plus the total
/// passengers flown between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub origin: String,
    pub destination: String,
    pub origin_lat: f64,
    pub origin_long: f64,
    pub dest_lat: f64,
    pub dest_long: f64,
    pub passengers: u64,
}
