//! Directed airport network built from route records.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::record::RouteRecord;

/// Graph vertex: an airport identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: String,
}

/// Traffic attributes of the most recent record seen for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEdge {
    pub passengers: u64,
    pub flights: u64,
}

/// Directed graph of airports and the routes between them.
#[derive(Debug, Default)]
pub struct FlightNetwork {
    graph: DiGraph<Airport, RouteEdge>,
    /// Node lookup by airport code
    index: HashMap<String, NodeIndex>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `code`, adding it on first sight.
    fn ensure_airport(&mut self, code: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(code) {
            return idx;
        }
        let idx = self.graph.add_node(Airport {
            code: code.to_string(),
        });
        self.index.insert(code.to_string(), idx);
        idx
    }

    /// Sets the edge `origin -> destination`, replacing any previous attributes.
    pub fn set_route(&mut self, origin: &str, destination: &str, edge: RouteEdge) {
        let from = self.ensure_airport(origin);
        let to = self.ensure_airport(destination);
        self.graph.update_edge(from, to, edge);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Airport codes in the order they were first seen.
    pub fn airports(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|a| a.code.as_str())
    }

    /// Every edge as `(origin, destination, attributes)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &RouteEdge)> {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].code.as_str(),
                self.graph[e.target()].code.as_str(),
                e.weight(),
            )
        })
    }

    pub fn route(&self, origin: &str, destination: &str) -> Option<&RouteEdge> {
        let from = *self.index.get(origin)?;
        let to = *self.index.get(destination)?;
        self.graph.find_edge(from, to).map(|e| &self.graph[e])
    }
}

/// Builds the network from `records`, returning it alongside the untouched
/// record set.
///
/// Records are applied in order; a later record for the same
/// (origin, destination) pair overwrites the edge attributes of an earlier
/// one instead of adding to them.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn build(records: Vec<RouteRecord>) -> (FlightNetwork, Vec<RouteRecord>) {
    let mut network = FlightNetwork::new();

    for record in &records {
        network.set_route(
            &record.origin,
            &record.destination,
            RouteEdge {
                passengers: record.passengers,
                flights: record.flights,
            },
        );
    }

    debug!(
        airports = network.node_count(),
        routes = network.edge_count(),
        "Flight network built"
    );

    (network, records)
}
