use std::collections::BTreeMap;

use crate::record::{RouteKey, RouteRecord};

/// Running passenger and flight totals for one route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteTotals {
    pub passengers: u64,
    pub flights: u64,
}

impl RouteTotals {
    /// Sums saturate at `u64::MAX` instead of wrapping.
    fn add(&mut self, record: &RouteRecord) {
        self.passengers = self.passengers.saturating_add(record.passengers);
        self.flights = self.flights.saturating_add(record.flights);
    }

    /// Passengers per flight. Zero flights gives NaN (0/0) or infinity.
    pub fn passengers_per_flight(&self) -> f64 {
        self.passengers as f64 / self.flights as f64
    }
}

/// Groups records by (origin, destination) and sums each group.
///
/// Every record contributes, so repeated pairs accumulate here even though
/// the network keeps only the last record's attributes for its edge.
pub fn route_totals(records: &[RouteRecord]) -> BTreeMap<RouteKey, RouteTotals> {
    let mut totals: BTreeMap<RouteKey, RouteTotals> = BTreeMap::new();
    for record in records {
        totals.entry(record.route_key()).or_default().add(record);
    }
    totals
}

/// Total passengers per route across all records.
pub fn passenger_flow(totals: &BTreeMap<RouteKey, RouteTotals>) -> BTreeMap<RouteKey, u64> {
    totals
        .iter()
        .map(|(k, t)| (k.clone(), t.passengers))
        .collect()
}

/// Summed passengers divided by summed flights per route.
pub fn passengers_per_flight(totals: &BTreeMap<RouteKey, RouteTotals>) -> BTreeMap<RouteKey, f64> {
    totals
        .iter()
        .map(|(k, t)| (k.clone(), t.passengers_per_flight()))
        .collect()
}
