//! Text and JSON report of an analysis run.

use chrono::Utc;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::analyzers::degree::distribution;
use crate::analyzers::types::{AnalysisResult, AnalysisSummary, RankedRoute};
use crate::record::RouteKey;

/// Default number of routes listed in each ranking.
pub const DEFAULT_TOP_ROUTES: usize = 10;

impl AnalysisSummary {
    /// Builds the report for `result`, keeping the `top_n` highest routes in
    /// each ranking.
    pub fn from_result(result: &AnalysisResult, top_n: usize) -> Self {
        let busiest_routes = top_routes(
            result
                .route_passenger_flow
                .iter()
                .map(|(k, &v)| (k, v as f64)),
            top_n,
        );
        // zero-flight routes have no meaningful efficiency and must not rank
        let most_efficient_routes = top_routes(
            result
                .route_avg_passengers_per_flight
                .iter()
                .filter(|(_, v)| v.is_finite())
                .map(|(k, &v)| (k, v)),
            top_n,
        );

        let mut hubs = result.hub_set.clone();
        hubs.sort();

        AnalysisSummary {
            generated_at: Utc::now(),
            airports: result.node_count,
            routes: result.edge_count,
            density: result.density,
            in_degree_distribution: distribution(&result.in_degree),
            out_degree_distribution: distribution(&result.out_degree),
            busiest_routes,
            most_efficient_routes,
            hub_threshold: result.hub_threshold,
            hubs,
        }
    }
}

/// Sorts descending by value, breaking ties by route, and keeps `n`.
fn top_routes<'a>(routes: impl Iterator<Item = (&'a RouteKey, f64)>, n: usize) -> Vec<RankedRoute> {
    let mut ranked: Vec<_> = routes.collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
        .into_iter()
        .take(n)
        .map(|(route, value)| RankedRoute {
            route: route.clone(),
            value,
        })
        .collect()
}

fn write_distribution(f: &mut fmt::Formatter<'_>, label: &str, dist: &BTreeMap<usize, usize>) -> fmt::Result {
    writeln!(f, "\n{label} distribution (degree: airports):")?;
    for (degree, count) in dist {
        writeln!(f, "  {degree:>4}: {count}")?;
    }
    Ok(())
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of airports (nodes): {}", self.airports)?;
        writeln!(f, "Number of routes (edges): {}", self.routes)?;
        writeln!(f, "Graph density: {:.4}", self.density)?;

        write_distribution(f, "In-degree", &self.in_degree_distribution)?;
        write_distribution(f, "Out-degree", &self.out_degree_distribution)?;

        writeln!(f, "\nTop {} busiest routes by passenger flow:", self.busiest_routes.len())?;
        for r in &self.busiest_routes {
            writeln!(f, "  {:<12} {:>12.0}", r.route.to_string(), r.value)?;
        }

        writeln!(
            f,
            "\nTop {} routes by passengers per flight:",
            self.most_efficient_routes.len()
        )?;
        for r in &self.most_efficient_routes {
            writeln!(f, "  {:<12} {:>12.2}", r.route.to_string(), r.value)?;
        }

        writeln!(
            f,
            "\nHubs (total degree above {:.2}): {}",
            self.hub_threshold,
            self.hubs.len()
        )?;
        for hub in &self.hubs {
            writeln!(f, "  {hub}")?;
        }
        Ok(())
    }
}
