use std::collections::BTreeMap;

use crate::network::FlightNetwork;

/// In- and out-degree of every airport in a network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Degrees {
    pub in_degree: BTreeMap<String, usize>,
    pub out_degree: BTreeMap<String, usize>,
}

impl Degrees {
    /// Counts edges per airport. Both maps are seeded with zero for every
    /// airport before the edge pass, so isolated airports still appear.
    pub fn from_network(network: &FlightNetwork) -> Self {
        let mut in_degree: BTreeMap<String, usize> = network
            .airports()
            .map(|code| (code.to_string(), 0))
            .collect();
        let mut out_degree = in_degree.clone();

        for (origin, destination, _) in network.edges() {
            if let Some(d) = out_degree.get_mut(origin) {
                *d += 1;
            }
            if let Some(d) = in_degree.get_mut(destination) {
                *d += 1;
            }
        }

        Degrees {
            in_degree,
            out_degree,
        }
    }

    /// Total degree (in + out) per airport, in `airports` order.
    pub fn totals<'a>(&self, airports: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
        airports
            .map(|code| {
                let total = self.in_degree.get(code).copied().unwrap_or(0)
                    + self.out_degree.get(code).copied().unwrap_or(0);
                (code, total)
            })
            .collect()
    }
}

/// Counts how many airports share each degree value.
pub fn distribution(degrees: &BTreeMap<String, usize>) -> BTreeMap<usize, usize> {
    let mut dist = BTreeMap::new();
    for &d in degrees.values() {
        *dist.entry(d).or_insert(0) += 1;
    }
    dist
}
