use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::types::RouteSegment;
use crate::record::RouteRecord;

/// Grouping key: route plus the bit patterns of its four coordinates, so
/// records for the same pair with different coordinates stay apart.
type SegmentKey = (String, String, [u64; 4]);

/// Collapses records into map-ready route segments.
///
/// Records missing any coordinate are dropped. The rest are grouped by route
/// and coordinates with passengers summed; groups with no passengers are
/// dropped. Output is ordered by route.
pub fn route_segments(records: &[RouteRecord]) -> Vec<RouteSegment> {
    let mut groups: BTreeMap<SegmentKey, ([f64; 4], u64)> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let (Some(olat), Some(olong), Some(dlat), Some(dlong)) = (
            record.origin_lat,
            record.origin_long,
            record.dest_lat,
            record.dest_long,
        ) else {
            skipped += 1;
            continue;
        };
        let coords = [olat, olong, dlat, dlong];
        let key = (
            record.origin.clone(),
            record.destination.clone(),
            coords.map(f64::to_bits),
        );
        let total = &mut groups.entry(key).or_insert((coords, 0)).1;
        *total = total.saturating_add(record.passengers);
    }

    debug!(skipped, groups = groups.len(), "Route segments grouped");

    groups
        .into_iter()
        .filter(|(_, (_, passengers))| *passengers > 0)
        .map(|((origin, destination, _), (c, passengers))| RouteSegment {
            origin,
            destination,
            origin_lat: c[0],
            origin_long: c[1],
            dest_lat: c[2],
            dest_long: c[3],
            passengers,
        })
        .collect()
}
