use crate::analyzers::utility::percentile;
use crate::error::{NetworkError, Result};

/// Default percentile of total degree a hub must exceed.
pub const DEFAULT_HUB_PERCENTILE: f64 = 90.0;

/// Accepts percentiles in `[0, 100]`; NaN is rejected.
pub fn check_percentile(p: f64) -> Result<f64> {
    if (0.0..=100.0).contains(&p) {
        Ok(p)
    } else {
        Err(NetworkError::InvalidPercentile(p))
    }
}

/// Selects hubs from `(code, total_degree)` pairs.
///
/// Returns the percentile threshold over all totals and the codes whose total
/// is strictly greater than it, in input order. Ties at the threshold are not
/// hubs, so a network where every airport has the same degree has none.
pub fn classify_hubs(totals: &[(&str, usize)], hub_percentile: f64) -> (f64, Vec<String>) {
    let values: Vec<f64> = totals.iter().map(|&(_, d)| d as f64).collect();
    let threshold = percentile(&values, hub_percentile);

    let hubs = totals
        .iter()
        .filter(|&&(_, d)| d as f64 > threshold)
        .map(|&(code, _)| code.to_string())
        .collect();

    (threshold, hubs)
}
