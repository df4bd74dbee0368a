/// Computes the `p`-th percentile (0–100) of `values` by linear interpolation
/// between the closest ranks. Returns 0.0 for empty input; `p` is clamped to
/// `[0, 100]`.
///
/// The rank is `p / 100 * (n - 1)` over the ascending sort, which is the
/// default method of most numeric libraries.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let fraction = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

/// Density of a graph with `nodes` vertices and `edges` edges, using the
/// undirected formula `2E / (N(N - 1))`. Returns 0.0 for fewer than two nodes.
pub fn density(nodes: usize, edges: usize) -> f64 {
    if nodes <= 1 {
        return 0.0;
    }
    (2 * edges) as f64 / (nodes * (nodes - 1)) as f64
}
