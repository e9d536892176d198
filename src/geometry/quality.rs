//! Mesh size indicators.

/// Per-node mesh size: mean length of the edges incident to each node.
///
/// Edge lengths are scatter-added to both endpoints together with a count of
/// one, then divided. A node with no incident edge gets `0 / 0 = NaN`; this
/// is a refinement indicator, not a geometric measure, and no attempt is made
/// to repair such nodes.
pub fn node_size(num_nodes: usize, edges: &[[usize; 2]], lengths: &[f64]) -> Vec<f64> {
    debug_assert_eq!(edges.len(), lengths.len());
    let mut h = vec![0.0f64; num_nodes];
    let mut deg = vec![0usize; num_nodes];
    for (&[a, b], &len) in edges.iter().zip(lengths) {
        h[a] += len;
        h[b] += len;
        deg[a] += 1;
        deg[b] += 1;
    }
    h.iter().zip(&deg).map(|(&s, &d)| s / d as f64).collect()
}
