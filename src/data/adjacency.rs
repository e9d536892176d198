//! Compressed adjacency lists for graph-traversal consumers.

use serde::{Deserialize, Serialize};

/// CSR-style adjacency list.
///
/// * `xadj[i] .. xadj[i+1]` = neighbour range of vertex *i*
/// * `adjncy`               = concatenated neighbour indices, sorted per vertex
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    /// CSR offsets into `adjncy` for each vertex.
    pub xadj: Vec<usize>,
    /// CSR adjacency list.
    pub adjncy: Vec<usize>,
}

impl AdjacencyList {
    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the neighbor index slice for vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Number of neighbours of vertex `i`.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.xadj[i + 1] - self.xadj[i]
    }

    /// Undirected edges `(i, j)` with `i < j`, each listed once.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).flat_map(move |i| {
            self.neighbors(i)
                .iter()
                .copied()
                .filter(move |&j| i < j)
                .map(move |j| (i, j))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_of_triangle_graph() {
        let adj = AdjacencyList {
            xadj: vec![0, 2, 4, 6],
            adjncy: vec![1, 2, 0, 2, 0, 1],
        };
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.degree(2), 2);
        let edges: Vec<_> = adj.undirected_edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn default_is_empty() {
        assert!(AdjacencyList::default().is_empty());
    }
}
