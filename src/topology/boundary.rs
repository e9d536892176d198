//! Boundary classification.
//!
//! An edge is on the boundary iff its two owners coincide
//! (`edge2cell[e][0] == edge2cell[e][1]`). Boundary nodes are the endpoints
//! of boundary edges and boundary cells are the owners of boundary edges.
//! Nothing is stored: every query recomputes from that single predicate.

use crate::data::sparse::SparsePattern;
use crate::topology::mesh_topology::MeshTopology;

/// Predecessor/successor links along the boundary polygon(s).
///
/// Entry `i` refers to the `i`-th boundary edge (see
/// [`MeshTopology::boundary_edge_index`]); values are global edge ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryEdgeLinks {
    /// Global ids of the boundary edges, ascending.
    pub edges: Vec<usize>,
    /// Boundary edge ending where edge `i` starts.
    pub prev: Vec<usize>,
    /// Boundary edge starting where edge `i` ends.
    pub next: Vec<usize>,
}

fn indices_of(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, &f)| f.then_some(i))
        .collect()
}

impl MeshTopology {
    pub fn boundary_edge_flag(&self) -> Vec<bool> {
        self.edge_to_cell().iter().map(|r| r[0] == r[1]).collect()
    }

    pub fn boundary_face_flag(&self) -> Vec<bool> {
        self.boundary_edge_flag()
    }

    pub fn boundary_node_flag(&self) -> Vec<bool> {
        let mut flag = vec![false; self.number_of_nodes()];
        for (&[a, b], r) in self.edges().iter().zip(self.edge_to_cell()) {
            if r[0] == r[1] {
                flag[a] = true;
                flag[b] = true;
            }
        }
        flag
    }

    pub fn boundary_cell_flag(&self) -> Vec<bool> {
        let mut flag = vec![false; self.number_of_cells()];
        for r in self.edge_to_cell() {
            if r[0] == r[1] {
                flag[r[0]] = true;
            }
        }
        flag
    }

    pub fn boundary_edge_index(&self) -> Vec<usize> {
        indices_of(&self.boundary_edge_flag())
    }

    pub fn boundary_face_index(&self) -> Vec<usize> {
        self.boundary_edge_index()
    }

    pub fn boundary_node_index(&self) -> Vec<usize> {
        indices_of(&self.boundary_node_flag())
    }

    pub fn boundary_cell_index(&self) -> Vec<usize> {
        indices_of(&self.boundary_cell_flag())
    }

    /// Boundary edges in their stored orientation.
    pub fn boundary_edge(&self) -> Vec<[usize; 2]> {
        let edges = self.edges();
        self.boundary_edge_index()
            .into_iter()
            .map(|e| edges[e])
            .collect()
    }

    pub fn boundary_face(&self) -> Vec<[usize; 2]> {
        self.boundary_edge()
    }

    /// Link every boundary edge to its neighbours along the boundary loop.
    ///
    /// With `M0` / `M1` the boundary-edge × node incidence of start / end
    /// nodes, the nonzeros of `M0 · M1ᵀ` pair each edge with the edge ending
    /// at its start (predecessor) and those of `M1 · M0ᵀ` with the edge
    /// starting at its end (successor). Boundary edges inherit their owner's
    /// orientation, so consistently oriented cells give closed directed loops.
    /// Where a boundary node is shared by several loops the lowest matching
    /// edge is taken; an edge with no match (inconsistent orientation) links
    /// to itself.
    pub fn boundary_edge_to_edge(&self) -> BoundaryEdgeLinks {
        let index = self.boundary_edge_index();
        let edges = self.edges();
        let n = index.len();
        let nn = self.number_of_nodes();
        let incidence = |end: usize| {
            SparsePattern::from_pattern(
                n,
                nn,
                index.iter().enumerate().map(|(i, &e)| (i, edges[e][end])),
            )
        };
        let m0 = incidence(0);
        let m1 = incidence(1);

        let pre = m0.pattern_product(&m1.transpose());
        let nex = m1.pattern_product(&m0.transpose());
        let pick = |m: &SparsePattern, i: usize| {
            m.row_indices(i).first().map_or(index[i], |&j| index[j])
        };

        BoundaryEdgeLinks {
            prev: (0..n).map(|i| pick(&pre, i)).collect(),
            next: (0..n).map(|i| pick(&nex, i)).collect(),
            edges: index,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::table::Table;
    use crate::topology::cell_type::CellType;
    use crate::topology::mesh_topology::MeshTopology;

    #[test]
    fn square_of_two_triangles() {
        let topo = MeshTopology::new(
            CellType::Triangle,
            4,
            Table::from_rows(&[[0, 1, 2], [0, 2, 3]]),
        )
        .unwrap();
        assert_eq!(topo.boundary_edge_flag(), vec![true, false, true, true, true]);
        assert_eq!(topo.boundary_edge_index(), vec![0, 2, 3, 4]);
        assert_eq!(topo.boundary_node_index(), vec![0, 1, 2, 3]);
        assert_eq!(topo.boundary_cell_index(), vec![0, 1]);
        assert_eq!(topo.boundary_edge(), vec![[0, 1], [3, 0], [1, 2], [2, 3]]);
    }

    #[test]
    fn boundary_loop_links() {
        let topo = MeshTopology::new(
            CellType::Triangle,
            4,
            Table::from_rows(&[[0, 1, 2], [0, 2, 3]]),
        )
        .unwrap();
        // loop: (0,1) -> (1,2) -> (2,3) -> (3,0) ; ids 0 -> 3 -> 4 -> 2
        let links = topo.boundary_edge_to_edge();
        assert_eq!(links.edges, vec![0, 2, 3, 4]);
        assert_eq!(links.next, vec![3, 0, 4, 2]);
        assert_eq!(links.prev, vec![2, 4, 0, 3]);
    }

    #[test]
    fn interior_node_is_not_boundary() {
        // four triangles around node 4 at the centre of a square
        let cells = Table::from_rows(&[[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]]);
        let topo = MeshTopology::new(CellType::Triangle, 5, cells).unwrap();
        let flag = topo.boundary_node_flag();
        assert_eq!(flag, vec![true, true, true, true, false]);
        assert_eq!(topo.boundary_edge_index().len(), 4);
        assert_eq!(topo.boundary_cell_index(), vec![0, 1, 2, 3]);
    }
}
