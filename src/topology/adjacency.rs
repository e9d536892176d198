//! Adjacency and incidence queries derived from the edge-to-cell table.
//!
//! Each relation is offered in up to three shapes, as separate methods:
//! a dense table (`*_to_*`), a sparse boolean matrix (`*_sparse`) and a
//! compressed adjacency list (`*_adjacency`). All of them allocate fresh
//! output; the topology itself is never modified.

use crate::data::adjacency::AdjacencyList;
use crate::data::sparse::{SparseMatrix, SparsePattern};
use crate::data::table::Table;
use crate::topology::mesh_topology::MeshTopology;

impl MeshTopology {
    /// Cell connectivity (NC × NVC).
    pub fn cell_to_node(&self) -> &Table<usize> {
        self.cells()
    }

    /// Cell–node incidence (NC × NN).
    pub fn cell_to_node_sparse(&self) -> SparsePattern {
        let cells = self.cells();
        let pairs = cells
            .iter_rows()
            .enumerate()
            .flat_map(|(c, row)| row.iter().map(move |&n| (c, n)));
        SparsePattern::from_pattern(self.number_of_cells(), self.number_of_nodes(), pairs)
    }

    /// Edge id of every local edge of every cell (NC × NEC).
    pub fn cell_to_edge(&self) -> Table<usize> {
        self.cell_edges().clone()
    }

    /// Cell–edge incidence (NC × NE).
    pub fn cell_to_edge_sparse(&self) -> SparsePattern {
        let pairs = self
            .edge_to_cell()
            .iter()
            .enumerate()
            .flat_map(|(e, r)| [(r[0], e), (r[1], e)]);
        SparsePattern::from_pattern(self.number_of_cells(), self.number_of_edges(), pairs)
    }

    /// `true` where the cell is owner 0 of its local edge (NC × NEC).
    ///
    /// Callers use this to orient per-edge quantities such as fluxes: an
    /// edge's stored direction agrees with the local direction in owner 0.
    pub fn cell_to_edge_sign(&self) -> Table<bool> {
        let mut out = Table::filled(
            self.number_of_cells(),
            self.number_of_edges_of_cells(),
            false,
        );
        for &[c0, _, l0, _] in self.edge_to_cell() {
            out[(c0, l0)] = true;
        }
        out
    }

    pub fn cell_to_face(&self) -> Table<usize> {
        self.cell_to_edge()
    }

    pub fn cell_to_face_sparse(&self) -> SparsePattern {
        self.cell_to_edge_sparse()
    }

    pub fn cell_to_face_sign(&self) -> Table<bool> {
        self.cell_to_edge_sign()
    }

    /// Neighbour across every local edge (NC × NEC); a cell is its own
    /// neighbour across a boundary edge.
    pub fn cell_to_cell(&self) -> Table<usize> {
        let mut out = Table::filled(self.number_of_cells(), self.number_of_edges_of_cells(), 0);
        for &[c0, c1, l0, l1] in self.edge_to_cell() {
            out[(c0, l0)] = c1;
            out[(c1, l1)] = c0;
        }
        out
    }

    /// Symmetric cell–cell adjacency (NC × NC).
    ///
    /// With `include_boundary`, every boundary cell also carries a diagonal
    /// entry for each boundary edge it owns.
    pub fn cell_to_cell_sparse(&self, include_boundary: bool) -> SparsePattern {
        let pairs = self
            .edge_to_cell()
            .iter()
            .filter(|r| include_boundary || r[0] != r[1])
            .flat_map(|r| [(r[0], r[1]), (r[1], r[0])]);
        SparsePattern::from_pattern(self.number_of_cells(), self.number_of_cells(), pairs)
    }

    /// Cell neighbours through interior edges, sorted per cell.
    pub fn cell_to_cell_adjacency(&self) -> AdjacencyList {
        self.cell_to_cell_sparse(false).to_adjacency_list()
    }

    /// Edge connectivity (NE × 2).
    pub fn edge_to_node(&self) -> &[[usize; 2]] {
        self.edges()
    }

    /// Edge–node incidence (NE × NN).
    pub fn edge_to_node_sparse(&self) -> SparsePattern {
        let pairs = self
            .edges()
            .iter()
            .enumerate()
            .flat_map(|(e, &[a, b])| [(e, a), (e, b)]);
        SparsePattern::from_pattern(self.number_of_edges(), self.number_of_nodes(), pairs)
    }

    /// Edge–cell incidence (NE × NC).
    pub fn edge_to_cell_sparse(&self) -> SparsePattern {
        let pairs = self
            .edge_to_cell()
            .iter()
            .enumerate()
            .flat_map(|(e, r)| [(e, r[0]), (e, r[1])]);
        SparsePattern::from_pattern(self.number_of_edges(), self.number_of_cells(), pairs)
    }

    pub fn face_to_cell_sparse(&self) -> SparsePattern {
        self.edge_to_cell_sparse()
    }

    /// Edges sharing at least one node (NE × NE, diagonal included).
    pub fn edge_to_edge(&self) -> SparsePattern {
        let e2n = self.edge_to_node_sparse();
        e2n.pattern_product(&e2n.transpose())
    }

    /// Symmetric node–node adjacency through edges (NN × NN).
    pub fn node_to_node(&self) -> SparsePattern {
        let pairs = self.edges().iter().flat_map(|&[a, b]| [(a, b), (b, a)]);
        SparsePattern::from_pattern(self.number_of_nodes(), self.number_of_nodes(), pairs)
    }

    /// Node neighbours through edges, sorted per node.
    pub fn node_to_node_adjacency(&self) -> AdjacencyList {
        self.node_to_node().to_adjacency_list()
    }

    /// Node–edge incidence (NN × NE).
    pub fn node_to_edge(&self) -> SparsePattern {
        let pairs = self
            .edges()
            .iter()
            .enumerate()
            .flat_map(|(e, &[a, b])| [(a, e), (b, e)]);
        SparsePattern::from_pattern(self.number_of_nodes(), self.number_of_edges(), pairs)
    }

    /// Node–edge incidence carrying `1` at the start node and `2` at the end.
    pub fn node_to_edge_local(&self) -> SparseMatrix<usize> {
        let triplets = self
            .edges()
            .iter()
            .enumerate()
            .flat_map(|(e, &[a, b])| [(a, e, 1), (b, e, 2)]);
        SparseMatrix::from_triplets_with(
            self.number_of_nodes(),
            self.number_of_edges(),
            triplets,
            |a, _| a,
        )
    }

    /// Node–cell incidence (NN × NC).
    pub fn node_to_cell(&self) -> SparsePattern {
        self.cell_to_node_sparse().transpose()
    }

    /// Node–cell incidence carrying `local position + 1` of the node in the
    /// cell, so that a stored value is never zero.
    pub fn node_to_cell_local(&self) -> SparseMatrix<usize> {
        let triplets = self
            .cells()
            .iter_rows()
            .enumerate()
            .flat_map(|(c, row)| row.iter().enumerate().map(move |(i, &n)| (n, c, i + 1)));
        // a degenerate cell repeating a node keeps its first position
        SparseMatrix::from_triplets_with(
            self.number_of_nodes(),
            self.number_of_cells(),
            triplets,
            |a, _| a,
        )
    }
}
