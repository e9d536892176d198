//! Edge/cell topology of a 2D mesh derived from cell connectivity alone.
//!
//! # Construction
//!
//! Every cell emits its local edges (cell-major, local-edge-minor) into a
//! *total edge* table of `NC·NEC` rows. Rows are grouped by their undirected
//! key `(min, max)`; each group becomes one edge. Edge ids follow the sorted
//! order of the keys, the stored orientation is that of the first occurrence,
//! and the edge-to-cell row is filled from the first occurrence (owner 0) and
//! the last occurrence (owner 1). A boundary edge has a single occurrence and
//! therefore `owner 0 == owner 1`.
//!
//! The traversal order fully determines which of the two cells sharing an
//! edge becomes owner 0, so identical input always yields identical tables.
//!
//! A serialized snapshot carries its derived tables, but only the build
//! input (cell type, node count, options, cells) is read back; the rest is
//! rebuilt, so a deserialized snapshot is as valid as a freshly built one.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;
use crate::topology::validation::{TopologyOptions, check_manifold_edge, validate_cells};

/// Immutable topology snapshot: cells, deduplicated edges and edge-to-cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTopology")]
pub struct MeshTopology {
    cell_type: CellType,
    num_nodes: usize,
    options: TopologyOptions,
    cell: Table<usize>,
    edge: Vec<[usize; 2]>,
    /// Edge id of every local edge (NC × NEC).
    cell2edge: Table<usize>,
    /// `[owner0, owner1, local0, local1]` per edge.
    edge2cell: Vec<[usize; 4]>,
}

#[derive(Deserialize)]
struct RawTopology {
    cell_type: CellType,
    num_nodes: usize,
    #[serde(default)]
    options: TopologyOptions,
    cell: Table<usize>,
}

impl TryFrom<RawTopology> for MeshTopology {
    type Error = MeshError;

    fn try_from(raw: RawTopology) -> Result<Self, Self::Error> {
        Self::with_options(raw.cell_type, raw.num_nodes, raw.cell, raw.options)
    }
}

/// Result of the stable unique-with-inverse pass over the total edge table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UniqueEdges {
    /// Position of the first occurrence of each edge in the total edge table.
    pub first: Vec<usize>,
    /// Position of the last occurrence of each edge.
    pub last: Vec<usize>,
    /// Number of occurrences of each edge.
    pub multiplicity: Vec<usize>,
    /// Edge id assigned to every total-edge position.
    pub inverse: Vec<usize>,
}

#[inline]
fn undirected_key([a, b]: [usize; 2]) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Emit all cell-local edges, cell-major then local-edge-minor.
pub(crate) fn total_edges(cell_type: CellType, cell: &Table<usize>) -> Vec<[usize; 2]> {
    let local_edge = cell_type.local_edge();
    let mut out = Vec::with_capacity(cell.rows() * local_edge.len());
    for row in cell.iter_rows() {
        out.extend(local_edge.iter().map(|&[a, b]| [row[a], row[b]]));
    }
    out
}

/// Group total-edge rows by undirected key.
///
/// Edge ids are assigned in ascending key order; within a group, positions
/// stay in traversal order because the sort is stable.
pub(crate) fn unique_edges(total_edge: &[[usize; 2]]) -> UniqueEdges {
    let mut order: Vec<usize> = (0..total_edge.len()).collect();
    order.sort_by_key(|&p| undirected_key(total_edge[p]));

    let mut out = UniqueEdges {
        inverse: vec![0; total_edge.len()],
        ..UniqueEdges::default()
    };
    let groups = order.iter().copied().chunk_by(|&p| undirected_key(total_edge[p]));
    for (id, (_key, group)) in (&groups).into_iter().enumerate() {
        let mut first = usize::MAX;
        let mut last = 0;
        let mut count = 0;
        for p in group {
            first = first.min(p);
            last = last.max(p);
            count += 1;
            out.inverse[p] = id;
        }
        out.first.push(first);
        out.last.push(last);
        out.multiplicity.push(count);
    }
    out
}

impl MeshTopology {
    /// Build the topology of `cells` over `num_nodes` nodes.
    pub fn new(
        cell_type: CellType,
        num_nodes: usize,
        cells: Table<usize>,
    ) -> Result<Self, MeshError> {
        Self::with_options(cell_type, num_nodes, cells, TopologyOptions::default())
    }

    /// Build with explicit [`TopologyOptions`].
    pub fn with_options(
        cell_type: CellType,
        num_nodes: usize,
        cells: Table<usize>,
        options: TopologyOptions,
    ) -> Result<Self, MeshError> {
        let cell = validate_cells(cell_type, num_nodes, cells)?;
        let nec = cell_type.num_edges();

        let total_edge = total_edges(cell_type, &cell);
        let unique = unique_edges(&total_edge);

        let ne = unique.first.len();
        let cell2edge = Table::try_from_flat(cell.rows(), nec, unique.inverse)?;
        let mut edge = Vec::with_capacity(ne);
        let mut edge2cell = Vec::with_capacity(ne);
        for e in 0..ne {
            let (i0, i1) = (unique.first[e], unique.last[e]);
            check_manifold_edge(total_edge[i0], unique.multiplicity[e], options.non_manifold)?;
            edge.push(total_edge[i0]);
            edge2cell.push([i0 / nec, i1 / nec, i0 % nec, i1 % nec]);
        }

        let topo = Self {
            cell_type,
            num_nodes,
            options,
            cell,
            edge,
            cell2edge,
            edge2cell,
        };
        log::debug!(
            "built {} topology: NN={} NC={} NE={} boundary_edges={}",
            topo.cell_type,
            topo.num_nodes,
            topo.number_of_cells(),
            topo.number_of_edges(),
            topo.edge2cell.iter().filter(|r| r[0] == r[1]).count()
        );
        crate::debug_invariants!(topo.validate_invariants(), "MeshTopology::with_options");
        Ok(topo)
    }

    /// Replace the snapshot with the topology of new connectivity, keeping
    /// the cell type and build options.
    ///
    /// On error `self` is left unchanged.
    pub fn reinit(&mut self, num_nodes: usize, cells: Table<usize>) -> Result<(), MeshError> {
        *self = Self::with_options(self.cell_type, num_nodes, cells, self.options)?;
        Ok(())
    }

    /// Like [`reinit`](Self::reinit) with new options, which are kept for
    /// later rebuilds.
    pub fn reinit_with_options(
        &mut self,
        num_nodes: usize,
        cells: Table<usize>,
        options: TopologyOptions,
    ) -> Result<(), MeshError> {
        *self = Self::with_options(self.cell_type, num_nodes, cells, options)?;
        Ok(())
    }

    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Options this snapshot was built with.
    #[inline]
    pub fn options(&self) -> TopologyOptions {
        self.options
    }

    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.edge.len()
    }

    /// Faces of a 2D mesh are its edges.
    #[inline]
    pub fn number_of_faces(&self) -> usize {
        self.edge.len()
    }

    #[inline]
    pub fn number_of_cells(&self) -> usize {
        self.cell.rows()
    }

    /// NVC.
    #[inline]
    pub fn number_of_vertices_of_cells(&self) -> usize {
        self.cell_type.num_vertices()
    }

    /// NEC.
    #[inline]
    pub fn number_of_edges_of_cells(&self) -> usize {
        self.cell_type.num_edges()
    }

    #[inline]
    pub fn number_of_faces_of_cells(&self) -> usize {
        self.cell_type.num_edges()
    }

    /// Number of nodes on each edge.
    #[inline]
    pub fn number_of_vertices_of_edges(&self) -> usize {
        2
    }

    #[inline]
    pub fn local_edge(&self) -> &'static [[usize; 2]] {
        self.cell_type.local_edge()
    }

    /// Cell connectivity (NC × NVC).
    #[inline]
    pub fn cells(&self) -> &Table<usize> {
        &self.cell
    }

    /// Deduplicated edges (NE × 2), oriented as first encountered.
    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edge
    }

    /// The undeduplicated `NC·NEC` cell-local edge table.
    pub fn total_edge(&self) -> Vec<[usize; 2]> {
        total_edges(self.cell_type, &self.cell)
    }

    /// Edge id of every local edge, straight from the dedup pass.
    #[inline]
    pub(crate) fn cell_edges(&self) -> &Table<usize> {
        &self.cell2edge
    }

    /// Edge-to-cell table (NE × 4).
    #[inline]
    pub fn edge_to_cell(&self) -> &[[usize; 4]] {
        &self.edge2cell
    }

    #[inline]
    pub fn face_to_cell(&self) -> &[[usize; 4]] {
        &self.edge2cell
    }
}

impl DebugInvariants for MeshTopology {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshTopology");
    }

    /// Cells reference existing nodes, every local edge maps to an edge with
    /// the same node pair, and every recorded `(owner, local)` pair maps back
    /// to its edge.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        let nc = self.number_of_cells();
        let nec = self.number_of_edges_of_cells();
        let ne = self.edge.len();
        let violation = |msg: String| Err(MeshError::InvariantViolation(msg));
        if self.edge2cell.len() != ne {
            return violation(format!(
                "{ne} edges but {} edge-to-cell rows",
                self.edge2cell.len()
            ));
        }
        if self.cell2edge.rows() != nc || self.cell2edge.cols() != nec {
            return violation(format!(
                "cell-to-edge table is {}x{}, expected {nc}x{nec}",
                self.cell2edge.rows(),
                self.cell2edge.cols()
            ));
        }
        if let Some(&n) = self.cell.as_slice().iter().find(|&&n| n >= self.num_nodes) {
            return violation(format!("cell node {n} >= {}", self.num_nodes));
        }
        let local_edge = self.local_edge();
        for (c, row) in self.cell.iter_rows().enumerate() {
            for (l, &[a, b]) in local_edge.iter().enumerate() {
                let e = self.cell2edge[(c, l)];
                if e >= ne || undirected_key(self.edge[e]) != undirected_key([row[a], row[b]]) {
                    return violation(format!(
                        "local edge {l} of cell {c} does not match edge {e}"
                    ));
                }
            }
        }
        for (e, &[c0, c1, l0, l1]) in self.edge2cell.iter().enumerate() {
            for (c, l) in [(c0, l0), (c1, l1)] {
                if c >= nc || l >= nec || self.cell2edge[(c, l)] != e {
                    return violation(format!(
                        "edge {e} owner ({c}, {l}) does not hold the edge"
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> MeshTopology {
        MeshTopology::new(
            CellType::Triangle,
            4,
            Table::from_rows(&[[0, 1, 2], [0, 2, 3]]),
        )
        .unwrap()
    }

    #[test]
    fn unique_edges_assigns_sorted_ids_with_inverse() {
        let total = [[1, 2], [2, 0], [0, 1], [2, 3], [3, 0], [0, 2]];
        let u = unique_edges(&total);
        // keys in order: (0,1) (0,2) (0,3) (1,2) (2,3)
        assert_eq!(u.first, vec![2, 1, 4, 0, 3]);
        assert_eq!(u.last, vec![2, 5, 4, 0, 3]);
        assert_eq!(u.multiplicity, vec![1, 2, 1, 1, 1]);
        assert_eq!(u.inverse, vec![3, 1, 0, 4, 2, 1]);
    }

    #[test]
    fn two_triangles_edge_table() {
        let topo = two_triangles();
        assert_eq!(topo.number_of_edges(), 5);
        assert_eq!(topo.edges(), &[[0, 1], [2, 0], [3, 0], [1, 2], [2, 3]]);
        assert_eq!(
            topo.edge_to_cell(),
            &[[0, 0, 2, 2], [0, 1, 1, 2], [1, 1, 1, 1], [0, 0, 0, 0], [1, 1, 0, 0]]
        );
        topo.validate_invariants().unwrap();
    }

    #[test]
    fn reinit_failure_keeps_snapshot() {
        let mut topo = two_triangles();
        let before = topo.clone();
        let err = topo
            .reinit(3, Table::from_rows(&[[0, 1, 2], [0, 2, 3]]))
            .unwrap_err();
        assert!(err.is_invalid_mesh());
        assert_eq!(topo, before);
    }

    #[test]
    fn invariant_check_catches_corruption() {
        let mut topo = two_triangles();
        topo.edge2cell[1][3] = 0;
        assert!(matches!(
            topo.validate_invariants(),
            Err(MeshError::InvariantViolation(_))
        ));
    }

    #[test]
    fn cell_edges_come_from_inverse() {
        let topo = two_triangles();
        let u = unique_edges(&topo.total_edge());
        assert_eq!(topo.cell_edges().as_slice(), u.inverse.as_slice());
        assert_eq!(topo.cell_edges().row(1), &[4, 2, 1]);

        let mut bad = topo.clone();
        bad.cell2edge = Table::from_rows(&[[3, 1, 0], [4, 2, 0]]);
        assert!(matches!(
            bad.validate_invariants(),
            Err(MeshError::InvariantViolation(_))
        ));
    }

    #[test]
    fn reinit_keeps_build_options() {
        let fan = Table::from_rows(&[[0, 1, 2], [1, 0, 3], [0, 1, 4]]);
        let mut topo = MeshTopology::with_options(
            CellType::Triangle,
            4,
            Table::from_rows(&[[0, 1, 2], [0, 2, 3]]),
            TopologyOptions::strict(),
        )
        .unwrap();
        let before = topo.clone();
        let err = topo.reinit(5, fan.clone()).unwrap_err();
        assert!(matches!(err, MeshError::NonManifoldEdge { .. }));
        assert_eq!(topo, before);

        topo.reinit_with_options(5, fan.clone(), TopologyOptions::default())
            .unwrap();
        assert_eq!(topo.options(), TopologyOptions::default());
        assert_eq!(topo.number_of_cells(), 3);

        topo.reinit_with_options(4, before.cells().clone(), TopologyOptions::strict())
            .unwrap();
        assert_eq!(topo, before);
        assert!(topo.reinit(5, fan).is_err());
    }

    #[test]
    fn deserialization_rebuilds_and_validates() {
        let topo = two_triangles();
        let json = serde_json::to_string(&topo).unwrap();
        let back: MeshTopology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, topo);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["cell"]["data"][5] = serde_json::json!(99);
        assert!(serde_json::from_value::<MeshTopology>(value).is_err());

        // derived tables in the input are ignored
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["edge"] = serde_json::json!([]);
        let back: MeshTopology = serde_json::from_value(value).unwrap();
        assert_eq!(back, topo);
    }

    #[test]
    fn non_manifold_fan_keeps_first_and_last_owner() {
        // three triangles sharing edge (0, 1)
        let cells = Table::from_rows(&[[0, 1, 2], [1, 0, 3], [0, 1, 4]]);
        let topo = MeshTopology::new(CellType::Triangle, 5, cells.clone()).unwrap();
        let e = topo
            .edges()
            .iter()
            .position(|&e| undirected_key(e) == (0, 1))
            .unwrap();
        assert_eq!(topo.edge_to_cell()[e], [0, 2, 2, 2]);

        let err = MeshTopology::with_options(CellType::Triangle, 5, cells, TopologyOptions::strict())
            .unwrap_err();
        assert_eq!(
            err,
            MeshError::NonManifoldEdge {
                edge: [0, 1],
                incident_cells: 3
            }
        );
    }
}
