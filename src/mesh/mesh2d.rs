//! Geometric 2D mesh: node coordinates bound to a topology snapshot.
//!
//! Degenerate geometry is not validated. A zero-length edge has length zero
//! and NaN unit tangent/normal; a collapsed cell has zero area; an isolated
//! node has NaN size.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::geometry::metrics::{
    Point2, centroid, norm, normalize, right_normal, shoelace_term, sub,
};
use crate::geometry::quality;
use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;
use crate::topology::entity::{EntityKind, IndexSelection};
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::validation::TopologyOptions;

/// Borrowed view of all entities of one kind.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Nodes(&'a [Point2]),
    Edges(&'a [[usize; 2]]),
    Cells(&'a Table<usize>),
}

impl Entity<'_> {
    pub fn len(&self) -> usize {
        match self {
            Entity::Nodes(n) => n.len(),
            Entity::Edges(e) => e.len(),
            Entity::Cells(c) => c.rows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned copy of selected entities of one kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityData {
    Nodes(Vec<Point2>),
    Edges(Vec<[usize; 2]>),
    Cells(Table<usize>),
}

/// 2D unstructured mesh of triangles or quadrilaterals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMesh")]
pub struct Mesh2d {
    node: Vec<Point2>,
    topology: MeshTopology,
}

#[derive(Deserialize)]
struct RawMesh {
    node: Vec<Point2>,
    topology: MeshTopology,
}

impl TryFrom<RawMesh> for Mesh2d {
    type Error = MeshError;

    fn try_from(raw: RawMesh) -> Result<Self, Self::Error> {
        let expected = raw.topology.number_of_nodes();
        if raw.node.len() != expected {
            return Err(MeshError::InvariantViolation(format!(
                "{} node coordinates but topology expects {expected}",
                raw.node.len()
            )));
        }
        Ok(Self {
            node: raw.node,
            topology: raw.topology,
        })
    }
}

impl Mesh2d {
    /// Bind `nodes` to the topology of `cells`.
    pub fn new(
        nodes: Vec<Point2>,
        cells: Table<usize>,
        cell_type: CellType,
    ) -> Result<Self, MeshError> {
        Self::with_options(nodes, cells, cell_type, TopologyOptions::default())
    }

    pub fn with_options(
        nodes: Vec<Point2>,
        cells: Table<usize>,
        cell_type: CellType,
        options: TopologyOptions,
    ) -> Result<Self, MeshError> {
        let topology = MeshTopology::with_options(cell_type, nodes.len(), cells, options)?;
        Ok(Self {
            node: nodes,
            topology,
        })
    }

    /// Triangle mesh from fixed-width rows.
    pub fn triangle(nodes: Vec<Point2>, cells: &[[usize; 3]]) -> Result<Self, MeshError> {
        Self::new(nodes, Table::from_rows(cells), CellType::Triangle)
    }

    /// Quadrilateral mesh from fixed-width rows.
    pub fn quadrilateral(nodes: Vec<Point2>, cells: &[[usize; 4]]) -> Result<Self, MeshError> {
        Self::new(nodes, Table::from_rows(cells), CellType::Quadrilateral)
    }

    /// Replace nodes and connectivity, rebuilding the topology.
    ///
    /// The cell type and build options are kept. On error the mesh is left
    /// unchanged.
    pub fn reinit(&mut self, nodes: Vec<Point2>, cells: Table<usize>) -> Result<(), MeshError> {
        self.reinit_with_options(nodes, cells, self.topology.options())
    }

    /// Like [`reinit`](Self::reinit) with new build options.
    pub fn reinit_with_options(
        &mut self,
        nodes: Vec<Point2>,
        cells: Table<usize>,
        options: TopologyOptions,
    ) -> Result<(), MeshError> {
        let topology =
            MeshTopology::with_options(self.topology.cell_type(), nodes.len(), cells, options)?;
        self.node = nodes;
        self.topology = topology;
        Ok(())
    }

    #[inline]
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.topology.cell_type()
    }

    #[inline]
    pub fn nodes(&self) -> &[Point2] {
        &self.node
    }

    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        self.topology.edges()
    }

    #[inline]
    pub fn cells(&self) -> &Table<usize> {
        self.topology.cells()
    }

    #[inline]
    pub fn geo_dimension(&self) -> usize {
        2
    }

    #[inline]
    pub fn top_dimension(&self) -> usize {
        2
    }

    pub fn number_of_nodes(&self) -> usize {
        self.node.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.topology.number_of_edges()
    }

    pub fn number_of_faces(&self) -> usize {
        self.topology.number_of_faces()
    }

    pub fn number_of_cells(&self) -> usize {
        self.topology.number_of_cells()
    }

    pub fn number_of_nodes_of_cells(&self) -> usize {
        self.topology.number_of_vertices_of_cells()
    }

    pub fn number_of_edges_of_cells(&self) -> usize {
        self.topology.number_of_edges_of_cells()
    }

    pub fn number_of_faces_of_cells(&self) -> usize {
        self.topology.number_of_faces_of_cells()
    }

    /// Number of entities of `kind`.
    pub fn number_of_entities(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Node => self.number_of_nodes(),
            EntityKind::Edge => self.number_of_edges(),
            EntityKind::Cell => self.number_of_cells(),
        }
    }

    /// All entities of `kind`.
    pub fn entity(&self, kind: EntityKind) -> Entity<'_> {
        match kind {
            EntityKind::Node => Entity::Nodes(&self.node),
            EntityKind::Edge => Entity::Edges(self.topology.edges()),
            EntityKind::Cell => Entity::Cells(self.topology.cells()),
        }
    }

    /// Copy of the selected entities of `kind`.
    pub fn select_entity(
        &self,
        kind: EntityKind,
        index: &IndexSelection,
    ) -> Result<EntityData, MeshError> {
        let ids = index.resolve(kind, self.number_of_entities(kind))?;
        Ok(match kind {
            EntityKind::Node => EntityData::Nodes(ids.iter().map(|&i| self.node[i]).collect()),
            EntityKind::Edge => {
                let edges = self.edges();
                EntityData::Edges(ids.iter().map(|&i| edges[i]).collect())
            }
            EntityKind::Cell => EntityData::Cells(self.cells().select_rows(&ids)),
        })
    }

    /// Measure of the selected entities: zero for nodes, length for edges,
    /// signed area for cells.
    pub fn entity_measure(
        &self,
        kind: EntityKind,
        index: &IndexSelection,
    ) -> Result<Vec<f64>, MeshError> {
        match kind {
            EntityKind::Node => {
                let ids = index.resolve(kind, self.number_of_nodes())?;
                Ok(vec![0.0; ids.len()])
            }
            EntityKind::Edge => self.edge_length(index),
            EntityKind::Cell => self.cell_area(index),
        }
    }

    /// Mean of the vertex coordinates of the selected entities.
    pub fn entity_barycenter(
        &self,
        kind: EntityKind,
        index: &IndexSelection,
    ) -> Result<Vec<Point2>, MeshError> {
        let ids = index.resolve(kind, self.number_of_entities(kind))?;
        let node = &self.node;
        Ok(match kind {
            EntityKind::Node => ids.iter().map(|&i| node[i]).collect(),
            EntityKind::Edge => {
                let edges = self.edges();
                ids.iter()
                    .map(|&i| centroid(edges[i].iter().map(|&n| node[n])))
                    .collect()
            }
            EntityKind::Cell => {
                let cells = self.cells();
                ids.iter()
                    .map(|&i| centroid(cells.row(i).iter().map(|&n| node[n])))
                    .collect()
            }
        })
    }

    #[inline]
    fn edge_vector(&self, e: usize) -> Point2 {
        let [a, b] = self.topology.edges()[e];
        sub(self.node[b], self.node[a])
    }

    fn edge_map<T, F>(&self, index: &IndexSelection, f: F) -> Result<Vec<T>, MeshError>
    where
        T: Send,
        F: Fn(Point2) -> T + Sync,
    {
        let ids = index.resolve(EntityKind::Edge, self.number_of_edges())?;
        #[cfg(feature = "rayon")]
        let out = ids.par_iter().map(|&e| f(self.edge_vector(e))).collect();
        #[cfg(not(feature = "rayon"))]
        let out = ids.iter().map(|&e| f(self.edge_vector(e))).collect();
        Ok(out)
    }

    /// Euclidean edge lengths.
    pub fn edge_length(&self, index: &IndexSelection) -> Result<Vec<f64>, MeshError> {
        self.edge_map(index, norm)
    }

    /// Endpoint difference `node[e1] - node[e0]`.
    pub fn edge_tangent(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_map(index, |t| t)
    }

    pub fn edge_unit_tangent(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_map(index, normalize)
    }

    /// Tangent rotated to the right, same length as the edge.
    pub fn edge_normal(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_map(index, right_normal)
    }

    pub fn edge_unit_normal(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_map(index, |t| right_normal(normalize(t)))
    }

    /// Unit normals and unit tangents of the selected edges.
    pub fn edge_frame(
        &self,
        index: &IndexSelection,
    ) -> Result<(Vec<Point2>, Vec<Point2>), MeshError> {
        let t = self.edge_unit_tangent(index)?;
        let n = t.iter().map(|&t| right_normal(t)).collect();
        Ok((n, t))
    }

    pub fn face_tangent(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_tangent(index)
    }

    pub fn face_unit_tangent(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_unit_tangent(index)
    }

    pub fn face_normal(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_normal(index)
    }

    pub fn face_unit_normal(&self, index: &IndexSelection) -> Result<Vec<Point2>, MeshError> {
        self.edge_unit_normal(index)
    }

    /// Signed cell areas.
    ///
    /// For the full mesh the shoelace sums of all cells are accumulated in a
    /// single pass over edges: each edge adds its shoelace term to owner 0 and
    /// subtracts it from owner 1 when the edge is interior. A subset is
    /// evaluated cell by cell over the local edge loop, which gives the same
    /// values without touching unselected cells.
    pub fn cell_area(&self, index: &IndexSelection) -> Result<Vec<f64>, MeshError> {
        let nc = self.number_of_cells();
        match index {
            IndexSelection::All => {
                let mut area = vec![0.0; nc];
                let edges = self.topology.edges();
                let edge2cell = self.topology.edge_to_cell();
                for (&[a, b], &[c0, c1, _, _]) in edges.iter().zip(edge2cell) {
                    let val = shoelace_term(self.node[a], self.node[b]);
                    area[c0] += val;
                    if c0 != c1 {
                        area[c1] -= val;
                    }
                }
                area.iter_mut().for_each(|a| *a *= 0.5);
                Ok(area)
            }
            IndexSelection::Subset(_) => {
                let ids = index.resolve(EntityKind::Cell, nc)?;
                let cells = self.cells();
                let local_edge = self.topology.local_edge();
                Ok(ids
                    .iter()
                    .map(|&c| {
                        let row = cells.row(c);
                        0.5 * local_edge
                            .iter()
                            .map(|&[i, j]| shoelace_term(self.node[row[i]], self.node[row[j]]))
                            .sum::<f64>()
                    })
                    .collect())
            }
        }
    }

    /// Mean incident edge length per node.
    pub fn node_size(&self) -> Vec<f64> {
        let lengths: Vec<f64> = (0..self.number_of_edges())
            .map(|e| norm(self.edge_vector(e)))
            .collect();
        quality::node_size(self.number_of_nodes(), self.edges(), &lengths)
    }
}

static_assertions::assert_impl_all!(Mesh2d: Send, Sync);
