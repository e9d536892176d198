//! MeshError: unified error type for mesh2d public APIs
//!
//! Construction of a topology is the only place where malformed input is
//! rejected. Degenerate geometry (zero-length edges, zero-area cells) is not
//! an error: it propagates as zero or NaN measures.

use thiserror::Error;

use crate::topology::cell_type::CellType;
use crate::topology::entity::EntityKind;

/// Unified error type for mesh2d operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A cell references a node outside `[0, num_nodes)`.
    #[error("invalid mesh: cell {cell} (local vertex {local}) references node {node}, but the mesh has {num_nodes} nodes")]
    NodeIndexOutOfRange {
        cell: usize,
        local: usize,
        node: usize,
        num_nodes: usize,
    },
    /// The cell table width does not match the vertex count of the cell type.
    #[error("invalid mesh: {cell_type:?} cells have {expected} vertices, cell table has {found} columns")]
    CellArityMismatch {
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// A nested cell list has rows of different lengths.
    #[error("invalid mesh: cell {cell} has {found} vertices, expected {expected}")]
    RaggedCells {
        cell: usize,
        expected: usize,
        found: usize,
    },
    /// An edge is shared by more than two cells.
    #[error("invalid mesh: edge {edge:?} is shared by {incident_cells} cells")]
    NonManifoldEdge {
        edge: [usize; 2],
        incident_cells: usize,
    },
    /// A derived table disagrees with the cell connectivity.
    #[error("topology invariant violated: {0}")]
    InvariantViolation(String),
    /// An entity selector could not be parsed.
    #[error("invalid entity kind `{0}` (expected node, edge, face or cell)")]
    InvalidEntityKind(String),
    /// An explicit index subset names an entity that does not exist.
    #[error("{kind:?} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },
    /// Geometry or generator arguments were rejected.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// An attached attribute does not have one value per entity.
    #[error("attribute `{name}` has {found} values, expected {expected}")]
    AttributeLength {
        name: String,
        expected: usize,
        found: usize,
    },
    /// Writer failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        MeshError::Io(e.to_string())
    }
}

impl MeshError {
    /// True for the errors raised when the connectivity itself is malformed.
    pub fn is_invalid_mesh(&self) -> bool {
        matches!(
            self,
            MeshError::NodeIndexOutOfRange { .. }
                | MeshError::CellArityMismatch { .. }
                | MeshError::RaggedCells { .. }
                | MeshError::NonManifoldEdge { .. }
        )
    }
}
