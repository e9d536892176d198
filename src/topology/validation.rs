//! Connectivity validation and topology build options.

use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;

/// Options controlling how a topology is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyOptions {
    /// How to handle edges shared by more than two cells.
    pub non_manifold: NonManifoldHandling,
}

impl TopologyOptions {
    /// Reject every inconsistency, including non-manifold edges.
    pub fn strict() -> Self {
        Self {
            non_manifold: NonManifoldHandling::Error,
        }
    }
}

/// Behavior for non-manifold detection.
///
/// When an edge has more than two owners, the first and the last occurrence
/// (in cell-major, local-edge-minor order) become its two owners; the owners
/// in between are dropped from the edge-to-cell table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold edges.
    #[default]
    Warn,
    /// Return an error on non-manifold edges.
    Error,
}

/// Normalize and check a cell table against the cell type and node count.
///
/// A `0 × 0` table (e.g. built from an empty nested list) is accepted as an
/// empty mesh and reshaped to `0 × NVC`.
pub fn validate_cells(
    cell_type: CellType,
    num_nodes: usize,
    cells: Table<usize>,
) -> Result<Table<usize>, MeshError> {
    let nvc = cell_type.num_vertices();
    if cells.is_empty() && cells.cols() == 0 {
        return Ok(Table::filled(0, nvc, 0));
    }
    if cells.cols() != nvc {
        return Err(MeshError::CellArityMismatch {
            cell_type,
            expected: nvc,
            found: cells.cols(),
        });
    }
    for (cell, row) in cells.iter_rows().enumerate() {
        for (local, &node) in row.iter().enumerate() {
            if node >= num_nodes {
                return Err(MeshError::NodeIndexOutOfRange {
                    cell,
                    local,
                    node,
                    num_nodes,
                });
            }
        }
    }
    Ok(cells)
}

/// Apply `handling` to an edge with `incident_cells` owners.
pub(crate) fn check_manifold_edge(
    edge: [usize; 2],
    incident_cells: usize,
    handling: NonManifoldHandling,
) -> Result<(), MeshError> {
    if incident_cells <= 2 {
        return Ok(());
    }
    match handling {
        NonManifoldHandling::Ignore => Ok(()),
        NonManifoldHandling::Warn => {
            log::warn!(
                "Non-manifold edge detected: nodes={edge:?} incident_cells={incident_cells}"
            );
            Ok(())
        }
        NonManifoldHandling::Error => Err(MeshError::NonManifoldEdge {
            edge,
            incident_cells,
        }),
    }
}
