//! Cell type metadata for 2D meshes.
//!
//! The cell type fixes the number of vertices per cell (NVC), the number of
//! edges per cell (NEC) and the local edge template mapping each local edge
//! to a pair of local vertex positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;

/// Triangle local edges: edge `i` is opposite vertex `i`.
const TRIANGLE_LOCAL_EDGE: [[usize; 2]; 3] = [[1, 2], [2, 0], [0, 1]];
/// Quadrilateral local edges, counter-clockwise from vertex 0.
const QUADRILATERAL_LOCAL_EDGE: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

/// 2D cell types supported by the topology engine.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 2D simplex (triangle).
    #[default]
    Triangle,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
}

impl CellType {
    /// Vertices per cell (NVC).
    #[inline]
    pub const fn num_vertices(self) -> usize {
        match self {
            CellType::Triangle => 3,
            CellType::Quadrilateral => 4,
        }
    }

    /// Edges per cell (NEC).
    #[inline]
    pub const fn num_edges(self) -> usize {
        self.local_edge().len()
    }

    /// Local edge template (NEC × 2 local vertex positions).
    #[inline]
    pub const fn local_edge(self) -> &'static [[usize; 2]] {
        match self {
            CellType::Triangle => &TRIANGLE_LOCAL_EDGE,
            CellType::Quadrilateral => &QUADRILATERAL_LOCAL_EDGE,
        }
    }

    /// Topological dimension of the cell.
    #[inline]
    pub const fn dimension(self) -> usize {
        2
    }

    /// Legacy VTK cell type id.
    #[inline]
    pub const fn vtk_cell_type(self) -> u8 {
        match self {
            CellType::Triangle => 5,
            CellType::Quadrilateral => 9,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Triangle => f.write_str("triangle"),
            CellType::Quadrilateral => f.write_str("quadrilateral"),
        }
    }
}

impl FromStr for CellType {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "triangle" | "tri" => Ok(CellType::Triangle),
            "quadrilateral" | "quadrangle" | "quad" => Ok(CellType::Quadrilateral),
            _ => Err(MeshError::InvalidGeometry(format!("unknown cell type `{s}`"))),
        }
    }
}
