#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh2d
//!
//! mesh2d is a topology and geometry kernel for 2D unstructured finite-element
//! meshes made of a single cell type (triangles or quadrilaterals). From a
//! node coordinate array and a cell-to-node table it derives the unique edge
//! set and every incidence relation a discretization needs, along with the
//! boundary classification and per-entity geometric quantities.
//!
//! ## Features
//! - Deterministic edge deduplication: edge ids follow the sorted order of
//!   their canonical `(min, max)` node pairs.
//! - Dense and sparse (CSR) incidence queries between nodes, edges and cells.
//! - Boundary flags, indices and boundary-loop neighbour links.
//! - Edge lengths, tangents and normals; cell areas, barycenters and node sizes.
//! - Structured box generators and an ASCII legacy VTK writer.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mesh2d = "0.1"
//! # Optional features:
//! # features = ["rayon", "check-invariants"]
//! ```
//!
//! ```
//! use mesh2d::prelude::*;
//!
//! let mesh = Mesh2d::triangle(
//!     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
//!     &[[0, 1, 2], [0, 2, 3]],
//! )?;
//! assert_eq!(mesh.number_of_edges(), 5);
//! let area: f64 = mesh.cell_area(&IndexSelection::All)?.iter().sum();
//! assert!((area - 1.0).abs() < 1e-12);
//! # Ok::<(), MeshError>(())
//! ```
//!
//! ## Invariant checking
//!
//! Topology snapshots check their own structural invariants after every
//! (re)build in debug builds, or in release builds with the
//! `check-invariants` feature. `strict-invariants` implies the latter.

pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::{AdjacencyList, SparseMatrix, SparsePattern, Table};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::Point2;
    pub use crate::io::vtk::VtkLegacyWriter;
    pub use crate::io::{Attribute, ExportData, MeshWriter};
    pub use crate::mesh::{Entity, EntityData, Mesh2d};
    pub use crate::mesh_error::MeshError;
    pub use crate::mesh_generation::{structured_box_2d, unit_square};
    pub use crate::topology::{
        BoundaryEdgeLinks, CellType, EntityKind, IndexSelection, MeshTopology,
        NonManifoldHandling, TopologyOptions,
    };
}
