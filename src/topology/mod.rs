//! Top-level module for 2D mesh topology.
//!
//! This module derives edges and the edge-to-cell table from a cell-to-node
//! connectivity table and answers every adjacency query from them.
//! It includes:
//! - Cell type metadata and local edge templates
//! - Entity selectors and index subsets
//! - The immutable [`MeshTopology`] snapshot and its construction
//! - Adjacency queries in dense, sparse and adjacency-list shapes
//! - Boundary classification derived from edge ownership

pub mod adjacency;
pub mod boundary;
pub mod cell_type;
pub mod entity;
pub mod mesh_topology;
pub mod validation;

pub use boundary::BoundaryEdgeLinks;
pub use cell_type::CellType;
pub use entity::{EntityKind, IndexSelection};
pub use mesh_topology::MeshTopology;
pub use validation::{NonManifoldHandling, TopologyOptions};

static_assertions::assert_impl_all!(MeshTopology: Send, Sync, Clone);
