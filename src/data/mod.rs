//! Containers for connectivity and incidence data.
//!
//! - [`table::Table`]: dense row-major tables (cells, cell-to-edge, ...)
//! - [`sparse::SparseMatrix`]: CSR incidence/adjacency matrices
//! - [`adjacency::AdjacencyList`]: compressed neighbour lists

pub mod adjacency;
pub mod sparse;
pub mod table;

pub use adjacency::AdjacencyList;
pub use sparse::{SparseMatrix, SparsePattern};
pub use table::Table;
