//! Geometric mesh layer.
//!
//! [`Mesh2d`] owns node coordinates and a [`MeshTopology`](crate::topology::MeshTopology)
//! snapshot, and answers measure, barycenter, tangent and normal queries.

pub mod mesh2d;

pub use mesh2d::{Entity, EntityData, Mesh2d};
