//! Export boundary for visualization writers.
//!
//! [`ExportData`] flattens a [`Mesh2d`] into the arrays an unstructured-grid
//! writer needs: 3D points, a count-prefixed cell array and per-cell type
//! ids, plus named node and cell attributes. [`MeshWriter`] implementations
//! serialize it; [`vtk::VtkLegacyWriter`] is the ASCII legacy VTK backend.

pub mod vtk;

use std::collections::BTreeMap;
use std::io::Write;

use crate::geometry::metrics::Point2;
use crate::mesh::Mesh2d;
use crate::mesh_error::MeshError;

/// Values attached to every node or every cell of an exported mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Scalar(Vec<f64>),
    Vector2(Vec<Point2>),
    Integer(Vec<i64>),
    Boolean(Vec<bool>),
}

impl Attribute {
    pub fn len(&self) -> usize {
        match self {
            Attribute::Scalar(v) => v.len(),
            Attribute::Vector2(v) => v.len(),
            Attribute::Integer(v) => v.len(),
            Attribute::Boolean(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Attribute {
    fn from(v: Vec<f64>) -> Self {
        Attribute::Scalar(v)
    }
}

impl From<Vec<Point2>> for Attribute {
    fn from(v: Vec<Point2>) -> Self {
        Attribute::Vector2(v)
    }
}

impl From<Vec<i64>> for Attribute {
    fn from(v: Vec<i64>) -> Self {
        Attribute::Integer(v)
    }
}

impl From<Vec<bool>> for Attribute {
    fn from(v: Vec<bool>) -> Self {
        Attribute::Boolean(v)
    }
}

/// Flattened mesh arrays in legacy unstructured-grid layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportData {
    /// Node coordinates padded with `z = 0`.
    pub points: Vec<[f64; 3]>,
    /// `[n, v0, .., v(n-1)]` per cell, concatenated.
    pub connectivity: Vec<usize>,
    pub num_cells: usize,
    /// One VTK cell-type id per cell.
    pub cell_types: Vec<u8>,
    pub node_data: BTreeMap<String, Attribute>,
    pub cell_data: BTreeMap<String, Attribute>,
}

impl ExportData {
    /// Flatten the geometry and topology of `mesh`; attribute maps start empty.
    pub fn from_mesh(mesh: &Mesh2d) -> Self {
        let points = mesh.nodes().iter().map(|&[x, y]| [x, y, 0.0]).collect();
        let cells = mesh.cells();
        let nvc = cells.cols();
        let mut connectivity = Vec::with_capacity(cells.rows() * (nvc + 1));
        for row in cells.iter_rows() {
            connectivity.push(row.len());
            connectivity.extend_from_slice(row);
        }
        let vtk = mesh.cell_type().vtk_cell_type();
        Self {
            points,
            connectivity,
            num_cells: cells.rows(),
            cell_types: vec![vtk; cells.rows()],
            node_data: BTreeMap::new(),
            cell_data: BTreeMap::new(),
        }
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Attach a per-node attribute; its length must equal the node count.
    pub fn with_node_data(
        mut self,
        name: impl Into<String>,
        values: impl Into<Attribute>,
    ) -> Result<Self, MeshError> {
        let (name, values) = checked(name.into(), values.into(), self.points.len())?;
        self.node_data.insert(name, values);
        Ok(self)
    }

    /// Attach a per-cell attribute; its length must equal the cell count.
    pub fn with_cell_data(
        mut self,
        name: impl Into<String>,
        values: impl Into<Attribute>,
    ) -> Result<Self, MeshError> {
        let (name, values) = checked(name.into(), values.into(), self.num_cells)?;
        self.cell_data.insert(name, values);
        Ok(self)
    }
}

fn checked(
    name: String,
    values: Attribute,
    expected: usize,
) -> Result<(String, Attribute), MeshError> {
    if values.len() != expected {
        return Err(MeshError::AttributeLength {
            name,
            expected,
            found: values.len(),
        });
    }
    Ok((name, values))
}

impl From<&Mesh2d> for ExportData {
    fn from(mesh: &Mesh2d) -> Self {
        ExportData::from_mesh(mesh)
    }
}

/// Serializer for [`ExportData`].
pub trait MeshWriter {
    fn write<W: Write>(&self, writer: W, data: &ExportData) -> Result<(), MeshError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> Mesh2d {
        Mesh2d::triangle(
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            &[[0, 1, 2], [0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn flattens_cells_with_count_prefix() {
        let data = ExportData::from_mesh(&two_triangles());
        assert_eq!(data.num_points(), 4);
        assert_eq!(data.points[2], [1.0, 1.0, 0.0]);
        assert_eq!(data.connectivity, vec![3, 0, 1, 2, 3, 0, 2, 3]);
        assert_eq!(data.cell_types, vec![5, 5]);
    }

    #[test]
    fn attribute_length_is_checked() {
        let data = ExportData::from_mesh(&two_triangles());
        let err = data
            .clone()
            .with_cell_data("area", vec![0.5f64])
            .unwrap_err();
        assert_eq!(
            err,
            MeshError::AttributeLength {
                name: "area".into(),
                expected: 2,
                found: 1
            }
        );
        let data = data.with_node_data("flag", vec![true; 4]).unwrap();
        assert_eq!(data.node_data["flag"], Attribute::Boolean(vec![true; 4]));
    }
}
