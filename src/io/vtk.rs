//! Legacy VTK (`.vtk`) writer for unstructured grids.
//!
//! Output is an ASCII legacy file with an `UNSTRUCTURED_GRID` dataset.
//! Node attributes go to `POINT_DATA` and cell attributes to `CELL_DATA`;
//! booleans are written as `0`/`1` ints and 2-vectors get a zero `z`.

use std::collections::BTreeMap;
use std::io::Write;

use crate::io::{Attribute, ExportData, MeshWriter};
use crate::mesh_error::MeshError;

#[derive(Debug, Clone)]
pub struct VtkLegacyWriter {
    title: String,
}

impl Default for VtkLegacyWriter {
    fn default() -> Self {
        Self {
            title: "mesh2d".to_string(),
        }
    }
}

impl VtkLegacyWriter {
    /// Writer with a custom header title line. Newlines are replaced by spaces.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into().replace(['\n', '\r'], " "),
        }
    }

    fn write_attributes<W: Write>(
        writer: &mut W,
        section: &str,
        count: usize,
        attributes: &BTreeMap<String, Attribute>,
    ) -> Result<(), MeshError> {
        if attributes.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{section} {count}")?;
        for (name, attribute) in attributes {
            let name = array_name(name);
            log::trace!("vtk: writing {section} array `{name}`");
            match attribute {
                Attribute::Scalar(values) => {
                    writeln!(writer, "SCALARS {name} double 1")?;
                    writeln!(writer, "LOOKUP_TABLE default")?;
                    for v in values {
                        writeln!(writer, "{v}")?;
                    }
                }
                Attribute::Integer(values) => {
                    writeln!(writer, "SCALARS {name} long 1")?;
                    writeln!(writer, "LOOKUP_TABLE default")?;
                    for v in values {
                        writeln!(writer, "{v}")?;
                    }
                }
                Attribute::Boolean(values) => {
                    writeln!(writer, "SCALARS {name} int 1")?;
                    writeln!(writer, "LOOKUP_TABLE default")?;
                    for &v in values {
                        writeln!(writer, "{}", i32::from(v))?;
                    }
                }
                Attribute::Vector2(values) => {
                    writeln!(writer, "VECTORS {name} double")?;
                    for [x, y] in values {
                        writeln!(writer, "{x} {y} 0")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Legacy array names are whitespace-delimited tokens.
fn array_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

impl MeshWriter for VtkLegacyWriter {
    fn write<W: Write>(&self, mut writer: W, data: &ExportData) -> Result<(), MeshError> {
        if data.cell_types.len() != data.num_cells {
            return Err(MeshError::AttributeLength {
                name: "cell_types".into(),
                expected: data.num_cells,
                found: data.cell_types.len(),
            });
        }

        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "{}", self.title)?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;
        writeln!(writer, "POINTS {} double", data.points.len())?;
        for [x, y, z] in &data.points {
            writeln!(writer, "{x} {y} {z}")?;
        }

        writeln!(
            writer,
            "CELLS {} {}",
            data.num_cells,
            data.connectivity.len()
        )?;
        let mut rest = data.connectivity.as_slice();
        for _ in 0..data.num_cells {
            let (&n, tail) = rest.split_first().ok_or_else(|| {
                MeshError::InvariantViolation("cell array shorter than cell count".into())
            })?;
            if tail.len() < n {
                return Err(MeshError::InvariantViolation(format!(
                    "cell array truncated: need {n} ids, have {}",
                    tail.len()
                )));
            }
            let (ids, tail) = tail.split_at(n);
            write!(writer, "{n}")?;
            for id in ids {
                write!(writer, " {id}")?;
            }
            writeln!(writer)?;
            rest = tail;
        }

        writeln!(writer, "CELL_TYPES {}", data.cell_types.len())?;
        for vtk_type in &data.cell_types {
            writeln!(writer, "{vtk_type}")?;
        }

        Self::write_attributes(&mut writer, "POINT_DATA", data.points.len(), &data.node_data)?;
        Self::write_attributes(&mut writer, "CELL_DATA", data.num_cells, &data.cell_data)?;
        writer.flush()?;
        log::debug!(
            "vtk: wrote {} points, {} cells",
            data.points.len(),
            data.num_cells
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh2d;

    #[test]
    fn writes_quad_header_and_cell_data() {
        let mesh = Mesh2d::quadrilateral(
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            &[[0, 1, 2, 3]],
        )
        .unwrap();
        let data = ExportData::from_mesh(&mesh)
            .with_cell_data("is boundary", vec![true])
            .unwrap();
        let mut buf = Vec::new();
        VtkLegacyWriter::default().write(&mut buf, &data).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[3], "DATASET UNSTRUCTURED_GRID");
        assert!(text.contains("CELLS 1 5\n4 0 1 2 3\n"));
        assert!(text.contains("CELL_TYPES 1\n9\n"));
        assert!(text.contains("CELL_DATA 1\nSCALARS is_boundary int 1\nLOOKUP_TABLE default\n1\n"));
        assert!(!text.contains("POINT_DATA"));
    }
}
