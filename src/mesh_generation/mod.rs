//! Structured mesh generators for rectangles.
//!
//! Nodes are numbered row by row from `min`; cells are emitted row by row
//! with counter-clockwise vertex order, so every cell has positive area.
//! Triangle meshes split each grid square along its `v0 → v2` diagonal.

use crate::data::table::Table;
use crate::geometry::metrics::Point2;
use crate::mesh::Mesh2d;
use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;

fn invalid_geometry(message: impl Into<String>) -> MeshError {
    MeshError::InvalidGeometry(message.into())
}

/// Generate a structured 2D box mesh over `[min, max]` with `nx`×`ny` squares.
pub fn structured_box_2d(
    nx: usize,
    ny: usize,
    min: Point2,
    max: Point2,
    cell_type: CellType,
) -> Result<Mesh2d, MeshError> {
    if nx == 0 || ny == 0 {
        return Err(invalid_geometry("nx and ny must be positive"));
    }
    if !(min[0] < max[0] && min[1] < max[1]) {
        return Err(invalid_geometry(format!(
            "empty box: min={min:?} max={max:?}"
        )));
    }

    let dx = (max[0] - min[0]) / nx as f64;
    let dy = (max[1] - min[1]) / ny as f64;
    let mut nodes = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        let y = min[1] + dy * j as f64;
        for i in 0..=nx {
            let x = min[0] + dx * i as f64;
            nodes.push([x, y]);
        }
    }

    let nvc = cell_type.num_vertices();
    let per_square = match cell_type {
        CellType::Triangle => 2,
        CellType::Quadrilateral => 1,
    };
    let mut cells = Vec::with_capacity(nx * ny * per_square * nvc);
    let row_stride = nx + 1;
    for j in 0..ny {
        for i in 0..nx {
            let v0 = j * row_stride + i;
            let v1 = v0 + 1;
            let v3 = v0 + row_stride;
            let v2 = v3 + 1;
            match cell_type {
                CellType::Triangle => cells.extend_from_slice(&[v0, v1, v2, v0, v2, v3]),
                CellType::Quadrilateral => cells.extend_from_slice(&[v0, v1, v2, v3]),
            }
        }
    }

    let cells = Table::try_from_flat(nx * ny * per_square, nvc, cells)?;
    log::debug!(
        "generated {nx}x{ny} {cell_type} box: {} nodes, {} cells",
        nodes.len(),
        cells.rows()
    );
    Mesh2d::new(nodes, cells, cell_type)
}

/// Structured mesh of `[0, 1]²`.
pub fn unit_square(nx: usize, ny: usize, cell_type: CellType) -> Result<Mesh2d, MeshError> {
    structured_box_2d(nx, ny, [0.0, 0.0], [1.0, 1.0], cell_type)
}
