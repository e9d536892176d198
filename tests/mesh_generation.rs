mod util;
use util::*;

use mesh2d::prelude::*;

#[test]
fn box_coordinates_are_row_major() {
    let mesh = structured_box_2d(2, 1, [-1.0, 0.0], [1.0, 2.0], CellType::Quadrilateral).unwrap();
    assert_eq!(
        mesh.nodes(),
        &[
            [-1.0, 0.0],
            [0.0, 0.0],
            [1.0, 0.0],
            [-1.0, 2.0],
            [0.0, 2.0],
            [1.0, 2.0]
        ]
    );
    assert_eq!(mesh.cells().row(0), &[0, 1, 4, 3]);
    assert_eq!(mesh.cells().row(1), &[1, 2, 5, 4]);
    let area: f64 = mesh.cell_area(&IndexSelection::All).unwrap().iter().sum();
    assert_close(area, 4.0);
}

#[test]
fn triangles_split_along_first_diagonal() {
    let mesh = unit_square(1, 1, CellType::Triangle).unwrap();
    assert_eq!(mesh.cells().row(0), &[0, 1, 3]);
    assert_eq!(mesh.cells().row(1), &[0, 3, 2]);
    let area = mesh.cell_area(&IndexSelection::All).unwrap();
    assert_close(area[0], 0.5);
    assert_close(area[1], 0.5);
}

#[test]
fn grid_boundary_counts() {
    let (nx, ny) = (5, 3);
    for ct in [CellType::Triangle, CellType::Quadrilateral] {
        let topo = unit_square(nx, ny, ct).unwrap().topology().clone();
        assert_eq!(topo.boundary_edge_index().len(), 2 * (nx + ny));
        assert_eq!(topo.boundary_node_index().len(), 2 * (nx + ny));
        let interior_nodes = (nx - 1) * (ny - 1);
        let flags = topo.boundary_node_flag();
        assert_eq!(flags.iter().filter(|&&b| !b).count(), interior_nodes);
    }
}

#[test]
fn degenerate_arguments_are_rejected() {
    for (nx, ny) in [(0, 1), (1, 0)] {
        let err = unit_square(nx, ny, CellType::Quadrilateral).unwrap_err();
        assert!(matches!(err, MeshError::InvalidGeometry(_)));
    }
    let err = structured_box_2d(2, 2, [0.0, 1.0], [1.0, 0.0], CellType::Triangle).unwrap_err();
    assert!(matches!(err, MeshError::InvalidGeometry(_)));
}
