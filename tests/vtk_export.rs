mod util;
use util::*;

use mesh2d::prelude::*;

fn render(data: &ExportData) -> String {
    let mut buf = Vec::new();
    VtkLegacyWriter::with_title("two triangles")
        .write(&mut buf, data)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn writes_points_cells_and_attributes() {
    let mesh = two_triangles();
    let topo = mesh.topology();
    let area = mesh.cell_area(&IndexSelection::All).unwrap();
    let data = ExportData::from(&mesh)
        .with_node_data("boundary", topo.boundary_node_flag())
        .unwrap()
        .with_node_data("h", mesh.node_size())
        .unwrap()
        .with_cell_data("area", area)
        .unwrap()
        .with_cell_data(
            "centre",
            mesh.entity_barycenter(EntityKind::Cell, &IndexSelection::All)
                .unwrap(),
        )
        .unwrap()
        .with_cell_data("id", vec![10i64, 11])
        .unwrap();
    let text = render(&data);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "two triangles");
    assert_eq!(lines[4], "POINTS 4 double");
    assert_eq!(lines[5], "0 0 0");
    assert_eq!(lines[7], "1 1 0");
    assert!(text.contains("CELLS 2 8\n3 0 1 2\n3 0 2 3\n"));
    assert!(text.contains("CELL_TYPES 2\n5\n5\n"));
    assert!(text.contains("POINT_DATA 4\nSCALARS boundary int 1\nLOOKUP_TABLE default\n1\n1\n1\n1\n"));
    assert!(text.contains("SCALARS h double 1"));
    assert!(text.contains("CELL_DATA 2\nSCALARS area double 1\nLOOKUP_TABLE default\n0.5\n0.5\n"));
    assert!(text.contains("VECTORS centre double\n"));
    assert!(text.contains("SCALARS id long 1\nLOOKUP_TABLE default\n10\n11\n"));
}

#[test]
fn rejects_mismatched_attribute() {
    let mesh = fan();
    let err = ExportData::from_mesh(&mesh)
        .with_node_data("h", vec![1.0f64; 4])
        .unwrap_err();
    assert_eq!(
        err,
        MeshError::AttributeLength {
            name: "h".into(),
            expected: 5,
            found: 4
        }
    );
}

#[test]
fn truncated_cell_array_is_an_error() {
    let mut data = ExportData::from_mesh(&two_triangles());
    data.connectivity.truncate(6);
    let mut buf = Vec::new();
    let err = VtkLegacyWriter::default().write(&mut buf, &data).unwrap_err();
    assert!(matches!(err, MeshError::InvariantViolation(_)));
}

#[test]
fn write_to_file() {
    let path = std::env::temp_dir().join(format!("mesh2d_vtk_{}.vtk", std::process::id()));
    let data = ExportData::from_mesh(&unit_square(2, 2, CellType::Quadrilateral).unwrap());
    let file = std::fs::File::create(&path).unwrap();
    VtkLegacyWriter::default()
        .write(std::io::BufWriter::new(file), &data)
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(text.starts_with("# vtk DataFile Version 3.0\nmesh2d\nASCII\n"));
    assert!(text.contains("CELLS 4 20\n"));
}
