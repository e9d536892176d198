#![allow(dead_code)]
use mesh2d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EPS: f64 = 1e-12;

/// Unit square split into triangles `[0,1,2]` and `[0,2,3]`.
pub fn two_triangles() -> Mesh2d {
    Mesh2d::triangle(
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        &[[0, 1, 2], [0, 2, 3]],
    )
    .unwrap()
}

/// Four counter-clockwise triangles around the centre node 4 of the unit square.
pub fn fan() -> Mesh2d {
    Mesh2d::triangle(
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.5, 0.5]],
        &[[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]],
    )
    .unwrap()
}

/// Structured unit-square mesh with interior nodes moved by up to a fifth of
/// the grid spacing. Boundary nodes stay put so the total area remains one.
pub fn jittered_unit_square(nx: usize, ny: usize, cell_type: CellType, seed: u64) -> Mesh2d {
    let mesh = unit_square(nx, ny, cell_type).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let (hx, hy) = (0.2 / nx as f64, 0.2 / ny as f64);
    let nodes = mesh
        .nodes()
        .iter()
        .map(|&[x, y]| {
            let on_boundary = x == 0.0 || y == 0.0 || x == 1.0 || y == 1.0;
            if on_boundary {
                [x, y]
            } else {
                [x + rng.gen_range(-hx..hx), y + rng.gen_range(-hy..hy)]
            }
        })
        .collect();
    Mesh2d::new(nodes, mesh.cells().clone(), cell_type).unwrap()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

pub fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-10, "got {got}, want {want}");
}
