//! Planar vector helpers and closed-form measures.
//!
//! Points are `[x, y]`. The edge normal convention used throughout the crate
//! is the row-vector product `t · [[0, -1], [1, 0]] = (t_y, -t_x)`, i.e. the
//! tangent rotated clockwise by 90°, pointing to the right of the edge.

pub type Point2 = [f64; 2];

#[inline]
pub fn sub(a: Point2, b: Point2) -> Point2 {
    [a[0] - b[0], a[1] - b[1]]
}

#[inline]
pub fn add(a: Point2, b: Point2) -> Point2 {
    [a[0] + b[0], a[1] + b[1]]
}

#[inline]
pub fn scale(a: Point2, s: f64) -> Point2 {
    [a[0] * s, a[1] * s]
}

#[inline]
pub fn dot(a: Point2, b: Point2) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// z-component of the 3D cross product of `a` and `b`.
#[inline]
pub fn cross(a: Point2, b: Point2) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

#[inline]
pub fn norm(a: Point2) -> f64 {
    dot(a, a).sqrt()
}

/// `a / |a|`. A zero vector yields NaN components.
#[inline]
pub fn normalize(a: Point2) -> Point2 {
    scale(a, 1.0 / norm(a))
}

/// Right-hand normal `(t_y, -t_x)` of a tangent.
#[inline]
pub fn right_normal(t: Point2) -> Point2 {
    [t[1], -t[0]]
}

/// Shoelace contribution of the directed segment `p0 → p1`.
///
/// Equals `(p1 - p0)ᵀ·[[0,-1],[1,0]]·p0 = cross(p0, p1)`; summing it over a
/// closed loop gives twice the enclosed signed area.
#[inline]
pub fn shoelace_term(p0: Point2, p1: Point2) -> f64 {
    dot(right_normal(sub(p1, p0)), p0)
}

/// Signed area of a closed polygon (positive for counter-clockwise order).
pub fn polygon_signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        sum += shoelace_term(points[i], points[(i + 1) % n]);
    }
    0.5 * sum
}

/// Arithmetic mean of a set of points; NaN for an empty set.
pub fn centroid(points: impl IntoIterator<Item = Point2>) -> Point2 {
    let mut acc = [0.0; 2];
    let mut n = 0usize;
    for p in points {
        acc = add(acc, p);
        n += 1;
    }
    scale(acc, 1.0 / n as f64)
}
