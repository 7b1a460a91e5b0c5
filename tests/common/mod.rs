#![allow(dead_code)]

use ddls_nav::geometry::Point2;
use ddls_nav::kernel::distance_squared_point_to_segment;
use ddls_nav::mesh::Mesh;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

pub fn assert_point_near(actual: &Point2<f64>, expected: &Point2<f64>, eps: f64) {
    assert!(
        actual.distance(expected) <= eps,
        "expected {expected:?}, got {actual:?}"
    );
}

/// 10 x 10 square split along its (10,0)-(0,10) diagonal.
pub fn square(diagonal_constrained: bool) -> Mesh<f64> {
    let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
    let constraints: &[(usize, usize)] = if diagonal_constrained { &[(1, 3)] } else { &[] };
    Mesh::from_triangles(&points, &[[0, 1, 3], [1, 2, 3]], constraints).unwrap()
}

/// Horizontal corridor `2 * segments` long and 2 wide, walls at y = 0 and y = 2.
pub fn strip(segments: usize) -> Mesh<f64> {
    let width = 2.0;
    let mut points = Vec::new();
    for i in 0..=segments {
        points.push(p(i as f64 * width, 0.0));
    }
    for i in 0..=segments {
        points.push(p(i as f64 * width, 2.0));
    }
    let bottom = |i: usize| i;
    let top = |i: usize| segments + 1 + i;

    let mut triangles = Vec::new();
    for i in 0..segments {
        triangles.push([bottom(i), bottom(i + 1), top(i)]);
        triangles.push([bottom(i + 1), top(i + 1), top(i)]);
    }
    Mesh::from_triangles(&points, &triangles, &[]).unwrap()
}

/// L-shaped corridor: east along y in [0, 2], then north along x in [8, 10].
/// The inner corner is (8, 2).
pub fn l_mesh() -> Mesh<f64> {
    let points = [
        p(0.0, 0.0),
        p(8.0, 0.0),
        p(10.0, 0.0),
        p(10.0, 2.0),
        p(10.0, 10.0),
        p(8.0, 10.0),
        p(8.0, 2.0),
        p(0.0, 2.0),
    ];
    let triangles = [
        [0, 1, 6],
        [0, 6, 7],
        [1, 2, 3],
        [1, 3, 6],
        [6, 3, 4],
        [6, 4, 5],
    ];
    Mesh::from_triangles(&points, &triangles, &[]).unwrap()
}

/// 20 x 10 rectangle fanned around the interior vertex 4 at (10, 5), with a
/// 10 x 10 square (faces 4 and 5, split along (20,0)-(30,10)) to the east.
///
/// Fan faces: 0 south, 1 east, 2 north, 3 west.
pub fn fan() -> Mesh<f64> {
    let points = [
        p(0.0, 0.0),
        p(20.0, 0.0),
        p(20.0, 10.0),
        p(0.0, 10.0),
        p(10.0, 5.0),
        p(30.0, 0.0),
        p(30.0, 10.0),
    ];
    let triangles = [
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4],
        [1, 5, 6],
        [1, 6, 2],
    ];
    Mesh::from_triangles(&points, &triangles, &[]).unwrap()
}

/// Smallest distance from `q` to any constrained edge.
pub fn clearance(mesh: &Mesh<f64>, q: &Point2<f64>) -> f64 {
    (0..mesh.half_edges.len())
        .filter(|&he| mesh.is_constrained(he))
        .map(|he| {
            let seg = mesh.segment(he);
            distance_squared_point_to_segment(q, &seg.a, &seg.b)
        })
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Points every `step` along `path`, endpoints included.
pub fn densify(path: &[Point2<f64>], step: f64) -> Vec<Point2<f64>> {
    let mut out = Vec::new();
    for pair in path.windows(2) {
        let n = (pair[0].distance(&pair[1]) / step).ceil().max(1.0) as usize;
        for k in 0..n {
            out.push(pair[0].lerp(&pair[1], k as f64 / n as f64));
        }
    }
    if let Some(last) = path.last() {
        out.push(*last);
    }
    out
}
