mod common;

use common::{l_mesh, p, square, strip};
use ddls_nav::error::MeshError;
use ddls_nav::mesh::Mesh;

#[test]
fn test_add_triangle_links_a_cycle() {
    let mut mesh = Mesh::<f64>::new();
    let v0 = mesh.add_vertex(p(0.0, 0.0));
    let v1 = mesh.add_vertex(p(1.0, 0.0));
    let v2 = mesh.add_vertex(p(0.0, 1.0));

    let f = mesh.add_triangle(v0, v1, v2).unwrap();
    assert_eq!(mesh.faces.len(), 1);
    // each directed edge gets a twin placeholder
    assert_eq!(mesh.half_edges.len(), 6);

    let [e0, e1, e2] = mesh.face_half_edges(f);
    assert_eq!(mesh.next(e0), e1);
    assert_eq!(mesh.next(e1), e2);
    assert_eq!(mesh.next(e2), e0);
    assert_eq!(mesh.prev(e0), e2);
    for he in [e0, e1, e2] {
        assert_eq!(mesh.left_face(he), Some(f));
        assert_eq!(mesh.twin(mesh.twin(he)), he);
        assert_eq!(mesh.origin(he), mesh.destination(mesh.twin(he)));
    }
}

#[test]
fn test_clockwise_input_is_reordered() {
    let mut mesh = Mesh::<f64>::new();
    let a = mesh.add_vertex(p(0.0, 0.0));
    let b = mesh.add_vertex(p(0.0, 1.0));
    let c = mesh.add_vertex(p(1.0, 0.0));
    let f = mesh.add_triangle(a, b, c).unwrap();
    mesh.build_boundary_loops();

    assert_eq!(mesh.face_vertices(f), [a, c, b]);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_rejects_bad_triangles() {
    let mut mesh = Mesh::<f64>::new();
    let a = mesh.add_vertex(p(0.0, 0.0));
    let b = mesh.add_vertex(p(1.0, 0.0));
    let c = mesh.add_vertex(p(2.0, 0.0));
    let d = mesh.add_vertex(p(0.0, 1.0));

    assert_eq!(
        mesh.add_triangle(a, b, 9),
        Err(MeshError::VertexOutOfRange { index: 9, len: 4 })
    );
    assert_eq!(mesh.add_triangle(a, b, c), Err(MeshError::DegenerateTriangle(a, b, c)));

    mesh.add_triangle(a, b, d).unwrap();
    let before = mesh.half_edges.len();
    assert_eq!(mesh.add_triangle(a, b, d), Err(MeshError::NonManifoldEdge(a, b)));
    assert_eq!(mesh.half_edges.len(), before);
}

#[test]
fn test_boundary_is_constrained() {
    let mesh = square(false);
    assert!(mesh.validate().is_ok());

    let diagonal = mesh.half_edge_between(1, 3).unwrap();
    assert!(!mesh.is_constrained(diagonal));
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        let he = mesh.half_edge_between(a, b).unwrap();
        assert!(mesh.is_constrained(he));
        assert!(mesh.is_constrained(mesh.twin(he)));
        assert_eq!(mesh.right_face(he), None);
    }

    let walled = square(true);
    let diagonal = walled.half_edge_between(3, 1).unwrap();
    assert!(walled.is_constrained(diagonal));
    assert!(walled.is_constrained(walled.twin(diagonal)));
}

#[test]
fn test_unknown_constraint_is_an_error() {
    let mut mesh = square(false);
    assert_eq!(mesh.constrain_edge(0, 2), Err(MeshError::UnknownEdge(0, 2)));
}

#[test]
fn test_rectangle_factory() {
    let mesh = Mesh::<f64>::rectangle(4.0, 3.0).unwrap();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert!(mesh.validate().is_ok());
    assert!(mesh.half_edge_between(0, 2).is_some());

    assert!(matches!(
        Mesh::<f64>::rectangle(0.0, 3.0),
        Err(MeshError::InvalidExtent { .. })
    ));
}

#[test]
fn test_inner_edges_skip_the_outer_face() {
    let mesh = strip(3);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.face_count(), 6);

    // first triangle touches the outer face on two sides
    assert_eq!(mesh.inner_edges(0).len(), 1);
    // middle triangles have one wall
    assert_eq!(mesh.inner_edges(2).len(), 2);
    for he in mesh.inner_edges(2) {
        assert!(mesh.right_face(he).is_some());
    }
}

#[test]
fn test_vertex_rotation() {
    let mesh = l_mesh();
    assert!(mesh.validate().is_ok());

    // inner corner (8, 2) touches five triangles
    let mut faces = mesh.incident_faces(6).to_vec();
    faces.sort();
    assert_eq!(faces, vec![0, 1, 3, 4, 5]);

    let outgoing = mesh.outgoing_half_edges(6);
    assert!(outgoing.iter().all(|&he| mesh.origin(he) == 6));
    assert_eq!(outgoing.len(), 6);
}

#[test]
fn test_projection_helpers() {
    let mesh = square(false);
    let bottom = mesh.half_edge_between(0, 1).unwrap();
    assert_eq!(mesh.project_orthogonal(&p(3.0, 4.0), bottom), p(3.0, 0.0));
    assert_eq!(mesh.distance_squared_vertex_to_edge(3, bottom), 100.0);
}

#[test]
fn test_f32_mesh() {
    let mesh = Mesh::<f32>::rectangle(2.0, 1.0).unwrap();
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.face_count(), 2);
}
