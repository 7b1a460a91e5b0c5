mod common;

use common::{l_mesh, p, square, strip};
use ddls_nav::config::NavConfig;
use ddls_nav::mesh::{LocateResult, Mesh};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn test_locate_classifies_faces_edges_and_vertices() {
    let mesh = square(false);

    assert_eq!(mesh.locate(&p(1.0, 1.0)), Some(LocateResult::Face(0)));
    assert_eq!(mesh.locate(&p(9.0, 9.0)), Some(LocateResult::Face(1)));

    match mesh.locate(&p(5.0, 5.0)) {
        Some(LocateResult::Edge(he)) => {
            let diagonal = mesh.half_edge_between(1, 3).unwrap();
            assert!(mesh.same_edge(he, diagonal));
        }
        other => panic!("expected the diagonal, got {other:?}"),
    }

    assert_eq!(mesh.locate(&p(10.0, 10.0)), Some(LocateResult::Vertex(2)));
}

#[test]
fn test_locate_outside_is_none() {
    let mesh = l_mesh();
    assert_eq!(mesh.locate(&p(-1.0, 1.0)), None);
    // the notch of the L
    assert_eq!(mesh.locate(&p(4.0, 6.0)), None);
    assert_eq!(mesh.locate(&p(f64::NAN, 1.0)), None);
}

/// Edges compare as undirected.
fn normalized(mesh: &Mesh<f64>, loc: Option<LocateResult>) -> Option<LocateResult> {
    loc.map(|l| match l {
        LocateResult::Edge(he) => LocateResult::Edge(he.min(mesh.twin(he))),
        other => other,
    })
}

#[test]
fn test_walk_agrees_with_scan() {
    let mesh = strip(40);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let q = p(rng.random_range(0.0..80.0), rng.random_range(0.0..2.0));
        assert_eq!(
            normalized(&mesh, mesh.locate(&q)),
            normalized(&mesh, mesh.locate_by_scan(&q)),
            "at {q:?}"
        );
    }
}

#[test]
fn test_locate_is_deterministic() {
    let mesh = strip(25);
    let q = p(31.3, 0.7);
    let first = mesh.locate(&q);
    for _ in 0..10 {
        assert_eq!(mesh.locate(&q), first);
    }
}

#[test]
fn test_short_walk_budget_still_finds_the_face() {
    let mut mesh = strip(30);
    let config = NavConfig {
        locate_max_steps: 1,
        ..NavConfig::default()
    };
    mesh.apply_config(&config);
    let q = p(59.5, 1.0);
    assert_eq!(mesh.locate(&q), mesh.locate_by_scan(&q));
    assert!(mesh.locate(&q).is_some());
}

#[test]
fn test_footprint_against_constraints() {
    let mesh = strip(5);
    assert!(!mesh.is_circle_intersecting_any_constraint(&p(5.0, 1.0), 0.9));
    assert!(mesh.is_circle_intersecting_any_constraint(&p(5.0, 1.0), 1.0));
    assert!(mesh.is_circle_intersecting_any_constraint(&p(5.0, 0.5), 0.6));
    // outside the mesh counts as blocked
    assert!(mesh.is_circle_intersecting_any_constraint(&p(5.0, 3.0), 0.1));

    let walled = square(true);
    assert!(walled.is_circle_intersecting_any_constraint(&p(4.0, 4.0), 1.5));
    assert!(!walled.is_circle_intersecting_any_constraint(&p(3.0, 3.0), 1.0));
}
