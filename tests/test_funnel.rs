mod common;

use approx::assert_abs_diff_eq;
use common::{
    assert_point_near, clearance, densify, fan, init_logger, l_mesh, p, square, strip,
};
use ddls_nav::config::{AStarConfig, NavConfig};
use ddls_nav::geometry::path_length;
use ddls_nav::navigation::{ClearanceAStar, Corridor, FunnelSmoother};

#[test]
fn test_empty_corridor_gives_empty_path() {
    let mesh = square(false);
    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    assert!(
        funnel
            .find_path(&mesh, p(1.0, 1.0), p(9.0, 9.0), &Corridor::default())
            .is_empty()
    );
}

#[test]
fn test_single_face_is_direct() {
    let mesh = square(false);
    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(1.0, 1.0), p(3.0, 2.0), &Corridor::single(0));
    assert_eq!(path, vec![p(1.0, 1.0), p(3.0, 2.0)]);
}

#[test]
fn test_l_turn_hugs_the_inner_corner() {
    init_logger();
    let mesh = l_mesh();
    let mut astar = ClearanceAStar::new(&mesh, 0.0, &AStarConfig::default());
    let corridor = astar.find_path(p(1.0, 1.0), p(9.0, 9.0));

    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(1.0, 1.0), p(9.0, 9.0), &corridor);
    assert_eq!(path, vec![p(1.0, 1.0), p(8.0, 2.0), p(9.0, 9.0)]);
}

#[test]
fn test_start_on_first_crossed_edge() {
    let mesh = l_mesh();
    // (4, 1) lies on edge 0-6, shared by the first two corridor faces
    let mut astar = ClearanceAStar::new(&mesh, 0.0, &AStarConfig::default());
    let from_inside = astar.find_path(p(1.0, 1.0), p(9.0, 9.0));
    let corridor = Corridor {
        faces: from_inside.faces.clone(),
        edges: from_inside.edges.clone(),
    };

    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(4.0, 1.0), p(9.0, 9.0), &corridor);
    assert_eq!(path, vec![p(4.0, 1.0), p(8.0, 2.0), p(9.0, 9.0)]);
}

#[test]
fn test_straight_strip_stays_straight() {
    let mesh = strip(10);
    let mut astar = ClearanceAStar::new(&mesh, 0.0, &AStarConfig::default());
    let corridor = astar.find_path(p(0.5, 1.0), p(19.5, 1.0));

    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(0.5, 1.0), p(19.5, 1.0), &corridor);
    assert_eq!(path, vec![p(0.5, 1.0), p(19.5, 1.0)]);
}

#[test]
fn test_inflated_turn_keeps_clearance() {
    init_logger();
    let mesh = l_mesh();
    let radius = 0.5;
    let mut astar = ClearanceAStar::new(&mesh, radius, &AStarConfig::default());
    let corridor = astar.find_path(p(1.0, 1.0), p(9.0, 9.0));
    assert!(!corridor.is_empty());

    let funnel = FunnelSmoother::new(radius, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(1.0, 1.0), p(9.0, 9.0), &corridor);
    assert!(path.len() > 3);
    assert_eq!(path.first(), Some(&p(1.0, 1.0)));
    assert_eq!(path.last(), Some(&p(9.0, 9.0)));

    let corner = p(8.0, 2.0);
    for q in &path {
        assert!(q.distance(&corner) >= radius - 1e-9, "{q:?} cuts the corner");
    }
    for q in densify(&path, 0.05) {
        // chords of the arc dip slightly inside the circle
        assert!(q.distance(&corner) >= radius * 0.97, "{q:?} cuts the corner");
        assert!(clearance(&mesh, &q) > 0.0);
    }

    let straight = [p(1.0, 1.0), p(8.0, 2.0), p(9.0, 9.0)];
    assert!(path_length(&path) > path_length(&straight));
}

#[test]
fn test_endpoint_pushed_off_nearby_vertex() {
    let mesh = square(false);
    let radius = 1.0;
    let funnel = FunnelSmoother::new(radius, &NavConfig::default());

    let start = p(0.3, 0.4);
    let path = funnel.find_path(&mesh, start, p(3.0, 3.0), &Corridor::single(0));
    assert_eq!(path.len(), 2);
    assert_abs_diff_eq!(path[0].distance(&p(0.0, 0.0)), 1.01, epsilon = 1e-9);
    assert!(path[0].distance(&start) <= radius * 1.02);
    assert!(mesh.classify_in_face(&path[0], 0).is_some());
}

#[test]
fn test_push_never_leaves_the_face() {
    // face 0 of the strip is the small triangle (0,0) (2,0) (0,2)
    let mesh = strip(1);
    let radius = 1.5;
    let funnel = FunnelSmoother::new(radius, &NavConfig::default());

    let start = p(0.3, 0.3);
    let goal = p(0.2, 1.2);
    let path = funnel.find_path(&mesh, start, goal, &Corridor::single(0));
    assert_eq!(path.len(), 2);
    // the push along the diagonal stops on the hypotenuse
    assert_point_near(&path[0], &p(1.0, 1.0), 1e-9);
    assert!(path[0].distance(&start) <= radius * 1.02);
    for q in &path {
        assert!(mesh.classify_in_face(q, 0).is_some(), "{q:?} left the face");
    }
}

#[test]
fn test_start_on_a_vertex_of_the_first_crossed_edge() {
    init_logger();
    let mesh = fan();
    // south fan face into the east one, over the spoke (20,0)-(10,5)
    let spoke = mesh.half_edge_between(1, 4).unwrap();
    let corridor = Corridor {
        faces: vec![0, 1],
        edges: vec![spoke],
    };
    let (centre, goal) = (p(10.0, 5.0), p(18.0, 5.0));

    for radius in [0.0, 0.5] {
        let funnel = FunnelSmoother::new(radius, &NavConfig::default());
        let path = funnel.try_find_path(&mesh, centre, goal, &corridor).unwrap();
        assert_eq!(path, vec![centre, goal], "radius {radius}");
    }
}

#[test]
fn test_goal_on_a_vertex_of_the_last_crossed_edge() {
    init_logger();
    let mesh = fan();
    let spoke = mesh.half_edge_between(4, 1).unwrap();
    let corridor = Corridor {
        faces: vec![1, 0],
        edges: vec![spoke],
    };
    let (start, centre) = (p(18.0, 5.0), p(10.0, 5.0));

    for radius in [0.0, 0.5] {
        let funnel = FunnelSmoother::new(radius, &NavConfig::default());
        let path = funnel.try_find_path(&mesh, start, centre, &corridor).unwrap();
        assert_eq!(path, vec![start, centre], "radius {radius}");
    }
}

#[test]
fn test_crossed_edge_may_be_given_from_either_face() {
    let mesh = fan();
    let corridor = Corridor {
        faces: vec![0, 1],
        // the east face's copy of the spoke
        edges: vec![mesh.half_edge_between(4, 1).unwrap()],
    };
    let funnel = FunnelSmoother::new(0.0, &NavConfig::default());
    let path = funnel.find_path(&mesh, p(10.0, 1.0), p(18.0, 5.0), &corridor);
    assert_eq!(path, vec![p(10.0, 1.0), p(18.0, 5.0)]);
}
