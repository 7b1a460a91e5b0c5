mod common;

use approx::assert_abs_diff_eq;
use common::{l_mesh, p};
use ddls_nav::config::NavConfig;
use ddls_nav::geometry::path_length;
use ddls_nav::navigation::{Agent, LinearPathSampler, PathFinder};

#[test]
fn test_agent_walks_planned_path() {
    let mesh = l_mesh();
    let mut pf = PathFinder::new(&mesh, Agent::new(p(1.0, 1.0), 0.3), &NavConfig::default());
    let path = pf.find_path(p(9.0, 9.0));
    assert!(!path.is_empty());

    let step = 0.25;
    let mut sampler = LinearPathSampler::new(path.clone(), step);
    assert_abs_diff_eq!(sampler.length(), path_length(&path), epsilon = 1e-12);

    let mut agent = *pf.agent();
    let mut previous = agent.position;
    while sampler.advance() {
        sampler.place(&mut agent);
        let moved = previous.distance(&agent.position);
        assert!(moved <= step + 1e-9, "jumped {moved}");
        previous = agent.position;
    }
    assert_eq!(agent.position, p(9.0, 9.0));

    pf.set_position(agent.position);
    assert_eq!(pf.agent().position, p(9.0, 9.0));
}

#[test]
fn test_resampling_a_new_path_rewinds() {
    let mut sampler = LinearPathSampler::new(vec![p(0.0, 0.0), p(4.0, 0.0)], 1.0);
    sampler.set_count(3);
    sampler.precompute();

    sampler.set_path(vec![p(0.0, 0.0), p(0.0, 2.0)]);
    assert_eq!(sampler.count(), 0);
    assert_eq!(sampler.count_max(), 2);
    assert_eq!(sampler.samples(), vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)]);
}
