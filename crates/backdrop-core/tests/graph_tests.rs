// Host-side tests for the section graph: routing, projection and hit testing.

use backdrop_core::*;
use glam::Vec2;
use backdrop_core::Section::*;

fn path(sections: &[Section]) -> SectionPath {
    sections.iter().copied().collect()
}

#[test]
fn reference_graph_passes_validation() {
    let reference = SectionGraph::reference();
    let rebuilt = SectionGraph::new(reference.nodes().to_vec(), reference.edges().to_vec());
    assert!(rebuilt.is_ok());

    let mesh = SectionGraph::mesh();
    assert!(SectionGraph::new(mesh.nodes().to_vec(), mesh.edges().to_vec()).is_ok());
}

#[test]
fn path_to_self_is_single_node() {
    let g = SectionGraph::reference();
    for s in Section::ALL {
        assert_eq!(g.shortest_path(s, s), path(&[s]));
    }
}

#[test]
fn direct_edge_gives_two_node_path() {
    let g = SectionGraph::reference();
    assert_eq!(g.shortest_path(Home, Music), path(&[Home, Music]));
    assert_eq!(g.shortest_path(Contact, Home), path(&[Contact, Home]));
}

#[test]
fn spokes_route_through_home() {
    let g = SectionGraph::reference();
    assert_eq!(g.shortest_path(Music, About), path(&[Music, Home, About]));
    assert_eq!(g.shortest_path(Shows, Contact), path(&[Shows, Home, Contact]));
}

#[test]
fn every_pair_is_reachable_in_at_most_two_hops_on_the_hub() {
    let g = SectionGraph::reference();
    for a in Section::ALL {
        for b in Section::ALL {
            let p = g.shortest_path(a, b);
            assert_eq!(p.first(), Some(&a));
            assert_eq!(p.last(), Some(&b));
            assert!(p.len() <= 3, "{a}->{b}: {p:?}");
            for w in p.windows(2) {
                assert!(g.has_edge(w[0], w[1]), "{a}->{b} uses a missing edge");
            }
        }
    }
}

#[test]
fn ties_follow_edge_declaration_order() {
    // Music reaches Contact via Home (declared first) or via Shows.
    let g = SectionGraph::mesh();
    assert_eq!(g.shortest_path(Music, Contact), path(&[Music, Home, Contact]));
    assert_eq!(g.shortest_path(Music, About), path(&[Music, About]));
}

#[test]
fn neighbors_come_in_declaration_order() {
    let g = SectionGraph::mesh();
    let n: Vec<Section> = g.neighbors(Music).collect();
    assert_eq!(n, vec![Home, Shows, About]);
}

#[test]
fn validation_rejects_bad_graphs() {
    let nodes: Vec<SectionNode> = Section::ALL.into_iter().map(SectionNode::reference).collect();

    let missing = nodes[..4].to_vec();
    assert_eq!(
        SectionGraph::new(missing, vec![(Home, Music)]).err(),
        Some(GraphError::MissingSection(Contact))
    );

    let mut dup = nodes.clone();
    dup.push(SectionNode::reference(Shows));
    assert_eq!(
        SectionGraph::new(dup, vec![]).err(),
        Some(GraphError::DuplicateSection(Shows))
    );

    assert_eq!(
        SectionGraph::new(nodes.clone(), vec![(About, About)]).err(),
        Some(GraphError::SelfLoop(About))
    );

    let split = vec![(Home, Music), (Home, Shows), (About, Contact)];
    assert_eq!(
        SectionGraph::new(nodes, split).err(),
        Some(GraphError::Disconnected {
            from: Home,
            to: About
        })
    );
}

#[test]
fn projection_scales_normalized_positions() {
    let g = SectionGraph::reference();
    assert_eq!(g.projected_position(Home, 1000.0, 800.0), Vec2::new(500.0, 400.0));
    assert_eq!(g.projected_position(Music, 1000.0, 800.0), Vec2::new(250.0, 200.0));
    assert_eq!(g.projected_position(Contact, 1000.0, 800.0), Vec2::new(750.0, 600.0));
}

#[test]
fn route_waypoints_match_projection() {
    let g = SectionGraph::reference();
    let r = g.route(Shows, About, 1200.0, 900.0);
    assert_eq!(r.sections, path(&[Shows, Home, About]));
    assert_eq!(r.target(), Some(About));
    let expected: Vec<Vec2> = r
        .sections
        .iter()
        .map(|&s| g.projected_position(s, 1200.0, 900.0))
        .collect();
    assert_eq!(r.waypoints.to_vec(), expected);
}

#[test]
fn hit_test_uses_doubled_node_radius() {
    let g = SectionGraph::reference();
    // home at (500, 400), radius 22 -> hit within 44px
    assert_eq!(g.hit_test(Vec2::new(500.0, 400.0), 1000.0, 800.0), Some(Home));
    assert_eq!(g.hit_test(Vec2::new(540.0, 400.0), 1000.0, 800.0), Some(Home));
    assert_eq!(g.hit_test(Vec2::new(550.0, 400.0), 1000.0, 800.0), None);
    // music at (250, 200), radius 18 -> 36px
    assert_eq!(g.hit_test(Vec2::new(250.0, 235.0), 1000.0, 800.0), Some(Music));
    assert_eq!(g.hit_test(Vec2::new(0.0, 0.0), 1000.0, 800.0), None);
}
