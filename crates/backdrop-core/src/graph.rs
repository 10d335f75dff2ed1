//! Section graph: which sections sit where, and which transitions are direct.

use crate::constants::{
    section_position_vec2, HOME_NODE_RADIUS, NODE_HIT_SCALE, SECTION_NODE_RADIUS,
};
use crate::error::GraphError;
use crate::section::Section;
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::collections::VecDeque;

pub type SectionPath = SmallVec<[Section; Section::COUNT]>;
pub type Waypoints = SmallVec<[Vec2; Section::COUNT]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionNode {
    pub section: Section,
    /// Fraction of the viewport, 0..1 on each axis.
    pub position: Vec2,
    /// Drawn radius in pixels.
    pub radius: f32,
}

impl SectionNode {
    /// Node at the reference layout position for `section`.
    pub fn reference(section: Section) -> Self {
        Self {
            section,
            position: section_position_vec2(section.index()),
            radius: if section == Section::Home {
                HOME_NODE_RADIUS
            } else {
                SECTION_NODE_RADIUS
            },
        }
    }
}

/// A resolved path together with its pixel-space waypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub sections: SectionPath,
    pub waypoints: Waypoints,
}

impl Route {
    #[inline]
    pub fn target(&self) -> Option<Section> {
        self.sections.last().copied()
    }
}

#[derive(Clone, Debug)]
pub struct SectionGraph {
    nodes: Vec<SectionNode>,
    slots: [usize; Section::COUNT],
    edges: Vec<(Section, Section)>,
}

impl Default for SectionGraph {
    fn default() -> Self {
        Self::reference()
    }
}

impl SectionGraph {
    /// Validate and build a graph. Every section must appear exactly once and
    /// every section must be reachable from every other.
    pub fn new(
        nodes: Vec<SectionNode>,
        edges: Vec<(Section, Section)>,
    ) -> Result<Self, GraphError> {
        let mut seen = FnvHashSet::default();
        for n in &nodes {
            if !seen.insert(n.section) {
                return Err(GraphError::DuplicateSection(n.section));
            }
        }
        if let Some(missing) = Section::ALL.into_iter().find(|s| !seen.contains(s)) {
            return Err(GraphError::MissingSection(missing));
        }
        if let Some(&(s, _)) = edges.iter().find(|(a, b)| a == b) {
            return Err(GraphError::SelfLoop(s));
        }

        let graph = Self::from_parts(nodes, edges);
        let root = graph.nodes[0].section;
        let reached = graph.reachable_from(root);
        if let Some(&unreached) = Section::ALL.iter().find(|s| !reached.contains(*s)) {
            return Err(GraphError::Disconnected {
                from: root,
                to: unreached,
            });
        }
        Ok(graph)
    }

    /// Hub layout: home links to every other section.
    pub fn reference() -> Self {
        Self::from_parts(
            Section::ALL.into_iter().map(SectionNode::reference).collect(),
            vec![
                (Section::Home, Section::Music),
                (Section::Home, Section::Shows),
                (Section::Home, Section::About),
                (Section::Home, Section::Contact),
            ],
        )
    }

    /// Hub plus a ring around the outer sections.
    pub fn mesh() -> Self {
        let mut graph = Self::reference();
        graph.edges.extend([
            (Section::Music, Section::Shows),
            (Section::Shows, Section::Contact),
            (Section::About, Section::Contact),
            (Section::Music, Section::About),
        ]);
        graph
    }

    fn from_parts(nodes: Vec<SectionNode>, edges: Vec<(Section, Section)>) -> Self {
        let mut slots = [0usize; Section::COUNT];
        for (i, n) in nodes.iter().enumerate() {
            slots[n.section.index()] = i;
        }
        Self {
            nodes,
            slots,
            edges,
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[SectionNode] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[(Section, Section)] {
        &self.edges
    }

    #[inline]
    pub fn node(&self, section: Section) -> &SectionNode {
        &self.nodes[self.slots[section.index()]]
    }

    /// Neighbours of `section`, in edge declaration order.
    pub fn neighbors(&self, section: Section) -> impl Iterator<Item = Section> + '_ {
        self.edges.iter().filter_map(move |&(a, b)| {
            if a == section {
                Some(b)
            } else if b == section {
                Some(a)
            } else {
                None
            }
        })
    }

    pub fn has_edge(&self, a: Section, b: Section) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// Breadth-first shortest path from `from` to `to`, both inclusive.
    ///
    /// Ties go to the path found first when edges are walked in declaration
    /// order. If no route exists the direct pair is returned and a warning is
    /// logged; a validated graph never takes that branch.
    pub fn shortest_path(&self, from: Section, to: Section) -> SectionPath {
        if from == to {
            return smallvec![from];
        }
        let mut parents: FnvHashMap<Section, Section> = FnvHashMap::default();
        let mut visited: FnvHashSet<Section> = FnvHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == to {
                    return unwind(&parents, from, to);
                }
                queue.push_back(next);
            }
        }

        log::warn!(
            "[graph] no route from {} to {}; using a direct hop (graph should be connected)",
            from,
            to
        );
        smallvec![from, to]
    }

    /// Normalized node position scaled to a `width` x `height` viewport.
    #[inline]
    pub fn projected_position(&self, section: Section, width: f32, height: f32) -> Vec2 {
        self.node(section).position * Vec2::new(width, height)
    }

    /// Shortest path plus the pixel position of every hop.
    pub fn route(&self, from: Section, to: Section, width: f32, height: f32) -> Route {
        let sections = self.shortest_path(from, to);
        let waypoints = sections
            .iter()
            .map(|&s| self.projected_position(s, width, height))
            .collect();
        Route {
            sections,
            waypoints,
        }
    }

    /// First node, in declaration order, whose hit circle contains `point`.
    pub fn hit_test(&self, point: Vec2, width: f32, height: f32) -> Option<Section> {
        self.nodes
            .iter()
            .find(|n| {
                let centre = self.projected_position(n.section, width, height);
                centre.distance(point) <= n.radius * NODE_HIT_SCALE
            })
            .map(|n| n.section)
    }

    fn reachable_from(&self, root: Section) -> FnvHashSet<Section> {
        let mut seen = FnvHashSet::default();
        let mut queue = VecDeque::from([root]);
        seen.insert(root);
        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}

fn unwind(parents: &FnvHashMap<Section, Section>, from: Section, to: Section) -> SectionPath {
    let mut path: SectionPath = smallvec![to];
    let mut cursor = to;
    while cursor != from {
        match parents.get(&cursor) {
            Some(&p) => {
                path.push(p);
                cursor = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
