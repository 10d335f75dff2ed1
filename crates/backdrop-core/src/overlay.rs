//! Section graph and navigator drawn on top of the particle field.

use crate::config::Palette;
use crate::constants::{
    EDGE_LINE_WIDTH, LABEL_OFFSET_SCALE, NAVIGATOR_GLOW_SCALE, NAVIGATOR_RADIUS, PATH_LINE_WIDTH,
};
use crate::graph::SectionGraph;
use crate::section::Section;
use crate::surface::{Surface, TextStyle};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Section shown as current; `None` while a run is in flight.
    pub active: Option<Section>,
    pub hovered: Option<Section>,
}

pub fn draw_graph(
    surface: &mut dyn Surface,
    graph: &SectionGraph,
    viewport: Vec2,
    palette: &Palette,
    highlight: Highlight,
) {
    let project = |s: Section| graph.projected_position(s, viewport.x, viewport.y);

    for &(a, b) in graph.edges() {
        let touches_active = highlight.active.is_some_and(|s| s == a || s == b);
        let color = if touches_active {
            palette.active_edge
        } else {
            palette.edge
        };
        surface.stroke_line(project(a), project(b), EDGE_LINE_WIDTH, color);
    }

    for node in graph.nodes() {
        let centre = project(node.section);
        let is_active = highlight.active == Some(node.section);
        let is_hovered = !is_active && highlight.hovered == Some(node.section);

        let (radius, fill, border, border_width) = if is_active {
            (node.radius * 1.2, palette.active_node, palette.active_node, 3.0)
        } else if is_hovered {
            (node.radius * 1.1, palette.hover_node, palette.hover_node, 2.0)
        } else {
            (node.radius, palette.node, palette.node_border, 1.5)
        };
        if is_active {
            surface.fill_glow(centre, 0.0, node.radius * 1.5, palette.active_edge);
        }
        surface.fill_circle(centre, radius, fill);
        surface.stroke_circle(centre, radius, border_width, border);

        let (style, color) = if is_active {
            (TextStyle { size_px: 14.0, bold: true }, palette.active_label)
        } else if is_hovered {
            (TextStyle { size_px: 14.0, bold: false }, palette.hover_label)
        } else {
            (TextStyle { size_px: 12.0, bold: false }, palette.label)
        };
        let at = centre + Vec2::new(0.0, node.radius * LABEL_OFFSET_SCALE);
        surface.fill_text(node.section.label(), at, style, color);
    }
}

/// Stroke the route and mark the navigator at `position` with a soft glow.
pub fn draw_navigator(
    surface: &mut dyn Surface,
    waypoints: &[Vec2],
    position: Vec2,
    palette: &Palette,
) {
    if waypoints.len() > 1 {
        surface.stroke_polyline(waypoints, PATH_LINE_WIDTH, palette.path);
    }
    surface.fill_circle(position, NAVIGATOR_RADIUS, palette.navigator);
    surface.fill_glow(
        position,
        NAVIGATOR_RADIUS * 0.5,
        NAVIGATOR_RADIUS * NAVIGATOR_GLOW_SCALE,
        palette.navigator.with_alpha(0.6),
    );
}
