//! Typed configuration for the backdrop, defaulted from `constants`.

use crate::constants::*;
use crate::easing::Easing;
use crate::surface::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Per-axis velocity bound, px per reference frame.
    pub max_velocity: f32,
    /// Upper bound for freshly drawn lifetimes, in frames.
    pub max_life: u32,
    pub radius: f32,
    pub connection_distance: f32,
    pub reference_frame_ms: f32,
    /// Fixed seed for reproducible layouts; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            max_velocity: PARTICLE_MAX_VELOCITY,
            max_life: PARTICLE_MAX_LIFE,
            radius: PARTICLE_RADIUS,
            connection_distance: CONNECTION_DISTANCE,
            reference_frame_ms: REFERENCE_FRAME_MS,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            duration_ms: NAVIGATION_DURATION_MS,
            easing: Easing::CubicOut,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub particle: Rgba,
    pub connection: Rgba,
    pub edge: Rgba,
    pub active_edge: Rgba,
    pub node: Rgba,
    pub node_border: Rgba,
    pub hover_node: Rgba,
    pub active_node: Rgba,
    pub label: Rgba,
    pub active_label: Rgba,
    pub hover_label: Rgba,
    pub path: Rgba,
    pub navigator: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            particle: Rgba::new(60, 60, 60, 0.5),
            connection: Rgba::new(100, 100, 100, CONNECTION_MAX_ALPHA),
            edge: Rgba::new(180, 180, 180, 0.4),
            active_edge: Rgba::new(123, 30, 86, 0.7),
            node: Rgba::new(200, 200, 200, 0.6),
            node_border: Rgba::new(180, 180, 180, 0.6),
            hover_node: Rgba::new(231, 112, 46, 0.6),
            active_node: Rgba::new(231, 112, 46, 0.9),
            label: Rgba::new(102, 102, 102, 1.0),
            active_label: Rgba::new(123, 30, 86, 1.0),
            hover_label: Rgba::new(231, 112, 46, 1.0),
            path: Rgba::new(231, 112, 46, 0.8),
            navigator: Rgba::new(231, 112, 46, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub field: FieldConfig,
    pub navigation: NavigationConfig,
    pub palette: Palette,
    /// Translucent wash per frame; `None` clears instead.
    pub fade: Option<Rgba>,
    pub camera_parallax: f32,
    pub max_frame_delta_ms: f32,
    /// Draw section nodes, edges and labels over the field.
    pub show_graph: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            navigation: NavigationConfig::default(),
            palette: Palette::default(),
            fade: None,
            camera_parallax: CAMERA_PARALLAX,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            show_graph: true,
        }
    }
}
