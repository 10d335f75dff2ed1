// DOM hooks and canvas settings for the web front end.

// Element ids and attributes
pub const CANVAS_ELEMENT_ID: &str = "backdrop-canvas";
pub const PANEL_ID_PREFIX: &str = "panel-"; // panels are `#panel-<section id>`
pub const SECTION_ATTRIBUTE: &str = "data-section"; // navigation buttons
pub const HIDDEN_CLASS: &str = "hidden";

// Canvas `data-*` overrides
pub const PARTICLE_COUNT_ATTRIBUTE: &str = "data-particle-count";
pub const CONNECTION_DISTANCE_ATTRIBUTE: &str = "data-connection-distance";
pub const DURATION_MS_ATTRIBUTE: &str = "data-duration-ms";
pub const SEED_ATTRIBUTE: &str = "data-seed";
pub const GRAPH_ATTRIBUTE: &str = "data-graph"; // "hub" (default) or "mesh"

// Limits for overrides
pub const MAX_PARTICLE_COUNT: usize = 2_000; // O(n^2) connections per frame
pub const MAX_CONNECTION_DISTANCE: f32 = 1_000.0; // px
pub const MIN_DURATION_MS: f64 = 50.0;
pub const MAX_DURATION_MS: f64 = 10_000.0;

// Rendering
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // backing store cap on dense screens
pub const LABEL_FONT_FAMILY: &str = "Montserrat, sans-serif";
pub const HOVER_CURSOR: &str = "pointer";
pub const DEFAULT_CURSOR: &str = "default";
