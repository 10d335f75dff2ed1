use glam::Vec2;

// Shared tuning constants for the particle backdrop.

// Simulation clock
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0; // velocities are expressed per 60 Hz frame
pub const MAX_FRAME_DELTA_MS: f32 = 100.0; // clamp for a single simulation step

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_MAX_VELOCITY: f32 = 0.25; // px per reference frame, per axis
pub const PARTICLE_MAX_LIFE: u32 = 600; // frames (~10 s at 60 Hz)
pub const PARTICLE_RADIUS: f32 = 1.5; // px
pub const CONNECTION_DISTANCE: f32 = 200.0; // px
pub const CONNECTION_MAX_ALPHA: f32 = 0.15;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Navigation
pub const NAVIGATION_DURATION_MS: f64 = 1200.0;
pub const CAMERA_PARALLAX: f32 = 0.25; // field pans by this fraction of navigator travel

// Section nodes
pub const HOME_NODE_RADIUS: f32 = 22.0;
pub const SECTION_NODE_RADIUS: f32 = 18.0;
pub const NODE_HIT_SCALE: f32 = 2.0; // hit radius as a multiple of node radius
pub const LABEL_OFFSET_SCALE: f32 = 1.5; // label baseline below node centre, in node radii

// Navigator overlay
pub const NAVIGATOR_RADIUS: f32 = 4.0;
pub const NAVIGATOR_GLOW_SCALE: f32 = 4.0;
pub const PATH_LINE_WIDTH: f32 = 2.0;
pub const EDGE_LINE_WIDTH: f32 = 1.5;

// Reference layout (normalized viewport fractions) in `Section::ALL` order
pub const SECTION_POSITIONS: [[f32; 2]; 5] = [
    [0.5, 0.5],   // home
    [0.25, 0.25], // music
    [0.75, 0.25], // shows
    [0.25, 0.75], // about
    [0.75, 0.75], // contact
];

#[inline]
pub fn section_position_vec2(index: usize) -> Vec2 {
    let [x, y] = SECTION_POSITIONS[index];
    Vec2::new(x, y)
}
