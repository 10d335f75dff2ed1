use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

/// A single drifting point of the background field.
///
/// Particles are pooled: when `life` runs out the particle is re-rolled in
/// place rather than dropped. Colour comes from the palette at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per reference frame.
    pub velocity: Vec2,
    /// Frames left before respawn; always > 0 between steps.
    pub life: u32,
    pub radius: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &FieldConfig) -> Self {
        let vmax = config.max_velocity.abs();
        Self {
            position: Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y)),
            velocity: Vec2::new(rng.gen_range(-vmax..=vmax), rng.gen_range(-vmax..=vmax)),
            life: rng.gen_range(1..=config.max_life.max(1)),
            radius: config.radius,
        }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2, config: &FieldConfig) {
        *self = Self::spawn(rng, bounds, config);
    }

    /// Move by `frames` reference frames, bounce off the edges and age by one
    /// frame. Returns `true` when the particle was respawned.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: Vec2,
        frames: f32,
        config: &FieldConfig,
    ) -> bool {
        let moved = self.position + self.velocity * frames;
        let (x, vx) = reflect_axis(moved.x, self.velocity.x, bounds.x);
        let (y, vy) = reflect_axis(moved.y, self.velocity.y, bounds.y);
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);

        self.life = self.life.saturating_sub(1);
        if self.life == 0 || !self.position.is_finite() {
            self.respawn(rng, bounds, config);
            return true;
        }
        false
    }

    /// Fold an out-of-box position back inside without moving or ageing.
    pub(crate) fn fold_into(&mut self, bounds: Vec2) {
        let (x, vx) = reflect_axis(self.position.x, self.velocity.x, bounds.x);
        let (y, vy) = reflect_axis(self.position.y, self.velocity.y, bounds.y);
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);
    }

    #[inline]
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        self.position.x >= 0.0
            && self.position.x < bounds.x
            && self.position.y >= 0.0
            && self.position.y < bounds.y
    }
}

/// Fold an unbounded coordinate back into `[0, extent)` as if it had bounced
/// off both walls, flipping the velocity for each odd number of bounces.
pub(crate) fn reflect_axis(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    let period = 2.0 * extent;
    let folded = pos.rem_euclid(period);
    let (p, v) = if folded < extent {
        (folded, vel)
    } else {
        (period - folded, -vel)
    };
    (p.clamp(0.0, last_inside(extent)), v)
}

/// Largest coordinate strictly below `extent` that we allow.
#[inline]
fn last_inside(extent: f32) -> f32 {
    extent * (1.0 - f32::EPSILON)
}
