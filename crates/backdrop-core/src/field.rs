use crate::config::{FieldConfig, Palette};
use crate::constants::CONNECTION_LINE_WIDTH;
use crate::error::NavError;
use crate::particle::Particle;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// A line between two particles closer than the connection distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Lower particle index.
    pub a: usize,
    /// Higher particle index.
    pub b: usize,
    pub distance: f32,
}

impl Connection {
    /// 1 when the endpoints coincide, falling linearly to 0 at `threshold`.
    #[inline]
    pub fn strength(&self, threshold: f32) -> f32 {
        (1.0 - self.distance / threshold).clamp(0.0, 1.0)
    }
}

/// Fixed-size pool of particles bouncing inside a `width` x `height` box.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    /// Build `config.count` particles with uniformly random positions,
    /// velocities and lifetimes.
    pub fn initialize(width: f32, height: f32, config: FieldConfig) -> Result<Self, NavError> {
        let bounds = checked_bounds(width, height)?;
        let mut rng = seeded_rng(config.seed);
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut rng, bounds, &config))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] {} particles in {:.0}x{:.0}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Ok(Self {
            particles,
            bounds,
            config,
            rng,
        })
    }

    /// Adopt an existing particle set. Positions outside the box are folded in.
    pub fn from_particles(
        width: f32,
        height: f32,
        mut particles: Vec<Particle>,
        config: FieldConfig,
    ) -> Result<Self, NavError> {
        let bounds = checked_bounds(width, height)?;
        let mut rng = seeded_rng(config.seed);
        for p in &mut particles {
            if p.life == 0 || !p.position.is_finite() {
                p.respawn(&mut rng, bounds, &config);
            } else if !p.in_bounds(bounds) {
                p.fold_into(bounds);
            }
        }
        Ok(Self {
            particles,
            bounds,
            config,
            rng,
        })
    }

    /// Advance the simulation by `delta_ms` of wall time. Displacement scales
    /// linearly with the delta; every particle ages by exactly one frame.
    /// Returns how many particles were respawned.
    pub fn step(&mut self, delta_ms: f32) -> usize {
        let frames = if delta_ms.is_finite() {
            delta_ms.max(0.0) / self.config.reference_frame_ms
        } else {
            0.0
        };
        let mut respawned = 0;
        for p in &mut self.particles {
            if p.advance(&mut self.rng, self.bounds, frames, &self.config) {
                respawned += 1;
            }
        }
        respawned
    }

    /// Every unordered pair closer than the connection distance, each once,
    /// lower index first. Pairwise scan: O(n^2) in the particle count.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.config.connection_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let distance = ps[a].position.distance(ps[b].position);
                (distance < threshold).then_some(Connection { a, b, distance })
            })
        })
    }

    /// Draw connections, then particles, shifted by `offset`.
    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2, palette: &Palette) {
        let threshold = self.config.connection_distance;
        for c in self.connections() {
            let alpha = palette.connection.a * c.strength(threshold);
            if alpha <= 0.0 {
                continue;
            }
            surface.stroke_line(
                self.particles[c.a].position + offset,
                self.particles[c.b].position + offset,
                CONNECTION_LINE_WIDTH,
                palette.connection.with_alpha(alpha),
            );
        }
        for p in &self.particles {
            surface.fill_circle(p.position + offset, p.radius, palette.particle);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn checked_bounds(width: f32, height: f32) -> Result<Vec2, NavError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(Vec2::new(width, height))
    } else {
        Err(NavError::InvalidViewport { width, height })
    }
}
