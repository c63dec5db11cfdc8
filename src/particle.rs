//! The particle value record.
//!
//! One [`Particle`] per simulated piece of confetti. Position and velocity
//! live in device-pixel space; opacity is never stored, it is derived from
//! `age / lifespan` on demand.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::BurstConfig;
use crate::rng::RandomSource;

/// Emission direction, straight up in screen convention (y grows downward).
const LAUNCH_ANGLE_DEG: f32 = -90.0;

/// Shape a particle is rasterized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Filled square of side `2 * size`, axis-aligned before rotation.
    Square,
    /// Filled circle of radius `size`.
    Circle,
    /// Filled isoceles triangle, apex up, extent `1.4 * size`.
    Triangle,
}

impl Shape {
    pub(crate) const ALL: [Shape; 3] = [Shape::Square, Shape::Circle, Shape::Triangle];
}

/// One piece of confetti.
///
/// `size` and `lifespan` are fixed at creation; everything else mutates each
/// tick while the particle is alive. Dead particles are never removed from
/// their burst, they just stop being simulated and rasterized.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Center, in device pixels.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    /// Ticks simulated so far. Stops at `lifespan + 1`.
    pub age: u32,
    /// Current rotation in radians.
    pub rotation: f32,
    /// Rotation increment per tick.
    pub spin: f32,
    /// Index into the burst's palette.
    pub color: usize,
    /// Rasterization shape.
    pub shape: Shape,
    lifespan: u32,
    size: f32,
}

impl Particle {
    /// Draw a fresh particle from the config. Every field is randomized
    /// independently; no two particles are correlated.
    pub(crate) fn spawn(
        config: &BurstConfig,
        origin: Vec2,
        rng: &mut impl RandomSource,
    ) -> Self {
        let half_spread = config.spread * 0.5;
        let angle = (LAUNCH_ANGLE_DEG + rng.uniform(-half_spread, half_spread)).to_radians();
        let speed = rng.uniform(config.start_velocity * 0.8, config.start_velocity * 1.4);

        let base = config.ticks as f32;
        let lifespan = rng.uniform(base * 0.7, base * 1.2).floor() as u32;
        let size = rng.uniform(2.0, 5.0) * config.scalar * config.effective_pixel_ratio();

        Self {
            position: origin,
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            age: 0,
            rotation: rng.uniform(0.0, TAU),
            spin: rng.uniform(-0.2, 0.2),
            color: rng.pick(config.colors.len()),
            shape: Shape::ALL[rng.pick(Shape::ALL.len())],
            lifespan,
            size,
        }
    }

    /// Fixed lifespan in ticks.
    #[inline]
    pub fn lifespan(&self) -> u32 {
        self.lifespan
    }

    /// Fixed rendered size in device pixels.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Whether the particle still takes part in simulation and rendering.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age <= self.lifespan
    }

    /// `1 - age / lifespan`. May go negative on the expiry tick; the
    /// renderer floors it at zero.
    #[inline]
    pub fn opacity(&self) -> f32 {
        1.0 - self.age as f32 / self.lifespan as f32
    }
}
