//! Burst aggregate and per-tick integration.
//!
//! A [`Burst`] owns a fixed-cardinality collection of particles plus the
//! shared state they sample: emission origin, palette, pixel ratio, and the
//! physics constants resolved from the config. Particles are never added or
//! removed once spawned; death is the predicate `age > lifespan`.
//!
//! # Example
//!
//! ```ignore
//! use confetti::{Burst, BurstConfig, SeededRandom, Vec2};
//!
//! let mut rng = SeededRandom::new(42);
//! let mut burst = Burst::new(&BurstConfig::default(), Vec2::new(800.0, 600.0), &mut rng);
//! while burst.advance() > 0 {}
//! ```

use glam::{Vec2, Vec3};

use crate::config::BurstConfig;
use crate::particle::Particle;
use crate::rng::RandomSource;

/// Fraction of the configured gravity actually applied per tick.
const GRAVITY_DAMPING: f32 = 0.25;

/// Fallback color when a particle's palette index has nothing behind it
/// (empty palette in the config).
const FALLBACK_COLOR: Vec3 = Vec3::ONE;

/// One invocation's full set of particles plus shared state.
pub struct Burst {
    particles: Vec<Particle>,
    origin: Vec2,
    palette: Vec<Vec3>,
    pixel_ratio: f32,
    gravity: f32,
    drag: f32,
}

impl Burst {
    /// Spawn `particle_count` particles at the resolved origin of a surface
    /// with the given dimensions (device pixels).
    pub fn new(config: &BurstConfig, surface_dimensions: Vec2, rng: &mut impl RandomSource) -> Self {
        let origin = config.resolve_origin(surface_dimensions);
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(config, origin, rng))
            .collect();

        Self {
            particles,
            origin,
            palette: config.colors.clone(),
            pixel_ratio: config.effective_pixel_ratio(),
            gravity: config.gravity,
            drag: config.drag,
        }
    }

    /// Advance every still-alive particle by one tick.
    ///
    /// Ages, accelerates, decays, and integrates each live particle, then
    /// returns how many remain alive after this tick's age increment. A
    /// particle whose age just exceeded its lifespan is not counted, not
    /// integrated, and will not be rasterized this tick. Dead particles are
    /// left untouched, so `age` never climbs past `lifespan + 1`.
    pub fn advance(&mut self) -> usize {
        let pull = self.gravity * self.pixel_ratio * GRAVITY_DAMPING;
        let decay = 1.0 - self.drag;
        let mut alive = 0;

        for p in &mut self.particles {
            if !p.is_alive() {
                continue;
            }
            p.age += 1;
            if !p.is_alive() {
                continue;
            }
            alive += 1;

            p.velocity.y += pull;
            p.velocity *= decay;
            p.position += p.velocity * self.pixel_ratio;
            p.rotation += p.spin;
        }

        alive
    }

    /// Count of particles currently alive, without advancing.
    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    /// The particles, dead ones included.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Shared emission origin in device pixels.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Resolve a particle's palette reference.
    #[inline]
    pub fn color_of(&self, particle: &Particle) -> Vec3 {
        self.palette
            .get(particle.color)
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Longest lifespan in the burst, in ticks. Zero for an empty burst.
    pub fn max_lifespan(&self) -> u32 {
        self.particles.iter().map(|p| p.lifespan()).max().unwrap_or(0)
    }
}
