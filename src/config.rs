//! Burst configuration.
//!
//! [`BurstConfig`] collects every knob a burst recognizes, with the same
//! defaults whether you go through the windowed [`Confetti`](crate::Confetti)
//! launcher or drive a [`Burst`](crate::Burst) yourself.
//!
//! # Example
//!
//! ```ignore
//! use confetti::{BurstConfig, Vec2};
//!
//! let config = BurstConfig::new()
//!     .with_particle_count(200)
//!     .with_spread(45.0)
//!     .with_origin(Vec2::new(0.5, 0.5));
//! ```

use glam::{Vec2, Vec3};

/// The stock palette: lime, amber, mint, teal, and rose.
pub const DEFAULT_COLORS: [Vec3; 5] = [
    Vec3::new(0.647, 0.949, 0.278), // #A5F247
    Vec3::new(1.0, 0.820, 0.4),     // #FFD166
    Vec3::new(0.024, 0.839, 0.627), // #06D6A0
    Vec3::new(0.067, 0.541, 0.698), // #118AB2
    Vec3::new(0.937, 0.278, 0.435), // #EF476F
];

/// Pixel ratios above this render no finer anyway; everything scaled by the
/// ratio is clamped here.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Configuration for a single burst.
///
/// Values are taken at face value: nothing is validated, and nonsense inputs
/// (negative counts, zero lifetimes) get best-effort behavior rather than an
/// error.
#[derive(Clone, Debug)]
pub struct BurstConfig {
    /// Number of particles generated.
    pub particle_count: u32,
    /// Angular width of the emission cone in degrees, centered straight up.
    pub spread: f32,
    /// Base speed magnitude in pixels per tick. Each particle draws its
    /// actual speed uniformly from 0.8x to 1.4x of this.
    pub start_velocity: f32,
    /// Downward acceleration per tick, scaled by pixel ratio and damping.
    pub gravity: f32,
    /// Per-tick multiplicative velocity decay, applied to both axes.
    pub drag: f32,
    /// Base lifespan in ticks. Each particle draws its own lifespan
    /// uniformly from 0.7x to 1.2x of this, floored.
    pub ticks: u32,
    /// Uniform size multiplier.
    pub scalar: f32,
    /// Palette sampled uniformly per particle.
    pub colors: Vec<Vec3>,
    /// Fractional emission point; `None` centers horizontally, 28% down.
    pub origin: Option<Vec2>,
    /// Device-pixel-ratio of the target surface. Clamped to
    /// [`MAX_PIXEL_RATIO`] wherever it is applied.
    pub pixel_ratio: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 140,
            spread: 70.0,
            start_velocity: 16.0,
            gravity: 0.5,
            drag: 0.008,
            ticks: 220,
            scalar: 1.0,
            colors: DEFAULT_COLORS.to_vec(),
            origin: None,
            pixel_ratio: 1.0,
        }
    }
}

impl BurstConfig {
    /// Create a configuration with the stock defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the emission cone width in degrees.
    pub fn with_spread(mut self, degrees: f32) -> Self {
        self.spread = degrees;
        self
    }

    /// Set the base launch speed in pixels per tick.
    pub fn with_start_velocity(mut self, velocity: f32) -> Self {
        self.start_velocity = velocity;
        self
    }

    /// Set the per-tick downward acceleration.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the per-tick velocity decay factor.
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    /// Set the base lifespan in ticks.
    pub fn with_ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set the uniform size multiplier.
    pub fn with_scalar(mut self, scalar: f32) -> Self {
        self.scalar = scalar;
        self
    }

    /// Replace the palette.
    pub fn with_colors(mut self, colors: Vec<Vec3>) -> Self {
        self.colors = colors;
        self
    }

    /// Set a fractional emission point (0..1 on each axis).
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the device-pixel-ratio of the target surface.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// The pixel ratio actually applied to physics and sizing.
    #[inline]
    pub fn effective_pixel_ratio(&self) -> f32 {
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Resolve the emission point against a surface of the given dimensions
    /// (device pixels).
    pub fn resolve_origin(&self, dimensions: Vec2) -> Vec2 {
        match self.origin {
            Some(origin) => origin * dimensions,
            None => Vec2::new(dimensions.x * 0.5, dimensions.y * 0.28),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BurstConfig::default();
        assert_eq!(config.particle_count, 140);
        assert_eq!(config.spread, 70.0);
        assert_eq!(config.start_velocity, 16.0);
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.drag, 0.008);
        assert_eq!(config.ticks, 220);
        assert_eq!(config.scalar, 1.0);
        assert_eq!(config.colors.len(), 5);
        assert!(config.origin.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = BurstConfig::new()
            .with_particle_count(10)
            .with_spread(45.0)
            .with_ticks(30)
            .with_origin(Vec2::new(0.25, 0.75));

        assert_eq!(config.particle_count, 10);
        assert_eq!(config.spread, 45.0);
        assert_eq!(config.ticks, 30);
        assert_eq!(config.origin, Some(Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn test_default_origin_sits_high() {
        let config = BurstConfig::default();
        let origin = config.resolve_origin(Vec2::new(100.0, 200.0));
        assert_eq!(origin, Vec2::new(50.0, 56.0));
    }

    #[test]
    fn test_fractional_origin() {
        let config = BurstConfig::new().with_origin(Vec2::new(0.1, 0.9));
        let origin = config.resolve_origin(Vec2::new(100.0, 100.0));
        assert_eq!(origin, Vec2::new(10.0, 90.0));
    }

    #[test]
    fn test_pixel_ratio_clamp() {
        let config = BurstConfig::new().with_pixel_ratio(3.5);
        assert_eq!(config.effective_pixel_ratio(), 2.0);

        let config = BurstConfig::new().with_pixel_ratio(1.25);
        assert_eq!(config.effective_pixel_ratio(), 1.25);
    }
}
