//! # confetti
//!
//! A short-lived decorative particle burst on a 2D overlay surface, with a
//! one-shot completion signal when every particle has faded or expired.
//!
//! ## Quick Start
//!
//! ```ignore
//! use confetti::Confetti;
//!
//! fn main() -> Result<(), confetti::LaunchError> {
//!     Confetti::new()
//!         .with_particle_count(200)
//!         .with_spread(60.0)
//!         .run() // opens a window; click to burst
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Burst
//!
//! One invocation's full set of particles plus shared state ([`Burst`]).
//! The collection has fixed cardinality: particles die in place when their
//! age exceeds their lifespan, they are never removed. Opacity is derived,
//! `1 - age / lifespan`, floored at zero when rasterized.
//!
//! ### Driving a burst yourself
//!
//! The windowed launcher is optional glue. The simulator itself is
//! [`BurstRunner`], a two-state machine (Running, then Complete) driven one
//! tick at a time through an injectable [`FrameScheduler`]:
//!
//! ```ignore
//! use confetti::*;
//!
//! let mut rng = SeededRandom::new(42);
//! let (runner, signal) = BurstRunner::launch(
//!     &BurstConfig::default(),
//!     || Some(PixelSurface::new(800, 600)),
//!     ManualScheduler::new(),
//!     &mut rng,
//!     &StaticMotion(false),
//! );
//! let mut runner = runner.unwrap();
//! while runner.scheduler_mut().take_pending() {
//!     runner.on_frame();
//! }
//! assert!(signal.is_resolved());
//! ```
//!
//! ### Explicit capabilities
//!
//! Everything environmental is an injected dependency, not ambient state:
//! randomness ([`RandomSource`]), frame timing ([`FrameScheduler`]), the
//! raster target ([`Surface`]), and the reduced-motion preference
//! ([`MotionPreference`], read once per launch). When reduced motion is
//! requested, or the environment cannot provide a surface, a launch resolves
//! immediately with no visible effect instead of failing.
//!
//! ### Triggering
//!
//! [`GestureTrigger`] binds a launch closure to a UI gesture with a cooldown
//! window (600 ms by default) during which repeated gestures are dropped,
//! not queued.

mod burst;
mod config;
mod error;
mod gpu;
mod motion;
mod particle;
mod raster;
mod render;
mod rng;
mod runner;
mod scheduler;
mod signal;
mod trigger;
mod window;

pub use burst::Burst;
pub use config::{BurstConfig, DEFAULT_COLORS, MAX_PIXEL_RATIO};
pub use error::LaunchError;
pub use glam::{Vec2, Vec3};
pub use motion::{EnvMotion, MotionPreference, StaticMotion};
pub use particle::{Particle, Shape};
pub use raster::PixelSurface;
pub use render::{draw, Paint, Surface};
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
pub use runner::{BurstRunner, BurstState};
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use signal::CompletionSignal;
pub use trigger::{Cooldown, GestureTrigger, DEFAULT_COOLDOWN};
pub use window::Confetti;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use confetti::prelude::*;
/// ```
pub mod prelude {
    pub use crate::burst::Burst;
    pub use crate::config::BurstConfig;
    pub use crate::motion::{MotionPreference, StaticMotion};
    pub use crate::raster::PixelSurface;
    pub use crate::render::Surface;
    pub use crate::rng::{RandomSource, SeededRandom, ThreadRandom};
    pub use crate::runner::{BurstRunner, BurstState};
    pub use crate::scheduler::{FrameScheduler, ManualScheduler};
    pub use crate::signal::CompletionSignal;
    pub use crate::trigger::GestureTrigger;
    pub use crate::window::Confetti;
    pub use crate::{Vec2, Vec3};
}
