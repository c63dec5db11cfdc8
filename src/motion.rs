//! Reduced-motion capability.
//!
//! The preference is an explicit dependency handed to the launch, read once
//! per burst, never ambient process state. When it reports true the burst
//! short-circuits: no particles, no surface, no scheduling, signal resolved
//! immediately.

/// Platform-reported motion preference.
pub trait MotionPreference {
    /// Whether the user asked for reduced motion.
    fn prefers_reduced_motion(&self) -> bool;
}

/// A fixed answer, for tests and embedders that already know.
#[derive(Clone, Copy, Debug)]
pub struct StaticMotion(pub bool);

impl MotionPreference for StaticMotion {
    #[inline]
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }
}

/// Reads the `CONFETTI_REDUCED_MOTION` environment variable; any value other
/// than `0`, `false`, or empty counts as a request for reduced motion.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvMotion;

impl EnvMotion {
    pub const VAR: &'static str = "CONFETTI_REDUCED_MOTION";
}

impl MotionPreference for EnvMotion {
    fn prefers_reduced_motion(&self) -> bool {
        match std::env::var(Self::VAR) {
            Ok(value) => !matches!(value.as_str(), "" | "0" | "false"),
            Err(_) => false,
        }
    }
}
