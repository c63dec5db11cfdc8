//! Burst lifecycle driver.
//!
//! [`BurstRunner`] drives a burst frame by frame: one `on_frame` per
//! display refresh runs advance-then-render, then either requests the
//! next frame or tears down. It is a two-state machine, Running to Complete,
//! with Complete terminal and idempotent.
//!
//! Teardown is reachable from two paths and runs exactly once either way:
//! the natural path when the alive count hits zero, and [`BurstRunner::abort`]
//! for an external halt. Both cancel any pending frame handle, release the
//! surface, and resolve the completion signal.

use crate::burst::Burst;
use crate::config::BurstConfig;
use crate::motion::MotionPreference;
use crate::render::{self, Surface};
use crate::rng::RandomSource;
use crate::scheduler::FrameScheduler;
use crate::signal::CompletionSignal;

/// Lifecycle state of one burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstState {
    /// Ticks are being scheduled.
    Running,
    /// Terminal: surface released, signal resolved, no further ticks.
    Complete,
}

/// Drives one burst from launch to completion.
pub struct BurstRunner<Sf: Surface, Sch: FrameScheduler> {
    burst: Burst,
    surface: Option<Sf>,
    released: Option<Sf>,
    scheduler: Sch,
    pending: Option<Sch::Handle>,
    state: BurstState,
    signal: CompletionSignal,
}

impl<Sf: Surface, Sch: FrameScheduler> BurstRunner<Sf, Sch> {
    /// Launch a burst.
    ///
    /// `surface` is a factory so the short-circuit paths can skip surface
    /// creation entirely: when the motion preference asks for reduced motion
    /// the factory is never invoked, and when the factory reports the
    /// environment cannot provide a surface (`None`) the launch quietly
    /// resolves with no visible effect instead of failing. Decorative
    /// effects never break the action that triggered them.
    ///
    /// Returns the runner (`None` on the short-circuit paths) and the
    /// burst's completion signal. On a successful launch the first frame has
    /// already been requested from `scheduler`.
    pub fn launch(
        config: &BurstConfig,
        surface: impl FnOnce() -> Option<Sf>,
        mut scheduler: Sch,
        rng: &mut impl RandomSource,
        motion: &impl MotionPreference,
    ) -> (Option<Self>, CompletionSignal) {
        if motion.prefers_reduced_motion() {
            return (None, CompletionSignal::resolved());
        }
        let Some(surface) = surface() else {
            return (None, CompletionSignal::resolved());
        };

        let burst = Burst::new(config, surface.dimensions(), rng);
        let signal = CompletionSignal::new();
        let pending = Some(scheduler.request_frame());

        let runner = Self {
            burst,
            surface: Some(surface),
            released: None,
            scheduler,
            pending,
            state: BurstState::Running,
            signal: signal.clone(),
        };
        (Some(runner), signal)
    }

    /// Run one tick: advance, render, then schedule or finish.
    ///
    /// A no-op once Complete.
    pub fn on_frame(&mut self) -> BurstState {
        if self.state == BurstState::Complete {
            return self.state;
        }
        self.pending = None;

        let alive = self.burst.advance();
        if let Some(surface) = self.surface.as_mut() {
            render::draw(&self.burst, surface);
        }

        if alive > 0 {
            self.pending = Some(self.scheduler.request_frame());
        } else {
            self.finish();
        }
        self.state
    }

    /// External halt: same teardown as the natural path, exactly once.
    pub fn abort(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.state == BurstState::Complete {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.released = self.surface.take();
        self.signal.resolve();
        self.state = BurstState::Complete;
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> BurstState {
        self.state
    }

    /// The burst being driven.
    #[inline]
    pub fn burst(&self) -> &Burst {
        &self.burst
    }

    /// Another observer handle on the completion signal.
    pub fn signal(&self) -> CompletionSignal {
        self.signal.clone()
    }

    /// The live surface, while Running. The launcher resizes through this
    /// on viewport changes; physics state is independent of raster size.
    #[inline]
    pub fn surface(&self) -> Option<&Sf> {
        self.surface.as_ref()
    }

    #[inline]
    pub fn surface_mut(&mut self) -> Option<&mut Sf> {
        self.surface.as_mut()
    }

    /// Take the released surface after completion, for the launcher's
    /// fade-out. Yields once.
    pub fn take_surface(&mut self) -> Option<Sf> {
        self.released.take()
    }

    /// The scheduler, for drivers that step frames by hand.
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut Sch {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelSurface;
    use crate::rng::SeededRandom;
    use crate::scheduler::ManualScheduler;
    use crate::motion::StaticMotion;

    type Runner = BurstRunner<PixelSurface, ManualScheduler>;

    fn launch(config: &BurstConfig) -> (Option<Runner>, CompletionSignal) {
        let mut rng = SeededRandom::new(21);
        BurstRunner::launch(
            config,
            || Some(PixelSurface::new(64, 64)),
            ManualScheduler::new(),
            &mut rng,
            &StaticMotion(false),
        )
    }

    fn step_to_completion(runner: &mut Runner) -> u64 {
        let mut ticks = 0;
        while runner.scheduler_mut().take_pending() {
            runner.on_frame();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_runs_to_completion_within_bound() {
        let config = BurstConfig::new().with_particle_count(30).with_ticks(12);
        let (runner, signal) = launch(&config);
        let mut runner = runner.unwrap();

        let bound = runner.burst().max_lifespan() as u64 + 1;
        let ticks = step_to_completion(&mut runner);

        assert_eq!(runner.state(), BurstState::Complete);
        assert!(signal.is_resolved());
        assert_eq!(ticks, bound);
    }

    #[test]
    fn test_zero_particles_complete_after_one_tick() {
        let config = BurstConfig::new().with_particle_count(0);
        let (runner, signal) = launch(&config);
        let mut runner = runner.unwrap();

        assert!(!signal.is_resolved());
        assert_eq!(step_to_completion(&mut runner), 1);
        assert!(signal.is_resolved());
    }

    #[test]
    fn test_reduced_motion_short_circuits() {
        let mut rng = SeededRandom::new(1);
        let mut factory_calls = 0;
        let (runner, signal) = BurstRunner::<PixelSurface, _>::launch(
            &BurstConfig::default(),
            || {
                factory_calls += 1;
                Some(PixelSurface::new(64, 64))
            },
            ManualScheduler::new(),
            &mut rng,
            &StaticMotion(true),
        );

        assert!(runner.is_none());
        assert!(signal.is_resolved());
        assert_eq!(factory_calls, 0);
    }

    #[test]
    fn test_missing_surface_short_circuits() {
        let mut rng = SeededRandom::new(1);
        let (runner, signal) = BurstRunner::<PixelSurface, _>::launch(
            &BurstConfig::default(),
            || None,
            ManualScheduler::new(),
            &mut rng,
            &StaticMotion(false),
        );
        assert!(runner.is_none());
        assert!(signal.is_resolved());
    }

    #[test]
    fn test_abort_cancels_pending_and_resolves_once() {
        let config = BurstConfig::new().with_particle_count(20);
        let (runner, signal) = launch(&config);
        let mut runner = runner.unwrap();

        runner.on_frame();
        assert!(runner.scheduler_mut().has_pending());

        runner.abort();
        assert_eq!(runner.state(), BurstState::Complete);
        assert!(signal.is_resolved());
        assert!(!runner.scheduler_mut().has_pending());
        assert_eq!(runner.scheduler_mut().cancelled(), 1);
        assert!(runner.take_surface().is_some());
        assert!(runner.take_surface().is_none());

        // Abort again and tick again: idempotent, nothing re-requested.
        runner.abort();
        runner.on_frame();
        assert_eq!(runner.scheduler_mut().requested(), 2);
    }

    #[test]
    fn test_on_frame_after_complete_is_a_noop() {
        let config = BurstConfig::new().with_particle_count(0);
        let (runner, _signal) = launch(&config);
        let mut runner = runner.unwrap();
        step_to_completion(&mut runner);

        let before = runner.burst().particles().len();
        assert_eq!(runner.on_frame(), BurstState::Complete);
        assert_eq!(runner.burst().particles().len(), before);
        assert!(!runner.scheduler_mut().has_pending());
    }

    #[test]
    fn test_resize_does_not_perturb_physics() {
        let config = BurstConfig::new().with_particle_count(10);
        let (runner, _signal) = launch(&config);
        let mut runner = runner.unwrap();

        runner.scheduler_mut().take_pending();
        runner.on_frame();
        let positions: Vec<_> = runner.burst().particles().iter().map(|p| p.position).collect();

        runner.surface_mut().unwrap().resize(300, 200);
        let after: Vec<_> = runner.burst().particles().iter().map(|p| p.position).collect();
        assert_eq!(positions, after);
    }
}
