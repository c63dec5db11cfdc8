//! Windowed launcher.
//!
//! [`Confetti`] is the packaged way to see the effect: it opens a window,
//! fires a burst wherever the user clicks or taps, and fades the overlay out
//! after each burst completes. It is the glue layer the simulator treats as
//! external: surface creation, resize notification, frame scheduling, and
//! the reduced-motion query (here the `CONFETTI_REDUCED_MOTION` environment
//! variable) all live on this side.
//!
//! # Example
//!
//! ```ignore
//! use confetti::Confetti;
//!
//! fn main() -> Result<(), confetti::LaunchError> {
//!     Confetti::new().with_particle_count(200).run()
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::BurstConfig;
use crate::error::LaunchError;
use crate::gpu::Blitter;
use crate::motion::EnvMotion;
use crate::raster::PixelSurface;
use crate::render::Surface;
use crate::rng::ThreadRandom;
use crate::runner::{BurstRunner, BurstState};
use crate::scheduler::FrameScheduler;
use crate::signal::CompletionSignal;
use crate::trigger::{Cooldown, DEFAULT_COOLDOWN};

/// Per-frame alpha multiplier during the teardown fade.
const FADE_STEP: f32 = 0.8;
/// Frames the teardown fade runs for (roughly 200 ms at 60 Hz).
const FADE_FRAMES: u32 = 12;

/// Scheduler backed by `Window::request_redraw`.
///
/// winit coalesces redraw requests, so the handle carries nothing and
/// cancellation is dropping the runner before the redraw arrives.
struct RedrawScheduler {
    window: Arc<Window>,
}

impl FrameScheduler for RedrawScheduler {
    type Handle = ();

    fn request_frame(&mut self) {
        self.window.request_redraw();
    }

    fn cancel(&mut self, _handle: ()) {}
}

/// Windowed confetti launcher, builder style.
pub struct Confetti {
    config: BurstConfig,
    cooldown: Duration,
    title: String,
}

impl Confetti {
    /// Create a launcher with the stock burst configuration.
    pub fn new() -> Self {
        Self {
            config: BurstConfig::default(),
            cooldown: DEFAULT_COOLDOWN,
            title: "confetti".to_string(),
        }
    }

    /// Set the number of particles per burst.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the emission cone width in degrees.
    pub fn with_spread(mut self, degrees: f32) -> Self {
        self.config.spread = degrees;
        self
    }

    /// Set the base launch speed in pixels per tick.
    pub fn with_start_velocity(mut self, velocity: f32) -> Self {
        self.config.start_velocity = velocity;
        self
    }

    /// Set the per-tick downward acceleration.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Set the base lifespan in ticks.
    pub fn with_ticks(mut self, ticks: u32) -> Self {
        self.config.ticks = ticks;
        self
    }

    /// Set the uniform size multiplier.
    pub fn with_scalar(mut self, scalar: f32) -> Self {
        self.config.scalar = scalar;
        self
    }

    /// Replace the palette.
    pub fn with_colors(mut self, colors: Vec<Vec3>) -> Self {
        self.config.colors = colors;
        self
    }

    /// Override the gesture cooldown window.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), LaunchError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.config, self.cooldown, self.title);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: BurstConfig,
    title: String,
    window: Option<Arc<Window>>,
    blitter: Option<Blitter>,
    runner: Option<BurstRunner<PixelSurface, RedrawScheduler>>,
    /// Surface being faded after completion, with frames remaining.
    fading: Option<(PixelSurface, u32)>,
    cooldown: Cooldown,
    rng: ThreadRandom,
}

impl App {
    fn new(config: BurstConfig, cooldown: Duration, title: String) -> Self {
        Self {
            config,
            title,
            window: None,
            blitter: None,
            runner: None,
            fading: None,
            cooldown: Cooldown::new(cooldown),
            rng: ThreadRandom::new(),
        }
    }

    /// Fire a burst at `origin` (fractional), subject to the cooldown.
    fn try_play(&mut self, origin: Option<Vec2>) {
        if !self.cooldown.ready() {
            return;
        }
        let signal = self.play(origin);
        self.cooldown.begin(&signal);
    }

    fn play(&mut self, origin: Option<Vec2>) -> CompletionSignal {
        let Some(window) = self.window.clone() else {
            log::warn!("burst skipped: no window to schedule against");
            return CompletionSignal::resolved();
        };
        if self.blitter.is_none() {
            // No presentation surface: quiet completion, no visible effect.
            log::warn!("burst skipped: presentation environment unavailable");
            return CompletionSignal::resolved();
        }

        let mut config = self.config.clone();
        config.pixel_ratio = window.scale_factor() as f32;
        if let Some(origin) = origin {
            config.origin = Some(origin);
        }

        let size = window.inner_size();
        let scheduler = RedrawScheduler {
            window: window.clone(),
        };
        let (runner, signal) = BurstRunner::launch(
            &config,
            || Some(PixelSurface::new(size.width, size.height)),
            scheduler,
            &mut self.rng,
            &EnvMotion,
        );
        log::debug!(
            "burst launched: {} particles, surface {}x{}",
            config.particle_count,
            size.width,
            size.height
        );
        self.fading = None;
        self.runner = runner;
        signal
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // One tick per delivered frame, then blit whatever the tick drew.
        if let Some(runner) = self.runner.as_mut() {
            let state = runner.on_frame();
            match state {
                BurstState::Running => {
                    if let (Some(blitter), Some(surface)) = (self.blitter.as_mut(), runner.surface())
                    {
                        Self::blit(event_loop, blitter, surface);
                    }
                }
                BurstState::Complete => {
                    // Teardown: the launcher owns the fade-out.
                    self.fading = runner.take_surface().map(|s| (s, FADE_FRAMES));
                    self.runner = None;
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            return;
        }

        if let Some((mut surface, frames_left)) = self.fading.take() {
            surface.fade(FADE_STEP);
            if let Some(blitter) = self.blitter.as_mut() {
                Self::blit(event_loop, blitter, &surface);
            }
            if frames_left > 1 {
                self.fading = Some((surface, frames_left - 1));
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            } else if let Some(blitter) = self.blitter.as_mut() {
                let _ = blitter.present_empty();
            }
        }
    }

    fn blit(event_loop: &ActiveEventLoop, blitter: &mut Blitter, surface: &PixelSurface) {
        match blitter.present(surface.pixels(), surface.width(), surface.height()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let size = winit::dpi::PhysicalSize {
                    width: blitter.config.width,
                    height: blitter.config.height,
                };
                blitter.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::error!("present error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::warn!("window creation failed, running with no effect: {}", e);
                return;
            }
        };
        self.window = Some(window.clone());

        // A missing GPU is an environmental absence, not a failure: bursts
        // will quietly complete with no visible effect.
        match pollster::block_on(Blitter::new(window)) {
            Ok(blitter) => self.blitter = Some(blitter),
            Err(e) => log::warn!("presentation unavailable, bursts will no-op: {}", e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(runner) = self.runner.as_mut() {
                    runner.abort();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(blitter) = &mut self.blitter {
                    blitter.resize(physical_size);
                }
                // Raster resize only; in-flight physics is untouched.
                if let Some(runner) = self.runner.as_mut() {
                    if let Some(surface) = runner.surface_mut() {
                        surface.resize(physical_size.width, physical_size.height);
                    }
                }
                if let Some((surface, _)) = self.fading.as_mut() {
                    surface.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.try_play(None);
            }
            WindowEvent::Touch(touch)
                if touch.phase == winit::event::TouchPhase::Ended =>
            {
                self.try_play(None);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
