//! Frame scheduling abstraction.
//!
//! The burst loop never owns a timer. It asks a [`FrameScheduler`] for one
//! callback before the next repaint and gets a handle back; cancelling that
//! handle is part of teardown. The windowed launcher maps this onto
//! `Window::request_redraw`; tests use [`ManualScheduler`] and deliver
//! frames by hand, with no real frame timing anywhere.
//!
//! # Example
//!
//! ```ignore
//! let mut scheduler = ManualScheduler::new();
//! let (runner, signal) = BurstRunner::launch(&config, || Some(surface), scheduler, ...);
//! let mut runner = runner.unwrap();
//! while runner.scheduler_mut().take_pending() {
//!     runner.on_frame();
//! }
//! assert!(signal.is_resolved());
//! ```

/// "Run once before the next repaint" registration, cancelable.
pub trait FrameScheduler {
    /// Token identifying one pending request.
    type Handle;

    /// Ask for one callback before the next repaint.
    fn request_frame(&mut self) -> Self::Handle;

    /// Release a pending request that will no longer be serviced.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler stepped by hand. Holds at most one pending frame, which is how
/// the burst loop behaves: strictly sequential, never overlapping.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<u64>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the pending frame, if any. The caller then invokes the tick.
    pub fn take_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a frame request is outstanding.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frames ever requested.
    #[inline]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total requests released via [`FrameScheduler::cancel`].
    #[inline]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        self.next_id += 1;
        self.requested += 1;
        self.pending = Some(self.next_id);
        self.next_id
    }

    fn cancel(&mut self, handle: u64) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_deliver() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.has_pending());

        scheduler.request_frame();
        assert!(scheduler.has_pending());
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_cancel_releases_pending() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.request_frame();
        scheduler.cancel(handle);
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn test_cancel_of_delivered_handle_is_a_noop() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.request_frame();
        assert!(scheduler.take_pending());
        scheduler.cancel(handle);
        assert_eq!(scheduler.cancelled(), 0);
    }
}
