//! One-shot completion notification.
//!
//! A [`CompletionSignal`] is the value a burst launch returns: cloneable,
//! observable by any number of parties, resolved exactly once when the burst
//! terminates (or immediately, on the reduced-motion and missing-environment
//! short circuits). It never blocks and carries no cancellation of its own.
//!
//! The whole crate is single-threaded and cooperative, so the shared state
//! is `Rc<RefCell>` rather than anything locking.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    resolved: bool,
    callbacks: Vec<Box<dyn FnOnce()>>,
}

/// One-shot, clone-to-share completion signal.
#[derive(Clone, Default)]
pub struct CompletionSignal {
    inner: Rc<RefCell<Inner>>,
}

impl CompletionSignal {
    /// A signal that has not resolved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal born resolved, for the short-circuit paths.
    pub fn resolved() -> Self {
        let signal = Self::new();
        signal.resolve();
        signal
    }

    /// Whether the burst has terminated.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().resolved
    }

    /// Run `callback` once the signal resolves. Runs immediately when it
    /// already has.
    pub fn on_resolved(&self, callback: impl FnOnce() + 'static) {
        let mut inner = self.inner.borrow_mut();
        if inner.resolved {
            drop(inner);
            callback();
        } else {
            inner.callbacks.push(Box::new(callback));
        }
    }

    /// Resolve the signal. Later calls are no-ops; callbacks fire once.
    pub(crate) fn resolve(&self) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.resolved {
                return;
            }
            inner.resolved = true;
            std::mem::take(&mut inner.callbacks)
        };
        // Borrow released before user code runs, so a callback may inspect
        // the signal again.
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_starts_pending() {
        let signal = CompletionSignal::new();
        assert!(!signal.is_resolved());
    }

    #[test]
    fn test_resolves_exactly_once() {
        let signal = CompletionSignal::new();
        let fired = Rc::new(Cell::new(0));

        let seen = Rc::clone(&fired);
        signal.on_resolved(move || seen.set(seen.get() + 1));

        signal.resolve();
        signal.resolve();
        signal.resolve();

        assert!(signal.is_resolved());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_clones_observe_the_same_resolution() {
        let signal = CompletionSignal::new();
        let observer = signal.clone();
        signal.resolve();
        assert!(observer.is_resolved());
    }

    #[test]
    fn test_late_callback_runs_immediately() {
        let signal = CompletionSignal::resolved();
        let fired = Rc::new(Cell::new(false));
        let seen = Rc::clone(&fired);
        signal.on_resolved(move || seen.set(true));
        assert!(fired.get());
    }
}
