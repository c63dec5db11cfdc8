//! Gesture attachment with a cooldown window.
//!
//! Repeated activations are debounced, not queued: while a burst is in
//! flight, and for the cooldown window after its signal resolves, further
//! gestures are dropped on the floor. The default window is 600 ms.
//!
//! [`Cooldown`] is the bare state machine; [`GestureTrigger`] packages it
//! with a launch closure for embedders that wire their own input events.
//!
//! # Example
//!
//! ```ignore
//! let mut trigger = GestureTrigger::new(|| play());
//! trigger.activate(); // launches
//! trigger.activate(); // dropped while the first burst runs
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::signal::CompletionSignal;

/// Default cooldown window after a burst resolves.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(600);

/// Debounce state around one burst at a time.
///
/// The window covers the burst itself plus `cooldown` after resolution; the
/// resolution timestamp is captured through the signal's completion
/// callback, so no polling is involved.
pub struct Cooldown {
    cooldown: Duration,
    active: Option<CompletionSignal>,
    cooling_until: Rc<Cell<Option<Instant>>>,
}

impl Cooldown {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            active: None,
            cooling_until: Rc::new(Cell::new(None)),
        }
    }

    /// Whether a new burst may launch right now.
    pub fn ready(&self) -> bool {
        if let Some(signal) = &self.active {
            if !signal.is_resolved() {
                return false;
            }
        }
        match self.cooling_until.get() {
            Some(until) => Instant::now() >= until,
            None => true,
        }
    }

    /// Arm the window around a just-launched burst.
    pub fn begin(&mut self, signal: &CompletionSignal) {
        let until = Rc::clone(&self.cooling_until);
        let cooldown = self.cooldown;
        signal.on_resolved(move || until.set(Some(Instant::now() + cooldown)));
        self.active = Some(signal.clone());
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

/// Binds a launch closure to a UI activation gesture.
pub struct GestureTrigger<F: FnMut() -> CompletionSignal> {
    launch: F,
    cooldown: Cooldown,
}

impl<F: FnMut() -> CompletionSignal> GestureTrigger<F> {
    /// Attach `launch` with the default 600 ms cooldown.
    pub fn new(launch: F) -> Self {
        Self {
            launch,
            cooldown: Cooldown::default(),
        }
    }

    /// Override the cooldown window.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Cooldown::new(cooldown);
        self
    }

    /// Handle one activation gesture. Returns whether a burst launched;
    /// activations inside the cooldown window return `false` and are not
    /// deferred.
    pub fn activate(&mut self) -> bool {
        if !self.cooldown.ready() {
            return false;
        }
        let signal = (self.launch)();
        self.cooldown.begin(&signal);
        true
    }
}
