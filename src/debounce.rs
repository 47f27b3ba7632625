//! Deadline-based debounce primitive.
//!
//! A [`Debounced`] value holds what downstream consumers currently see plus at
//! most one pending replacement. Every [`Debounced::set`] replaces the pending
//! value and restarts its deadline; [`Debounced::poll`] promotes it once the
//! deadline has passed. Nothing is spawned, so dropping the value drops the
//! pending emission with it.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Clone, Debug)]
pub struct Debounced<T> {
    current: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            current: initial,
            pending: None,
            delay,
        }
    }

    /// The last emitted value.
    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` for emission `delay` after `now`, replacing any
    /// earlier pending value.
    pub fn set(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            log::trace!("Debounce restarted, dropping superseded value");
        }
        self.pending = Some((value, now + self.delay));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Promotes the pending value if its deadline has passed.
    ///
    /// Returns the new value only when it differs from the previous one; a
    /// settled value equal to the current one is consumed silently.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.pending.take() {
            Some((value, deadline)) if deadline <= now => {
                if value == self.current {
                    None
                } else {
                    self.current = value;
                    Some(&self.current)
                }
            }
            not_due => {
                self.pending = not_due;
                None
            }
        }
    }

    /// Replaces the current value immediately, discarding any pending one.
    /// Returns whether the emitted value changed.
    pub fn flush(&mut self, value: T) -> bool {
        self.pending = None;
        if value == self.current {
            false
        } else {
            self.current = value;
            true
        }
    }

    /// Drops the pending value. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
