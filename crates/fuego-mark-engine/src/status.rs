//! Debounced save indicator.
//!
//! After an edit the indicator reads "Saving..." and falls back to "Saved"
//! once the debounce window passes with no further edits. Time is passed in
//! so hosts drive it from their own clock.

use std::time::{Duration, Instant};

pub const SAVING: &str = "Saving...";
pub const SAVED: &str = "Saved";

/// Default debounce window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct SaveStatus {
    debounce: Duration,
    last_edit: Option<Instant>,
}

impl SaveStatus {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_edit: None,
        }
    }

    /// Records an edit at `now`, restarting the debounce window.
    pub fn touch(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// Whether "Saving..." is still showing at `now`.
    pub fn is_saving(&self, now: Instant) -> bool {
        self.last_edit
            .is_some_and(|at| now.saturating_duration_since(at) < self.debounce)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_saving(now) { SAVING } else { SAVED }
    }

    /// Time left until the label flips back to "Saved", if it is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.last_edit?;
        self.debounce
            .checked_sub(now.saturating_duration_since(at))
            .filter(|d| !d.is_zero())
    }
}

impl Default for SaveStatus {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
