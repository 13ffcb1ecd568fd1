//! State machine definition
//!
//! Whether the countdown ticks, blinks or accepts edits is a function of the
//! current state only.

use super::events::Event;

/// Countdown states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not running; counters editable
    #[default]
    Idle,
    /// Fresh start accepted, waiting out the lead-in delay
    Starting,
    /// Ticking once per interval
    Running,
    /// Stopped mid-countdown, resumable without lead-in
    Paused,
    /// Reached zero; time display blinking
    Completing,
}

impl State {
    /// Check if the widget reports itself as playing
    ///
    /// The lead-in window is not playing yet: edit controls stay visible
    /// until the first tick is scheduled.
    pub fn is_playing(&self) -> bool {
        matches!(self, State::Running | State::Completing)
    }

    /// Check if increment/decrement are accepted
    pub fn edits_allowed(&self) -> bool {
        !self.is_playing()
    }

    /// Check if the tick activity may be scheduled in this state
    pub fn ticks_allowed(&self) -> bool {
        matches!(self, State::Starting | State::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Reset wins from anywhere
            (_, Reset) => Idle,

            // Idle transitions
            (Idle, Start) => Starting,

            // Starting transitions (a second Start restarts the lead-in)
            (Starting, Start) => Starting,
            (Starting, LeadInElapsed) => Running,

            // Running transitions
            (Running, Pause) => Paused,
            (Running, Finished) => Completing,

            // Paused transitions
            (Paused, Resume) => Running,

            // Completing transitions
            (Completing, BlinkFinished) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
