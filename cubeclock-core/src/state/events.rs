//! Events that trigger state transitions, and the notifications raised for
//! the UI layer

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User events
    /// Play pressed with no paused countdown to resume
    Start,
    /// Pause pressed while counting
    Pause,
    /// Play pressed on a paused countdown
    Resume,
    /// Reset pressed
    Reset,

    // Schedule events
    /// Lead-in delay of a fresh start has elapsed
    LeadInElapsed,
    /// Countdown reached zero
    Finished,
    /// Completion blink sequence has ended
    BlinkFinished,
}

/// Fire-and-forget notifications for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// Countdown began ticking (cube should start spinning)
    Started,
    /// Countdown paused (cube should stop)
    Paused,
    /// Blink sequence finished (haptic feedback, cube stop)
    Completed,
    /// Everything was zeroed (cube should stop)
    Reset,
}
