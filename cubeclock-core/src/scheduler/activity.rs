//! Cancellable scheduled activity
//!
//! One slot holding the next deadline of a repeating activity (a tick loop,
//! a blink loop). Starting replaces whatever was scheduled, so at most one
//! loop of each kind exists, and a cancelled loop has nothing left to fire.

/// Single-slot deadline with cancellation
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activity {
    /// Next deadline (ms), None when stopped
    due_ms: Option<u64>,
}

impl Activity {
    /// Create a stopped activity
    pub const fn new() -> Self {
        Self { due_ms: None }
    }

    /// Start a new run, cancelling any previous one
    pub fn start(&mut self, due_ms: u64) {
        self.due_ms = Some(due_ms);
    }

    /// Schedule the next deadline of the current run
    pub fn reschedule(&mut self, due_ms: u64) {
        self.due_ms = Some(due_ms);
    }

    /// Stop the activity
    ///
    /// Cancelling a stopped activity does nothing.
    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    /// Check if a deadline is pending
    pub fn is_active(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Pending deadline, if any
    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Take the pending deadline if it has passed
    ///
    /// Each deadline is yielded at most once; the caller reschedules to
    /// continue the run.
    pub fn take_due(&mut self, now_ms: u64) -> Option<u64> {
        match self.due_ms {
            Some(due) if due <= now_ms => {
                self.due_ms = None;
                Some(due)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped() {
        let mut activity = Activity::new();
        assert!(!activity.is_active());
        assert_eq!(activity.take_due(u64::MAX), None);
    }

    #[test]
    fn test_due_yielded_once() {
        let mut activity = Activity::new();
        activity.start(100);
        assert_eq!(activity.take_due(99), None);
        assert_eq!(activity.take_due(150), Some(100));
        assert_eq!(activity.take_due(150), None);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut activity = Activity::new();
        activity.start(100);
        activity.cancel();
        activity.cancel();
        assert!(!activity.is_active());
        assert_eq!(activity.take_due(1_000), None);
    }

    #[test]
    fn test_restart_replaces_pending_deadline() {
        let mut activity = Activity::new();
        activity.start(100);
        activity.start(500);
        assert_eq!(activity.take_due(200), None);
        assert_eq!(activity.take_due(500), Some(500));
    }

    #[test]
    fn test_reschedule_continues_run() {
        let mut activity = Activity::new();
        activity.start(100);
        activity.take_due(100);
        activity.reschedule(200);
        assert!(activity.is_active());
        assert_eq!(activity.due_ms(), Some(200));
    }
}
