//! Notification sink for the UI layer

use heapless::Deque;

use crate::state::Notification;

/// Receiver for countdown notifications
///
/// All methods are fire-and-forget and default to doing nothing, so an
/// implementation only overrides what it reacts to. Callbacks run inside the
/// machine operation that raised them and must not block.
pub trait TimerListener {
    /// Countdown began ticking
    fn on_started(&mut self) {}

    /// Countdown was paused
    fn on_paused(&mut self) {}

    /// Completion blink finished
    fn on_completed(&mut self) {}

    /// Counters were zeroed by a reset
    fn on_reset(&mut self) {}

    /// Dispatch a notification to the matching callback
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Started => self.on_started(),
            Notification::Paused => self.on_paused(),
            Notification::Completed => self.on_completed(),
            Notification::Reset => self.on_reset(),
        }
    }
}

/// Listener that ignores everything
impl TimerListener for () {}

/// Bounded queue of notifications
///
/// Lets a host collect notifications during a machine call and act on them
/// afterwards, when it has the current time at hand. When full, the oldest
/// entry is discarded and counted.
#[derive(Debug, Clone)]
pub struct NotificationQueue<const N: usize> {
    queue: Deque<Notification, N>,
    dropped: u32,
}

impl<const N: usize> Default for NotificationQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NotificationQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
            dropped: 0,
        }
    }

    /// Take the oldest pending notification
    pub fn pop(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    /// Number of pending notifications
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of notifications lost to overflow
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> TimerListener for NotificationQueue<N> {
    fn notify(&mut self, notification: Notification) {
        if self.queue.is_full() {
            self.queue.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        let _ = self.queue.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        started: u32,
        reset: u32,
    }

    impl TimerListener for Counter {
        fn on_started(&mut self) {
            self.started += 1;
        }

        fn on_reset(&mut self) {
            self.reset += 1;
        }
    }

    #[test]
    fn test_notify_dispatches() {
        let mut counter = Counter::default();
        counter.notify(Notification::Started);
        counter.notify(Notification::Paused);
        counter.notify(Notification::Reset);
        assert_eq!(counter.started, 1);
        assert_eq!(counter.reset, 1);
    }

    #[test]
    fn test_queue_order() {
        let mut queue: NotificationQueue<4> = NotificationQueue::new();
        queue.notify(Notification::Started);
        queue.notify(Notification::Completed);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(Notification::Started));
        assert_eq!(queue.pop(), Some(Notification::Completed));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_overflow_drops_oldest() {
        let mut queue: NotificationQueue<2> = NotificationQueue::new();
        queue.notify(Notification::Started);
        queue.notify(Notification::Paused);
        queue.notify(Notification::Reset);
        assert_eq!(queue.dropped(), 1);
        assert_eq!(queue.pop(), Some(Notification::Paused));
        assert_eq!(queue.pop(), Some(Notification::Reset));
    }
}
