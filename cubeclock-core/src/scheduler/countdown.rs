//! Countdown timer machine
//!
//! Owns the clock face and the two scheduled activities (tick loop and
//! completion blink), and drives the state table with them. All mutation
//! goes through `&mut self`, so one owner serializes user input and elapsed
//! deadlines; a threaded host wraps the machine in a mutex.

use super::activity::Activity;
use crate::clock::{Change, ClockFace, TimeUnit};
use crate::config::{ConfigError, TimerConfig};
use crate::state::{Event, Notification, State};
use crate::traits::TimerListener;

/// Everything a renderer reads each frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceSnapshot {
    pub hours_left: u8,
    pub minutes_left: u8,
    pub seconds_left: u8,
    pub hours_angle: f32,
    pub minutes_angle: f32,
    pub seconds_angle: f32,
    pub is_playing: bool,
    pub display_visible: bool,
    pub state: State,
}

impl FaceSnapshot {
    /// Counters as a face value
    pub fn face(&self) -> ClockFace {
        ClockFace::from_hms(self.hours_left, self.minutes_left, self.seconds_left)
    }
}

/// Countdown state machine with its schedule
#[derive(Debug)]
pub struct TimerMachine<L: TimerListener> {
    config: TimerConfig,
    face: ClockFace,
    state: State,
    /// Set by a pause; a later play resumes without lead-in
    was_paused: bool,
    /// Time display visibility (toggled during the completion blink)
    display_visible: bool,
    /// Toggles performed in the current blink sequence
    blink_count: u8,
    /// Lead-in and tick deadlines
    tick: Activity,
    /// Blink toggle deadlines
    blink: Activity,
    /// Bumped on every observable change
    revision: u32,
    listener: L,
}

impl<L: TimerListener> TimerMachine<L> {
    /// Create an idle machine with an empty face
    pub fn new(config: TimerConfig, listener: L) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            face: ClockFace::new(),
            state: State::Idle,
            was_paused: false,
            display_visible: true,
            blink_count: 0,
            tick: Activity::new(),
            blink: Activity::new(),
            revision: 0,
            listener,
        })
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn was_paused(&self) -> bool {
        self.was_paused
    }

    pub fn display_visible(&self) -> bool {
        self.display_visible
    }

    pub fn hours_left(&self) -> u8 {
        self.face.hours()
    }

    pub fn minutes_left(&self) -> u8 {
        self.face.minutes()
    }

    pub fn seconds_left(&self) -> u8 {
        self.face.seconds()
    }

    pub fn hours_angle(&self) -> f32 {
        self.face.hours_angle()
    }

    pub fn minutes_angle(&self) -> f32 {
        self.face.minutes_angle()
    }

    pub fn seconds_angle(&self) -> f32 {
        self.face.seconds_angle()
    }

    pub fn total_seconds_left(&self) -> u32 {
        self.face.total_seconds()
    }

    /// Change counter; compare with a stored value to detect updates
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Tick loop (also carries the lead-in deadline)
    pub fn tick_activity(&self) -> &Activity {
        &self.tick
    }

    /// Completion blink loop
    pub fn blink_activity(&self) -> &Activity {
        &self.blink
    }

    /// Earliest pending deadline, for a host that sleeps until it
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.tick.due_ms(), self.blink.due_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Current values for rendering
    pub fn snapshot(&self) -> FaceSnapshot {
        FaceSnapshot {
            hours_left: self.face.hours(),
            minutes_left: self.face.minutes(),
            seconds_left: self.face.seconds(),
            hours_angle: self.face.hours_angle(),
            minutes_angle: self.face.minutes_angle(),
            seconds_angle: self.face.seconds_angle(),
            is_playing: self.is_playing(),
            display_visible: self.display_visible,
            state: self.state,
        }
    }

    /// Step one counter up or down
    ///
    /// Ignored while playing. Returns true if the counter moved.
    pub fn change(&mut self, unit: TimeUnit, change: Change) -> bool {
        if !self.state.edits_allowed() {
            return false;
        }
        let moved = self.face.change(unit, change);
        if moved {
            self.bump();
        }
        moved
    }

    pub fn increment(&mut self, unit: TimeUnit) -> bool {
        self.change(unit, Change::Increase)
    }

    pub fn decrement(&mut self, unit: TimeUnit) -> bool {
        self.change(unit, Change::Decrease)
    }

    /// Replace all counters at once (clamped); ignored while playing
    pub fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8) -> bool {
        if !self.state.edits_allowed() {
            return false;
        }
        self.face = ClockFace::from_hms(hours, minutes, seconds);
        self.bump();
        true
    }

    /// Toggle between counting and paused
    ///
    /// Pausing cancels the tick loop. Playing an empty countdown does
    /// nothing. A fresh start waits out the lead-in before the first tick;
    /// resuming a pause schedules the next tick straight away. Ignored while
    /// the completion blink runs.
    pub fn play_pause(&mut self, now_ms: u64) {
        match self.state {
            State::Running => self.pause(),
            State::Completing => {}
            State::Idle | State::Starting | State::Paused => {
                if self.face.is_zero() {
                    return;
                }
                if self.was_paused {
                    self.resume(now_ms);
                } else {
                    self.start(now_ms);
                }
            }
        }
    }

    fn pause(&mut self) {
        self.tick.cancel();
        self.state = self.state.transition(Event::Pause);
        self.was_paused = true;
        self.bump();
        self.listener.notify(Notification::Paused);
    }

    fn resume(&mut self, now_ms: u64) {
        self.tick
            .start(now_ms + self.config.tick_interval_ms as u64);
        self.state = self.state.transition(Event::Resume);
        self.bump();
        self.listener.notify(Notification::Started);
    }

    fn start(&mut self, now_ms: u64) {
        // Restarting during the lead-in replaces the pending deadline
        self.tick.start(now_ms + self.config.lead_in_ms as u64);
        self.state = self.state.transition(Event::Start);
        self.bump();
    }

    /// Cancel both loops and zero everything
    pub fn reset(&mut self) {
        self.tick.cancel();
        self.blink.cancel();
        self.face.clear();
        self.state = self.state.transition(Event::Reset);
        self.was_paused = false;
        self.display_visible = true;
        self.blink_count = 0;
        self.bump();
        self.listener.notify(Notification::Reset);
    }

    /// Process every deadline that has passed
    ///
    /// Deadlines are handled in order, each at its own scheduled time, so
    /// polling late gives the same result as polling on time. Returns the
    /// number of deadlines processed.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let mut processed = 0;
        loop {
            let tick_due = self.tick.due_ms().filter(|due| *due <= now_ms);
            let blink_due = self.blink.due_ms().filter(|due| *due <= now_ms);

            match (tick_due, blink_due) {
                (Some(t), Some(b)) if b < t => self.blink_due(b),
                (Some(t), _) => {
                    self.tick.take_due(t);
                    self.tick_due(t);
                }
                (None, Some(b)) => self.blink_due(b),
                (None, None) => break,
            }
            processed += 1;
        }
        processed
    }

    fn tick_due(&mut self, at_ms: u64) {
        if !self.state.ticks_allowed() {
            return;
        }
        match self.state {
            State::Starting => {
                self.state = self.state.transition(Event::LeadInElapsed);
                self.bump();
                self.listener.notify(Notification::Started);
                self.continue_ticking(at_ms);
            }
            State::Running => {
                if self.face.tick() {
                    self.bump();
                }
                self.continue_ticking(at_ms);
            }
            _ => {}
        }
    }

    fn continue_ticking(&mut self, at_ms: u64) {
        if self.face.is_zero() {
            self.finish(at_ms);
        } else {
            self.tick
                .reschedule(at_ms + self.config.tick_interval_ms as u64);
        }
    }

    fn finish(&mut self, at_ms: u64) {
        self.tick.cancel();
        self.state = self.state.transition(Event::Finished);
        self.blink_count = 0;
        if self.config.blink_toggles == 0 {
            self.complete();
        } else {
            self.blink
                .start(at_ms + self.config.blink_interval_ms as u64);
        }
    }

    fn blink_due(&mut self, at_ms: u64) {
        self.blink.take_due(at_ms);
        self.display_visible = !self.display_visible;
        self.blink_count += 1;
        self.bump();
        if self.blink_count >= self.config.blink_toggles {
            self.complete();
        } else {
            self.blink
                .reschedule(at_ms + self.config.blink_interval_ms as u64);
        }
    }

    fn complete(&mut self) {
        self.blink.cancel();
        self.display_visible = true;
        self.state = self.state.transition(Event::BlinkFinished);
        self.was_paused = false;
        self.bump();
        self.listener.notify(Notification::Completed);
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
