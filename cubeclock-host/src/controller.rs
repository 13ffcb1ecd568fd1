//! Controller coordinating the timer machine, animations and rendering
//!
//! The controller is the UI layer for the widget:
//! - Applies keyboard commands to the timer machine
//! - Polls elapsed deadlines
//! - Starts and stops the cube animation on play/pause notifications
//! - Paints frames into a character screen when something changed
//!
//! Time is always passed in, so the whole flow runs synchronously in tests.

use tracing::{info, trace};

use cubeclock_core::animation::{CubeAnimator, RingAnimator};
use cubeclock_core::config::{ConfigError, WidgetConfig};
use cubeclock_core::projection::CubeGeometry;
use cubeclock_core::scheduler::TimerMachine;
use cubeclock_core::state::{Notification, State};
use cubeclock_core::traits::NotificationQueue;
use cubeclock_display::{paint_widget, CanvasError, SceneLayout, TextScreen};

use crate::input::Command;

/// Screen width in cells
pub const SCREEN_COLS: usize = 80;

/// Screen height in cells
pub const SCREEN_ROWS: usize = 40;

/// Frame interval while something animates (ms)
pub const FRAME_INTERVAL_MS: u64 = 100;

/// Pending notifications between drains
const NOTIFICATION_QUEUE_SIZE: usize = 8;

/// Terminal-sized widget screen
pub type Screen = TextScreen<SCREEN_COLS, SCREEN_ROWS>;

/// Whether to keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Controller state for coordinating the widget
pub struct Controller {
    config: WidgetConfig,
    machine: TimerMachine<NotificationQueue<NOTIFICATION_QUEUE_SIZE>>,
    geometry: CubeGeometry,
    cube: CubeAnimator,
    rings: RingAnimator,
    screen: Screen,
    /// Machine revision last painted
    painted_revision: Option<u32>,
    /// Completion seen since the last `take_bell`
    bell: bool,
}

impl Controller {
    /// Create a controller from a validated configuration
    pub fn new(config: WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            machine: TimerMachine::new(config.timer, NotificationQueue::new())?,
            geometry: CubeGeometry::new(config.cube.scale_factor, config.projection)?,
            cube: CubeAnimator::new(config.animation)?,
            rings: RingAnimator::new(config.rings.tween_ms),
            screen: Screen::new(),
            painted_revision: None,
            bell: false,
            config,
        })
    }

    pub fn machine(&self) -> &TimerMachine<NotificationQueue<NOTIFICATION_QUEUE_SIZE>> {
        &self.machine
    }

    pub fn cube(&self) -> &CubeAnimator {
        &self.cube
    }

    pub fn state(&self) -> State {
        self.machine.state()
    }

    /// Apply one command at `now_ms`
    ///
    /// Deadlines already due are processed first so the command sees the
    /// state it would have had with on-time polling.
    pub fn handle(&mut self, command: Command, now_ms: u64) -> Flow {
        self.poll(now_ms);
        info!(?command, "command");
        match command {
            Command::Adjust(unit, change) => {
                if !self.machine.change(unit, change) {
                    trace!(?unit, ?change, "adjust ignored");
                }
            }
            Command::PlayPause => self.machine.play_pause(now_ms),
            Command::Reset => self.machine.reset(),
            Command::Quit => return Flow::Quit,
        }
        self.drain_notifications(now_ms);
        Flow::Continue
    }

    /// Process every deadline up to `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let processed = self.machine.poll(now_ms);
        if processed > 0 {
            trace!(processed, now_ms, "deadlines processed");
        }
        self.drain_notifications(now_ms);
        processed
    }

    fn drain_notifications(&mut self, now_ms: u64) {
        while let Some(notification) = self.machine.listener_mut().pop() {
            info!(?notification, state = ?self.machine.state(), "timer");
            match notification {
                Notification::Started => self.cube.animate(now_ms),
                Notification::Paused | Notification::Reset => self.cube.stop(now_ms),
                Notification::Completed => {
                    self.cube.stop(now_ms);
                    self.bell = true;
                }
            }
        }
    }

    /// Check if frames differ over time even without new input
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.cube.is_animating(now_ms) || !self.rings.is_settled(now_ms)
    }

    /// When the task should wake next, if ever
    pub fn next_wake(&self, now_ms: u64) -> Option<u64> {
        let frame = self
            .is_animating(now_ms)
            .then_some(now_ms + FRAME_INTERVAL_MS);
        match (self.machine.next_deadline(), frame) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Paint a frame if anything visible changed
    ///
    /// Returns the screen when it was repainted.
    pub fn render(&mut self, now_ms: u64) -> Result<Option<&Screen>, CanvasError> {
        let snapshot = self.machine.snapshot();
        self.rings.follow(now_ms, &snapshot);

        let revision = self.machine.revision();
        let changed = self.painted_revision != Some(revision);
        if !changed && !self.is_animating(now_ms) {
            return Ok(None);
        }

        let layout = SceneLayout::for_canvas(&self.screen);
        let frame = self.cube.sample(now_ms);
        let points = self
            .geometry
            .project(frame.angle_deg, layout.cube_size(&self.config.cube));
        trace!(angle = frame.angle_deg, alpha = frame.alpha, "frame");

        paint_widget(
            &mut self.screen,
            &snapshot,
            self.rings.sample(now_ms),
            &points,
            frame,
            &self.config,
        )?;
        self.painted_revision = Some(revision);
        Ok(Some(&self.screen))
    }

    /// Take the pending completion alert
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeclock_core::clock::{Change, TimeUnit};

    fn controller() -> Controller {
        Controller::new(WidgetConfig::default()).unwrap()
    }

    fn add(c: &mut Controller, unit: TimeUnit, times: usize) {
        for _ in 0..times {
            c.handle(Command::Adjust(unit, Change::Increase), 0);
        }
    }

    #[test]
    fn test_quit() {
        assert_eq!(controller().handle(Command::Quit, 0), Flow::Quit);
    }

    #[test]
    fn test_first_render_paints() {
        let mut c = controller();
        assert!(c.render(0).unwrap().is_some());
        assert!(c.render(10).unwrap().is_none());
    }

    #[test]
    fn test_adjust_repaints_text() {
        let mut c = controller();
        c.render(0).unwrap();
        add(&mut c, TimeUnit::Seconds, 3);
        let screen = c.render(0).unwrap().unwrap();
        assert!(screen.lines().any(|line| line.contains("00:00:03")));
    }

    #[test]
    fn test_play_starts_cube_after_lead_in() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 5);
        c.handle(Command::PlayPause, 1_000);
        assert_eq!(c.state(), State::Starting);
        assert!(!c.cube().is_visible(1_200));

        c.poll(1_400);
        assert_eq!(c.state(), State::Running);
        assert!(c.cube().is_visible(1_500));
        assert_eq!(c.next_wake(1_500), Some(1_600));
    }

    #[test]
    fn test_pause_fades_cube() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 5);
        c.handle(Command::PlayPause, 0);
        c.poll(400);
        c.handle(Command::PlayPause, 2_000);
        assert_eq!(c.state(), State::Paused);
        assert!(c.cube().is_visible(2_300));
        assert!(!c.cube().is_visible(2_700));
        assert_eq!(c.next_wake(2_700), None);
    }

    #[test]
    fn test_command_after_due_tick_counts_it() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 5);
        c.handle(Command::PlayPause, 0);
        c.poll(400);
        // tick due at 1400 has not been polled yet
        c.handle(Command::PlayPause, 1_450);
        assert_eq!(c.machine().seconds_left(), 4);
        assert_eq!(c.state(), State::Paused);
    }

    #[test]
    fn test_reset_after_due_completion() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 1);
        c.handle(Command::PlayPause, 0);
        c.poll(400);
        c.handle(Command::Reset, 400 + 1_000 + 4 * 300);
        assert!(c.take_bell());
        assert_eq!(c.state(), State::Idle);
    }

    #[test]
    fn test_completion_rings_bell_once() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 2);
        c.handle(Command::PlayPause, 0);
        c.poll(400 + 2_000);
        assert!(!c.take_bell());

        c.poll(400 + 2_000 + 4 * 300);
        assert_eq!(c.state(), State::Idle);
        assert!(c.take_bell());
        assert!(!c.take_bell());
    }

    #[test]
    fn test_blink_hides_text() {
        let mut c = controller();
        add(&mut c, TimeUnit::Seconds, 1);
        c.handle(Command::PlayPause, 0);
        c.poll(1_400 + 300);
        assert!(!c.machine().display_visible());
        let screen = c.render(1_700).unwrap().unwrap();
        assert!(!screen.lines().any(|line| line.contains("00:00:00")));
    }

    #[test]
    fn test_adjust_ignored_while_running() {
        let mut c = controller();
        add(&mut c, TimeUnit::Minutes, 1);
        c.handle(Command::PlayPause, 0);
        c.poll(400);
        add(&mut c, TimeUnit::Minutes, 1);
        assert_eq!(c.machine().minutes_left(), 1);
    }

    #[test]
    fn test_reset_stops_everything() {
        let mut c = controller();
        add(&mut c, TimeUnit::Hours, 1);
        c.handle(Command::PlayPause, 0);
        c.poll(5_000);
        c.handle(Command::Reset, 5_000);
        assert_eq!(c.state(), State::Idle);
        assert_eq!(c.machine().total_seconds_left(), 0);
        assert_eq!(c.machine().next_deadline(), None);
        assert!(!c.cube().is_visible(5_700));
    }
}
