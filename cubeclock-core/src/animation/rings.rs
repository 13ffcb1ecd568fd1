//! Ring sweep smoothing
//!
//! The machine moves ring angles in whole steps. Each ring here glides to its
//! newest angle over one tween period, starting from wherever it was drawn.

use super::tween::Tween;
use crate::scheduler::FaceSnapshot;

/// Number of clock rings
pub const RING_COUNT: usize = 3;

/// Smoothed sweep angles, ordered seconds, minutes, hours
#[derive(Debug, Clone)]
pub struct RingAnimator {
    rings: [Tween; RING_COUNT],
    tween_ms: u32,
}

impl RingAnimator {
    pub fn new(tween_ms: u32) -> Self {
        Self {
            rings: [Tween::fixed(0.0); RING_COUNT],
            tween_ms,
        }
    }

    /// Retarget every ring whose angle changed
    pub fn set_targets(&mut self, now_ms: u64, angles: [f32; RING_COUNT]) {
        for (ring, angle) in self.rings.iter_mut().zip(angles) {
            if ring.target() != angle {
                ring.retarget(now_ms, angle, self.tween_ms);
            }
        }
    }

    /// Retarget from a machine snapshot
    pub fn follow(&mut self, now_ms: u64, snapshot: &FaceSnapshot) {
        self.set_targets(
            now_ms,
            [
                snapshot.seconds_angle,
                snapshot.minutes_angle,
                snapshot.hours_angle,
            ],
        );
    }

    /// Angles to draw at `now_ms`
    pub fn sample(&self, now_ms: u64) -> [f32; RING_COUNT] {
        [
            self.rings[0].value(now_ms),
            self.rings[1].value(now_ms),
            self.rings[2].value(now_ms),
        ]
    }

    /// Check if every ring has reached its target
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.rings.iter().all(|ring| ring.is_done(now_ms))
    }
}
