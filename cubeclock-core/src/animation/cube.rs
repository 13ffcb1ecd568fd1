//! Cube fade and spin
//!
//! The cube fades in and starts spinning when the countdown starts playing,
//! and fades out when it stops. The spin keeps going through the fade-out and
//! freezes once the cube is invisible, so the next fade-in continues from
//! the same pose.

use super::tween::Tween;
use crate::config::{AnimationConfig, ConfigError};

/// Spin progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpinState {
    /// Never started or frozen
    Stopped,
    /// Advancing
    Spinning,
    /// Advancing until the fade-out ends
    Freezing,
}

/// One frame of cube animation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubeFrame {
    /// Rotation angle fed to the projection (degrees)
    pub angle_deg: f32,
    /// Stroke opacity, 0 is invisible
    pub alpha: f32,
}

/// Fade/spin driver for the cube
#[derive(Debug, Clone)]
pub struct CubeAnimator {
    config: AnimationConfig,
    alpha: Tween,
    /// Spin time banked before `resumed_at_ms`
    spin_elapsed_ms: u64,
    /// When the spin last (re)started
    resumed_at_ms: Option<u64>,
    /// When a pending stop freezes the spin
    freeze_at_ms: Option<u64>,
}

impl CubeAnimator {
    /// Create a hidden, motionless animator
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            alpha: Tween::fixed(0.0),
            spin_elapsed_ms: 0,
            resumed_at_ms: None,
            freeze_at_ms: None,
        })
    }

    /// Fade in and spin
    pub fn animate(&mut self, now_ms: u64) {
        self.spin_elapsed_ms = self.spin_elapsed(now_ms);
        self.resumed_at_ms = Some(now_ms);
        self.freeze_at_ms = None;
        self.alpha
            .retarget(now_ms, self.config.fade_in_alpha, self.config.fade_in_ms);
    }

    /// Fade out, then freeze the spin
    pub fn stop(&mut self, now_ms: u64) {
        if self.resumed_at_ms.is_some() && self.freeze_at_ms.is_none() {
            self.freeze_at_ms = Some(now_ms + self.config.fade_out_ms as u64);
        }
        self.alpha.retarget(now_ms, 0.0, self.config.fade_out_ms);
    }

    /// Spin state at `now_ms`
    pub fn spin_state(&self, now_ms: u64) -> SpinState {
        match (self.resumed_at_ms, self.freeze_at_ms) {
            (None, _) => SpinState::Stopped,
            (Some(_), None) => SpinState::Spinning,
            (Some(_), Some(freeze)) if now_ms < freeze => SpinState::Freezing,
            (Some(_), Some(_)) => SpinState::Stopped,
        }
    }

    /// Check if frames sampled at `now_ms` and later may differ
    pub fn is_animating(&self, now_ms: u64) -> bool {
        !self.alpha.is_done(now_ms) || self.spin_state(now_ms) != SpinState::Stopped
    }

    /// Check if the cube is drawn at all
    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.alpha.value(now_ms) > 0.0
    }

    /// Total spin time at `now_ms`
    pub fn spin_elapsed(&self, now_ms: u64) -> u64 {
        match self.resumed_at_ms {
            Some(resumed) => {
                let end = match self.freeze_at_ms {
                    Some(freeze) => freeze.min(now_ms),
                    None => now_ms,
                };
                self.spin_elapsed_ms + end.saturating_sub(resumed)
            }
            None => self.spin_elapsed_ms,
        }
    }

    /// Rotation angle after `elapsed_ms` of spin
    ///
    /// Rises linearly from the minimum to the maximum over one leg, then
    /// falls back over the next.
    pub fn spin_angle(&self, elapsed_ms: u64) -> f32 {
        let leg = self.config.spin_leg_ms as u64;
        let phase = elapsed_ms % (2 * leg);
        let t = if phase < leg {
            phase as f32 / leg as f32
        } else {
            (2 * leg - phase) as f32 / leg as f32
        };
        let span = self.config.spin_max_deg - self.config.spin_min_deg;
        self.config.spin_min_deg + span * t
    }

    /// Frame to draw at `now_ms`
    pub fn sample(&self, now_ms: u64) -> CubeFrame {
        CubeFrame {
            angle_deg: self.spin_angle(self.spin_elapsed(now_ms)),
            alpha: self.alpha.value(now_ms),
        }
    }
}
