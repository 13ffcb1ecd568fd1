//! Clock face counters
//!
//! Hours, minutes and seconds left, plus the sweep angles of the three rings.
//! Angles are never stored: each one is its counter times a fixed ratio, so
//! the two can never drift apart.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest settable hour count
pub const MAX_HOURS: u8 = 12;

/// Highest settable minute count
pub const MAX_MINUTES: u8 = 60;

/// Highest settable second count
pub const MAX_SECONDS: u8 = 60;

/// Ring sweep per hour (12 h = 360°)
pub const DEGREES_PER_HOUR: f32 = 30.0;

/// Ring sweep per minute (60 min = 360°)
pub const DEGREES_PER_MINUTE: f32 = 6.0;

/// Ring sweep per second (60 s = 360°)
pub const DEGREES_PER_SECOND: f32 = 6.0;

/// One of the three clock rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// All units, largest first
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds];

    /// Upper clamp bound for this unit
    pub const fn max(self) -> u8 {
        match self {
            TimeUnit::Hours => MAX_HOURS,
            TimeUnit::Minutes => MAX_MINUTES,
            TimeUnit::Seconds => MAX_SECONDS,
        }
    }

    /// Ring sweep for one unit
    pub const fn degrees_per_unit(self) -> f32 {
        match self {
            TimeUnit::Hours => DEGREES_PER_HOUR,
            TimeUnit::Minutes => DEGREES_PER_MINUTE,
            TimeUnit::Seconds => DEGREES_PER_SECOND,
        }
    }
}

/// Direction of a manual adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Change {
    Increase,
    Decrease,
}

/// Time left on the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockFace {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockFace {
    /// An empty face (0:00:00)
    pub const fn new() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Build a face from raw values, clamping each field to its range
    pub fn from_hms(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours.min(MAX_HOURS),
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Counter value for a unit
    pub fn get(&self, unit: TimeUnit) -> u8 {
        match unit {
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }

    /// Sweep angle in degrees for a unit
    pub fn angle(&self, unit: TimeUnit) -> f32 {
        self.get(unit) as f32 * unit.degrees_per_unit()
    }

    pub fn hours_angle(&self) -> f32 {
        self.angle(TimeUnit::Hours)
    }

    pub fn minutes_angle(&self) -> f32 {
        self.angle(TimeUnit::Minutes)
    }

    pub fn seconds_angle(&self) -> f32 {
        self.angle(TimeUnit::Seconds)
    }

    /// Total seconds left
    pub fn total_seconds(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Check if the countdown is exhausted
    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Step one unit up or down, clamped to its range
    ///
    /// Returns true if the counter actually moved.
    pub fn change(&mut self, unit: TimeUnit, change: Change) -> bool {
        let current = self.get(unit);
        let next = match change {
            Change::Increase => current.saturating_add(1).min(unit.max()),
            Change::Decrease => current.saturating_sub(1),
        };
        if next == current {
            return false;
        }
        match unit {
            TimeUnit::Hours => self.hours = next,
            TimeUnit::Minutes => self.minutes = next,
            TimeUnit::Seconds => self.seconds = next,
        }
        true
    }

    /// Count down by one second
    ///
    /// Decrements the lowest non-exhausted unit; an exhausted seconds field
    /// borrows from minutes, exhausted minutes borrow from hours. Every call
    /// on a non-zero face lowers `total_seconds()` by exactly one.
    ///
    /// Returns false if the face was already zero.
    pub fn tick(&mut self) -> bool {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            return false;
        }
        true
    }

    /// Zero every counter
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
