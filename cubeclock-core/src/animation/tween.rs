//! Linear tween between two values

/// Linear interpolation over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u32,
}

impl Tween {
    /// A tween resting at `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0,
            duration_ms: 0,
        }
    }

    /// Value at `now_ms`
    pub fn value(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if self.duration_ms == 0 || elapsed >= self.duration_ms as u64 {
            return self.to;
        }
        let t = elapsed as f32 / self.duration_ms as f32;
        self.from + (self.to - self.from) * t
    }

    /// Final value
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Check if the end has been reached
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms as u64
    }

    /// Head for `to`, starting from wherever the tween is at `now_ms`
    pub fn retarget(&mut self, now_ms: u64, to: f32, duration_ms: u32) {
        self.from = self.value(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::fixed(0.0)
    }
}
