//! Configuration type definitions
//!
//! Every field defaults to the reference tuning, so a config file only needs
//! to name what it changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Countdown timing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Delay between a fresh start and the first tick (ms)
    pub lead_in_ms: u32,
    /// Interval between ticks (ms)
    pub tick_interval_ms: u32,
    /// Interval between completion blink toggles (ms)
    pub blink_interval_ms: u32,
    /// Number of visibility toggles in the completion blink
    pub blink_toggles: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: 400,
            tick_interval_ms: 1000,
            blink_interval_ms: 300,
            blink_toggles: 4,
        }
    }
}

/// Rotate/skew projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectionConfig {
    /// Constant the normalized depth is subtracted from
    pub camera_distance: f32,
    /// Lower bound of the depth normalization range
    pub depth_min: f32,
    /// Upper bound of the depth normalization range
    pub depth_max: f32,
    /// Per-axis offsets added to the animation angle, X/Y/Z (degrees)
    ///
    /// Distinct offsets make the cube tumble instead of spinning flat.
    pub axis_offsets_deg: [f32; 3],
    /// Scale each vertex by its skew factor; false gives a flat
    /// orthographic projection (skew = 1)
    pub use_skew: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            camera_distance: 1.7,
            depth_min: -2.8,
            depth_max: 2.8,
            axis_offsets_deg: [-5.0, -3.0, -6.0],
            use_skew: true,
        }
    }
}

/// Cube size and stroke widths
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CubeConfig {
    /// Signed scale; the half edge is its absolute value
    pub scale_factor: f32,
    /// Pixel scale applied after projection
    pub size: f32,
    /// Edge line stroke width
    pub line_stroke: f32,
    /// Vertex marker stroke width
    pub point_stroke: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.55,
            size: 100.0,
            line_stroke: 10.0,
            point_stroke: 14.0,
        }
    }
}

/// Cube fade and spin animation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Alpha reached when the cube appears
    pub fade_in_alpha: f32,
    /// Fade-in duration (ms)
    pub fade_in_ms: u32,
    /// Fade-out duration (ms); the spin freezes when it ends
    pub fade_out_ms: u32,
    /// Spin angle at the start of each rising leg (degrees)
    pub spin_min_deg: f32,
    /// Spin angle at the turn-around point (degrees)
    pub spin_max_deg: f32,
    /// Duration of one leg of the oscillation (ms)
    pub spin_leg_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_in_alpha: 0.6,
            fade_in_ms: 800,
            fade_out_ms: 700,
            spin_min_deg: 10.0,
            spin_max_deg: 360.0,
            spin_leg_ms: 20_000,
        }
    }
}

/// Clock ring layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingConfig {
    /// Angle each arc starts from, before rotation (degrees)
    pub start_angle_deg: f32,
    /// Rotation applied to the whole face (degrees; -90 puts 0 at the top)
    pub rotation_deg: f32,
    /// Arc stroke width
    pub stroke: f32,
    /// Ring radii as fractions of the face half-width: seconds, minutes, hours
    pub radius_fractions: [f32; 3],
    /// Smoothing tween applied to each sweep angle change (ms)
    pub tween_ms: u32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            start_angle_deg: 1.5,
            rotation_deg: -90.0,
            stroke: 12.0,
            radius_fractions: [1.0, 0.43, 0.36],
            tween_ms: 1000,
        }
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    /// Layout version
    pub version: u8,
    pub timer: TimerConfig,
    pub projection: ProjectionConfig,
    pub cube: CubeConfig,
    pub animation: AnimationConfig,
    pub rings: RingConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            timer: TimerConfig::default(),
            projection: ProjectionConfig::default(),
            cube: CubeConfig::default(),
            animation: AnimationConfig::default(),
            rings: RingConfig::default(),
        }
    }
}

impl CubeConfig {
    /// Half edge length of the cube
    pub fn half_edge(&self) -> f32 {
        libm::fabsf(self.scale_factor)
    }
}
