//! Configuration validation
//!
//! Constants are checked once when a config is accepted, never per frame.

use super::types::{
    AnimationConfig, CubeConfig, RingConfig, TimerConfig, WidgetConfig, CONFIG_VERSION,
};
use crate::projection::validate_projection;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick or blink interval is zero
    ZeroInterval,
    /// Cube scale is zero, negative size, or not finite
    InvalidCubeSize,
    /// Depth normalization range is empty or inverted
    EmptyDepthRange,
    /// Some reachable rotation would bring the skew factor near zero
    DegenerateSkew,
    /// Fade or spin parameters out of range
    InvalidAnimation,
    /// Ring radii or stroke out of range
    InvalidRings,
    /// Config layout version mismatch
    VersionMismatch,
}

impl TimerConfig {
    /// Check timing constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 || self.blink_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

impl CubeConfig {
    /// Check size and stroke constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let half = self.half_edge();
        if !(half.is_finite() && half > 0.0) || !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidCubeSize);
        }
        if self.line_stroke < 0.0 || self.point_stroke < 0.0 {
            return Err(ConfigError::InvalidCubeSize);
        }
        Ok(())
    }
}

impl AnimationConfig {
    /// Check fade and spin constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fade_in_alpha) {
            return Err(ConfigError::InvalidAnimation);
        }
        if !(self.spin_max_deg > self.spin_min_deg) || self.spin_leg_ms == 0 {
            return Err(ConfigError::InvalidAnimation);
        }
        Ok(())
    }
}

impl RingConfig {
    /// Check ring layout constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radii_ok = self
            .radius_fractions
            .iter()
            .all(|f| *f > 0.0 && *f <= 1.0);
        if !radii_ok || self.stroke < 0.0 {
            return Err(ConfigError::InvalidRings);
        }
        Ok(())
    }
}

impl WidgetConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        self.timer.validate()?;
        self.cube.validate()?;
        validate_projection(&self.projection, self.cube.half_edge())?;
        self.animation.validate()?;
        self.rings.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectionConfig;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(WidgetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_tick_interval() {
        let config = TimerConfig {
            tick_interval_ms: 0,
            ..TimerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_version_mismatch() {
        let config = WidgetConfig {
            version: 9,
            ..WidgetConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::VersionMismatch));
    }

    #[test]
    fn test_oversized_cube_degenerates() {
        let config = WidgetConfig {
            cube: CubeConfig {
                scale_factor: 4.0,
                ..CubeConfig::default()
            },
            ..WidgetConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DegenerateSkew));
    }

    #[test]
    fn test_flat_projection_allows_any_depth() {
        let config = WidgetConfig {
            cube: CubeConfig {
                scale_factor: 4.0,
                ..CubeConfig::default()
            },
            projection: ProjectionConfig {
                use_skew: false,
                ..ProjectionConfig::default()
            },
            ..WidgetConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_inverted_spin_range() {
        let config = AnimationConfig {
            spin_min_deg: 360.0,
            spin_max_deg: 10.0,
            ..AnimationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAnimation));
    }

    #[test]
    fn test_ring_radius_out_of_range() {
        let config = RingConfig {
            radius_fractions: [1.0, 0.0, 0.36],
            ..RingConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRings));
    }
}
