//! Canvas backend trait
//!
//! Coordinates are pixels with the origin at the top left and y growing
//! downward. Angles are degrees measured clockwise from the +x axis.

use cubeclock_core::projection::Vec2;

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// Nothing of the primitive lands on the canvas
    OutOfBounds,
    /// Canvas has no surface yet
    NotReady,
}

/// 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Alpha channel as 0..=1
    pub fn alpha(self) -> f32 {
        (self.0 >> 24) as f32 / 255.0
    }

    /// Same color with its alpha multiplied by `factor`
    pub fn with_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let alpha = libm::roundf((self.0 >> 24) as f32 * factor) as u32;
        Self((alpha << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Check if drawing with this color has any effect
    pub fn is_transparent(self) -> bool {
        self.0 >> 24 == 0
    }
}

/// Line end style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cap {
    Butt,
    Round,
}

/// Stroke width and cap
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stroke {
    pub width: f32,
    pub cap: Cap,
}

impl Stroke {
    pub const fn round(width: f32) -> Self {
        Self {
            width,
            cap: Cap::Round,
        }
    }
}

/// Fill for stroked shapes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paint {
    Solid(Color),
    /// Color sweeping from the first to the second along the shape
    Sweep(Color, Color),
}

impl Paint {
    /// Color at the start of the shape
    pub fn start_color(&self) -> Color {
        match self {
            Paint::Solid(color) | Paint::Sweep(color, _) => *color,
        }
    }
}

/// Canvas backend trait
///
/// Provides a backend-agnostic interface for drawing the widget.
/// Implementations may ignore stroke widths and colors they cannot show.
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Draw a straight segment
    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        paint: Paint,
    ) -> Result<(), CanvasError>;

    /// Draw a marker at every point
    fn draw_points(
        &mut self,
        points: &[Vec2],
        stroke: Stroke,
        paint: Paint,
    ) -> Result<(), CanvasError>;

    /// Draw a circular arc
    ///
    /// - `start_deg`: Angle the arc starts at
    /// - `sweep_deg`: Clockwise extent; zero draws nothing
    fn draw_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke: Stroke,
        paint: Paint,
    ) -> Result<(), CanvasError>;

    /// Draw text centered on `center`
    fn draw_text(&mut self, center: Vec2, text: &str, color: Color) -> Result<(), CanvasError>;

    /// Get the surface size in pixels (width, height)
    fn dimensions(&self) -> (f32, f32);

    /// Check if the canvas can be drawn on
    fn is_ready(&self) -> bool;
}
