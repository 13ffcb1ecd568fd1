//! Widget painter
//!
//! Draws one frame: three ring arcs, the cube wireframe on top and the
//! remaining time in the middle. Sizes in the configuration are given for a
//! reference face and scaled to the canvas.

use cubeclock_core::animation::{CubeFrame, RING_COUNT};
use cubeclock_core::clock::format_hms;
use cubeclock_core::config::{CubeConfig, RingConfig, WidgetConfig};
use cubeclock_core::projection::{Vec2, EDGES, VERTEX_COUNT};
use cubeclock_core::scheduler::FaceSnapshot;

use crate::backend::{Canvas, CanvasError, Paint, Stroke};
use crate::palette;

/// Half-width of the face the configured sizes are tuned for
pub const REFERENCE_HALF_WIDTH: f32 = 540.0;

/// Where the face sits on a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneLayout {
    pub center: Vec2,
    pub half_width: f32,
}

impl SceneLayout {
    /// Largest centered square face
    pub fn for_canvas<C: Canvas>(canvas: &C) -> Self {
        let (width, height) = canvas.dimensions();
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            half_width: width.min(height) / 2.0,
        }
    }

    /// Factor from reference sizes to canvas pixels
    pub fn scale(&self) -> f32 {
        self.half_width / REFERENCE_HALF_WIDTH
    }

    /// Pixel scale to project the cube with
    pub fn cube_size(&self, cube: &CubeConfig) -> f32 {
        cube.size * self.scale()
    }

    /// Radius of ring `index` (seconds, minutes, hours)
    pub fn ring_radius(&self, rings: &RingConfig, index: usize) -> f32 {
        let outer = self.half_width - rings.stroke * self.scale() / 2.0;
        outer * rings.radius_fractions[index]
    }
}

/// Draw one frame of the widget
///
/// - `rings`: Sweep angles to draw, ordered seconds, minutes, hours
/// - `cube_points`: Projected vertices as offsets from the face center,
///   computed with `SceneLayout::cube_size`
pub fn paint_widget<C: Canvas>(
    canvas: &mut C,
    snapshot: &FaceSnapshot,
    rings: [f32; RING_COUNT],
    cube_points: &[Vec2; VERTEX_COUNT],
    cube_frame: CubeFrame,
    config: &WidgetConfig,
) -> Result<(), CanvasError> {
    if !canvas.is_ready() {
        return Err(CanvasError::NotReady);
    }
    let layout = SceneLayout::for_canvas(canvas);

    canvas.clear()?;
    draw_rings(canvas, &layout, rings, &config.rings)?;
    if cube_frame.alpha > 0.0 {
        draw_cube(canvas, &layout, cube_points, cube_frame.alpha, &config.cube)?;
    }
    if snapshot.display_visible {
        let text = format_hms(&snapshot.face());
        canvas.draw_text(layout.center, &text, palette::TIME_TEXT)?;
    }
    Ok(())
}

fn draw_rings<C: Canvas>(
    canvas: &mut C,
    layout: &SceneLayout,
    rings: [f32; RING_COUNT],
    config: &RingConfig,
) -> Result<(), CanvasError> {
    let stroke = Stroke::round(config.stroke * layout.scale());
    let start = config.rotation_deg + config.start_angle_deg;
    for (index, sweep) in rings.iter().enumerate() {
        if *sweep <= 0.0 {
            continue;
        }
        canvas.draw_arc(
            layout.center,
            layout.ring_radius(config, index),
            start,
            *sweep,
            stroke,
            palette::RINGS[index],
        )?;
    }
    Ok(())
}

fn draw_cube<C: Canvas>(
    canvas: &mut C,
    layout: &SceneLayout,
    points: &[Vec2; VERTEX_COUNT],
    alpha: f32,
    config: &CubeConfig,
) -> Result<(), CanvasError> {
    let paint = Paint::Solid(palette::CUBE_EDGES.with_alpha(alpha));
    let line = Stroke::round(config.line_stroke * layout.scale());
    let marker = Stroke::round(config.point_stroke * layout.scale());

    for edge in EDGES.iter() {
        let start = layout.center + points[edge.start];
        let end = layout.center + points[edge.end];
        canvas.draw_line(start, end, line, paint)?;
        canvas.draw_points(&[start, end], marker, paint)?;
    }
    Ok(())
}
