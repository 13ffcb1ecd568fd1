//! Character-grid canvas
//!
//! Renders the widget into a fixed grid of ASCII cells, for terminals and
//! for tests that want to look at a frame. Each cell stands for a
//! `CELL_WIDTH` x `CELL_HEIGHT` pixel block, which keeps circles round on a
//! typical terminal font.

use cubeclock_core::projection::Vec2;

use crate::backend::{Canvas, CanvasError, Color, Paint, Stroke};

/// Pixel width of one cell
pub const CELL_WIDTH: f32 = 8.0;

/// Pixel height of one cell
pub const CELL_HEIGHT: f32 = 16.0;

/// Cell left untouched
pub const BLANK: u8 = b' ';

const ARC_GLYPH: u8 = b'.';
const LINE_GLYPH: u8 = b'#';
const FAINT_LINE_GLYPH: u8 = b'+';
const POINT_GLYPH: u8 = b'o';

/// Longest arc a single step may cover, in cells
const ARC_STEP_CELLS: f32 = 0.5;

/// Upper bound on samples per arc
const MAX_ARC_STEPS: u32 = 1440;

/// Screen buffer of ASCII cells
#[derive(Clone)]
pub struct TextScreen<const COLS: usize, const ROWS: usize> {
    cells: [[u8; COLS]; ROWS],
}

impl<const COLS: usize, const ROWS: usize> Default for TextScreen<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> TextScreen<COLS, ROWS> {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
        }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Get all rows as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).filter_map(move |row| self.line(row))
    }

    /// Cell content at (col, row)
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Cell containing a pixel position
    fn to_cell(point: Vec2) -> (i32, i32) {
        (
            libm::floorf(point.x / CELL_WIDTH) as i32,
            libm::floorf(point.y / CELL_HEIGHT) as i32,
        )
    }

    /// Set one cell; positions off the grid are clipped
    fn plot(&mut self, col: i32, row: i32, glyph: u8) -> bool {
        if col < 0 || row < 0 || col as usize >= COLS || row as usize >= ROWS {
            return false;
        }
        self.cells[row as usize][col as usize] = glyph;
        true
    }

    /// Bresenham walk between two cells
    fn plot_line(&mut self, from: (i32, i32), to: (i32, i32), glyph: u8) -> bool {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut any = false;

        loop {
            any |= self.plot(x, y, glyph);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        any
    }

    fn line_glyph(paint: Paint) -> u8 {
        if paint.start_color().alpha() >= 0.5 {
            LINE_GLYPH
        } else {
            FAINT_LINE_GLYPH
        }
    }
}

impl<const COLS: usize, const ROWS: usize> Canvas for TextScreen<COLS, ROWS> {
    fn clear(&mut self) -> Result<(), CanvasError> {
        for row in &mut self.cells {
            row.fill(BLANK);
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        _stroke: Stroke,
        paint: Paint,
    ) -> Result<(), CanvasError> {
        if paint.start_color().is_transparent() {
            return Ok(());
        }
        let glyph = Self::line_glyph(paint);
        if self.plot_line(Self::to_cell(from), Self::to_cell(to), glyph) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds)
        }
    }

    fn draw_points(
        &mut self,
        points: &[Vec2],
        _stroke: Stroke,
        paint: Paint,
    ) -> Result<(), CanvasError> {
        if paint.start_color().is_transparent() {
            return Ok(());
        }
        for point in points {
            let (col, row) = Self::to_cell(*point);
            self.plot(col, row, POINT_GLYPH);
        }
        Ok(())
    }

    fn draw_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        _stroke: Stroke,
        _paint: Paint,
    ) -> Result<(), CanvasError> {
        if sweep_deg == 0.0 || radius <= 0.0 {
            return Ok(());
        }
        let length_cells = libm::fabsf(sweep_deg).to_radians() * radius / CELL_WIDTH;
        let steps = (libm::ceilf(length_cells / ARC_STEP_CELLS) as u32).clamp(1, MAX_ARC_STEPS);

        let mut any = false;
        for step in 0..=steps {
            let angle = (start_deg + sweep_deg * step as f32 / steps as f32).to_radians();
            let point = Vec2::new(
                center.x + radius * libm::cosf(angle),
                center.y + radius * libm::sinf(angle),
            );
            let (col, row) = Self::to_cell(point);
            any |= self.plot(col, row, ARC_GLYPH);
        }
        if any {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds)
        }
    }

    fn draw_text(&mut self, center: Vec2, text: &str, _color: Color) -> Result<(), CanvasError> {
        let (center_col, row) = Self::to_cell(center);
        let start = center_col - (text.len() as i32) / 2;
        let mut any = false;
        for (offset, byte) in text.bytes().enumerate() {
            let glyph = if byte.is_ascii_graphic() { byte } else { b'?' };
            any |= self.plot(start + offset as i32, row, glyph);
        }
        if any || text.is_empty() {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds)
        }
    }

    fn dimensions(&self) -> (f32, f32) {
        (COLS as f32 * CELL_WIDTH, ROWS as f32 * CELL_HEIGHT)
    }

    fn is_ready(&self) -> bool {
        COLS > 0 && ROWS > 0
    }
}
