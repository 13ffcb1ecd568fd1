//! Widget colors

use crate::backend::{Color, Paint};

/// Cube edges and vertex markers
pub const CUBE_EDGES: Color = Color::from_argb(0x997B_80A2);

/// Time text
pub const TIME_TEXT: Color = Color::from_argb(0xFFFF_FFFF);

/// Seconds ring (outer)
pub const SECONDS_RING: Paint = Paint::Sweep(
    Color::from_argb(0xFF86_DAFA),
    Color::from_argb(0xFF27_B4FF),
);

/// Minutes ring (middle)
pub const MINUTES_RING: Paint = Paint::Sweep(
    Color::from_argb(0xFF94_91F8),
    Color::from_argb(0xFF5B_56F5),
);

/// Hours ring (inner)
pub const HOURS_RING: Paint = Paint::Sweep(
    Color::from_argb(0xFFEB_9FF8),
    Color::from_argb(0xFFE3_4BFF),
);

/// Ring paints ordered seconds, minutes, hours
pub const RINGS: [Paint; 3] = [SECONDS_RING, MINUTES_RING, HOURS_RING];
