//! Text formatting for the time display

use core::fmt::Write;

use heapless::String;

use super::face::ClockFace;

/// Length of an `HH:MM:SS` string
pub const HMS_LEN: usize = 8;

/// Format a face as `HH:MM:SS`
///
/// Minutes and seconds may legitimately read `60` (a full ring).
pub fn format_hms(face: &ClockFace) -> String<HMS_LEN> {
    let mut out = String::new();
    // 8 bytes always fit: every field is at most two digits
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        face.hours(),
        face.minutes(),
        face.seconds()
    );
    out
}
