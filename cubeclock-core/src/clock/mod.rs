//! Clock face counters, ring angles and time text

pub mod face;
pub mod format;

pub use face::{
    Change, ClockFace, TimeUnit, DEGREES_PER_HOUR, DEGREES_PER_MINUTE, DEGREES_PER_SECOND,
    MAX_HOURS, MAX_MINUTES, MAX_SECONDS,
};
pub use format::{format_hms, HMS_LEN};
