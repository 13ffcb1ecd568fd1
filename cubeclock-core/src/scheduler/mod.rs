//! Countdown scheduling
//!
//! The machine never reads a clock. Hosts pass the current time into every
//! call and sleep until `next_deadline()`.

pub mod activity;
pub mod countdown;

pub use activity::Activity;
pub use countdown::{FaceSnapshot, TimerMachine};
