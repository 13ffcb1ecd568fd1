//! Seams between the core logic and the host
//!
//! These traits define what the core expects from whatever embeds it.

pub mod listener;

pub use listener::{NotificationQueue, TimerListener};
