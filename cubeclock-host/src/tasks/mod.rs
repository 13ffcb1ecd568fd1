//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;

pub use controller::controller_task;
