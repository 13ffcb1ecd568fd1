//! State machine for the countdown
//!
//! The state machine is explicit, finite, and deterministic. `TimerMachine`
//! in the scheduler module owns the counters and drives it.

pub mod events;
pub mod machine;

pub use events::{Event, Notification};
pub use machine::State;
