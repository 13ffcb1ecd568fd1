//! Board-agnostic core logic for the Cubeclock countdown widget
//!
//! This crate contains everything that does not depend on a particular
//! renderer, clock source or input device:
//!
//! - Clock face counters and ring sweep angles
//! - Countdown state machine (lead-in, ticks, pause, completion blink)
//! - Cancellable scheduled activities driven by caller-supplied time
//! - Cube geometry and the rotate/skew projection
//! - Cube and ring animation drivers
//! - Configuration type definitions
//!
//! Time never comes from inside the crate: every time-dependent call takes
//! `now_ms`, a monotonic millisecond counter owned by the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod clock;
pub mod config;
pub mod projection;
pub mod scheduler;
pub mod state;
pub mod traits;
