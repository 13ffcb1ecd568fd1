//! Inter-task communication channels
//!
//! Uses embassy-sync primitives; the critical-section implementation is the
//! std one, so the stdin thread can send from outside the executor.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::input::Command;

/// Channel capacity for keyboard commands
const INPUT_CHANNEL_SIZE: usize = 8;

/// Commands from the stdin reader
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Command, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Raised by the controller when the user quits
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();
