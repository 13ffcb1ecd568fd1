//! Cubeclock - countdown widget in a terminal
//!
//! Runs the timer core on an embassy executor with std timers, reads
//! commands from stdin and draws the widget (rings, tumbling cube, time
//! text) as a character frame.

use embassy_executor::Spawner;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod channels;
mod config;
mod controller;
mod display;
mod input;
mod tasks;

use crate::channels::SHUTDOWN;
use crate::config::{config_path, load_config};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Logs go to stderr so they can be redirected away from the frame
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Cubeclock v{} starting", env!("CARGO_PKG_VERSION"));

    let path = config_path();
    let config = load_config(path.as_deref());

    std::thread::spawn(|| input::read_commands(std::io::stdin().lock()));
    spawner.must_spawn(tasks::controller_task(config));

    SHUTDOWN.wait().await;
    info!("Shutting down");
    std::process::exit(0);
}
