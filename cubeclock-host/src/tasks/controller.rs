//! Main controller task
//!
//! Sleeps until the next timer deadline or animation frame, or until a
//! command arrives, whichever comes first. Every wake polls the machine and
//! repaints if needed, so a late wake only costs latency, never a tick.

use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};
use tracing::{error, info, warn};

use cubeclock_core::config::WidgetConfig;

use crate::channels::{INPUT_CHANNEL, SHUTDOWN};
use crate::controller::{Controller, Flow};
use crate::display::Terminal;

/// Monotonic milliseconds since start
fn now_ms() -> u64 {
    Instant::now().as_millis()
}

async fn sleep_until(deadline_ms: Option<u64>) {
    match deadline_ms {
        Some(at) => Timer::at(Instant::from_millis(at)).await,
        None => core::future::pending::<()>().await,
    }
}

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: WidgetConfig) {
    info!("Controller task started");

    let mut controller = match Controller::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            error!(?e, "Invalid configuration");
            SHUTDOWN.signal(());
            return;
        }
    };
    let mut terminal = Terminal::stdout();

    loop {
        let now = now_ms();
        controller.poll(now);

        let state = controller.state();
        match controller.render(now) {
            Ok(Some(screen)) => {
                if let Err(e) = terminal.present(screen, state) {
                    warn!(error = %e, "Failed to write frame");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(?e, "Failed to paint frame"),
        }
        if controller.take_bell() {
            if let Err(e) = terminal.bell() {
                warn!(error = %e, "Failed to ring bell");
            }
        }

        match select(INPUT_CHANNEL.receive(), sleep_until(controller.next_wake(now))).await {
            Either::First(command) => {
                if controller.handle(command, now_ms()) == Flow::Quit {
                    break;
                }
            }
            Either::Second(()) => {}
        }
    }

    info!("Controller task stopped");
    SHUTDOWN.signal(());
}
