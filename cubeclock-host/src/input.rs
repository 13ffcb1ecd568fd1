//! Keyboard commands
//!
//! One command per line on stdin. Lines are read on a plain thread, since
//! stdin has no async reader here, and handed to the controller task
//! through `INPUT_CHANNEL`.

use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, info, warn};

use cubeclock_core::clock::{Change, TimeUnit};

use crate::channels::INPUT_CHANNEL;

/// User commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one counter (`h+`, `m-`, ...)
    Adjust(TimeUnit, Change),
    /// Toggle play/pause (`p`)
    PlayPause,
    /// Zero everything (`r`)
    Reset,
    /// Leave the program (`q`)
    Quit,
}

/// Command parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Blank line
    Empty,
    /// Not a known command
    Unknown,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "p" | "play" | "pause" => Command::PlayPause,
            "r" | "reset" => Command::Reset,
            "q" | "quit" => Command::Quit,
            other => {
                let mut chars = other.chars();
                let unit = match chars.next() {
                    Some('h') => TimeUnit::Hours,
                    Some('m') => TimeUnit::Minutes,
                    Some('s') => TimeUnit::Seconds,
                    _ => return Err(InputError::Unknown),
                };
                let change = match chars.as_str() {
                    "+" => Change::Increase,
                    "-" => Change::Decrease,
                    _ => return Err(InputError::Unknown),
                };
                Command::Adjust(unit, change)
            }
        };
        Ok(command)
    }
}

/// Read stdin until EOF, forwarding commands
///
/// EOF counts as a quit so piping a script into the binary terminates.
pub fn read_commands<R: BufRead>(reader: R) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "stdin read failed");
                break;
            }
        };
        match line.parse::<Command>() {
            Ok(command) => forward(command),
            Err(InputError::Empty) => {}
            Err(e) => warn!(?e, line = line.trim(), "ignoring input"),
        }
    }
    info!("stdin closed");
    forward(Command::Quit);
}

/// Send a command, waiting while the channel is full
fn forward(command: Command) {
    debug!(?command, "input");
    embassy_futures::block_on(INPUT_CHANNEL.send(command));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_adjust() {
        assert_eq!(
            "h+".parse(),
            Ok(Command::Adjust(TimeUnit::Hours, Change::Increase))
        );
        assert_eq!(
            " m- ".parse(),
            Ok(Command::Adjust(TimeUnit::Minutes, Change::Decrease))
        );
        assert_eq!(
            "S+".parse(),
            Ok(Command::Adjust(TimeUnit::Seconds, Change::Increase))
        );
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("p".parse(), Ok(Command::PlayPause));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(InputError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(InputError::Empty));
        assert_eq!("x+".parse::<Command>(), Err(InputError::Unknown));
        assert_eq!("h++".parse::<Command>(), Err(InputError::Unknown));
        assert_eq!("h".parse::<Command>(), Err(InputError::Unknown));
    }

    #[test]
    fn test_burst_reaches_controller_in_order() {
        let consumer = std::thread::spawn(|| {
            let mut received = Vec::new();
            loop {
                let command = embassy_futures::block_on(INPUT_CHANNEL.receive());
                received.push(command);
                if command == Command::Quit {
                    break received;
                }
            }
        });

        read_commands(std::io::Cursor::new("s+\n".repeat(20)));
        let received = consumer.join().unwrap();

        assert_eq!(received.len(), 21);
        assert!(received[..20]
            .iter()
            .all(|c| *c == Command::Adjust(TimeUnit::Seconds, Change::Increase)));
        assert_eq!(received[20], Command::Quit);
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(line in ".{0,16}") {
            let _ = line.parse::<Command>();
        }
    }
}
