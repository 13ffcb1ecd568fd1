//! ANSI terminal presenter
//!
//! Redraws the whole character screen in place, followed by a status line.

use std::io::{self, Write};

use cubeclock_core::state::State;

use crate::controller::Screen;

const CURSOR_HOME: &str = "\x1b[H";
const CLEAR_SCREEN: &str = "\x1b[2J";
const ERASE_LINE: &str = "\x1b[K";
const BELL: &str = "\x07";

const HELP: &str = "h+ h- m+ m- s+ s-  p play/pause  r reset  q quit";

/// Writes frames to any byte sink
pub struct Terminal<W: Write> {
    out: W,
    cleared: bool,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cleared: false,
        }
    }

    /// Draw a frame over the previous one
    pub fn present(&mut self, screen: &Screen, state: State) -> io::Result<()> {
        if !self.cleared {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
            self.cleared = true;
        }
        self.out.write_all(CURSOR_HOME.as_bytes())?;
        for line in screen.lines() {
            // erase leftovers of a longer previous line
            writeln!(self.out, "{}{}", line.trim_end(), ERASE_LINE)?;
        }
        writeln!(self.out, "{:?}  |  {}{}", state, HELP, ERASE_LINE)?;
        self.out.flush()
    }

    /// Ring the terminal bell
    pub fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(BELL.as_bytes())?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
