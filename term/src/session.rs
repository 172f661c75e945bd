use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, style::ResetColor, terminal};

/// Raw-mode terminal for the lifetime of the game.
///
/// Dropping the session restores cooked mode and the cursor, so the
/// terminal is put back whether the game ends, the player quits or an
/// error unwinds out of the loop.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        log::debug!("Terminal in raw mode");
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut impl Write {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show);
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Could not restore terminal: {}", err);
        }
        log::debug!("Terminal restored");
    }
}
