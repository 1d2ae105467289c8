//! Terminal mode lifetime management.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io;

/// Raw mode + alternate screen + mouse capture, restored on drop so the
/// shell is usable again on every return path.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        let mut stderr = io::stderr();
        stderr.execute(EnterAlternateScreen)?;
        stderr.execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stderr = io::stderr();
        let _ = stderr.execute(DisableMouseCapture);
        let _ = stderr.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// True when stdin is an interactive terminal.
pub fn stdin_is_tty() -> bool {
    use std::io::IsTerminal;
    io::stdin().is_terminal()
}
