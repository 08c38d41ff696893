//! Crossterm-backed terminal

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::{InputEvent, TerminalBackend};
use crate::compositor::Surface;
use crate::geometry::Rect;

const BELL: &str = "\x07";

/// Full-screen terminal in raw mode on the alternate screen
pub struct CrosstermTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl CrosstermTerminal {
    /// Take over the terminal: raw mode, alternate screen, mouse capture,
    /// hidden cursor
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }
}

impl TerminalBackend for CrosstermTerminal {
    fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::sized(size.height, size.width))
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        if !event::poll(Duration::ZERO)? {
            return Ok(InputEvent::None);
        }

        let input = match event::read()? {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => InputEvent::Escape,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    InputEvent::Interrupt
                }
                _ => InputEvent::Other,
            },
            Event::Mouse(_) => InputEvent::Mouse,
            _ => InputEvent::Other,
        };
        Ok(input)
    }

    fn render(&mut self, draw: &mut dyn FnMut(&mut dyn Surface)) -> io::Result<()> {
        // ratatui hands out a freshly reset buffer sized to the terminal
        self.terminal.draw(|frame| draw(frame.buffer_mut()))?;
        Ok(())
    }

    fn cue(&mut self) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), Print(BELL))
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }

        // every step runs even if an earlier one failed
        let steps = [
            self.terminal.clear(),
            disable_raw_mode(),
            execute!(
                self.terminal.backend_mut(),
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            ),
        ];
        self.restored = true;
        first_error(steps)
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// `Ok` if every step succeeded, else the earliest failure
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(err) = step {
            first.get_or_insert(err);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Best-effort restore for the panic hook, where no terminal handle exists
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let err = first_error([failed("clear"), Ok(()), failed("leave")]).unwrap_err();
        assert_eq!(err.to_string(), "clear");
    }

    #[test]
    fn test_restore_steps_run_after_a_failure() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, ok: bool| {
            ran.push(name);
            if ok {
                Ok(())
            } else {
                failed(name)
            }
        };
        let result = first_error([step("clear", false), step("raw", true), step("screen", true)]);

        assert!(result.is_err());
        assert_eq!(ran, ["clear", "raw", "screen"]);
    }
}
