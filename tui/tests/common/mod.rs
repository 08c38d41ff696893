//! Shared test doubles: a scripted terminal on ratatui's `TestBackend` and
//! configurable audio players.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tokio::time::Instant;

use spnoiser_tui::audio::{AudioPlayer, FallbackLatch, PlaybackError};
use spnoiser_tui::backend::{InputEvent, TerminalBackend};
use spnoiser_tui::compositor::Surface;
use spnoiser_tui::geometry::Rect;

/// Text of every row of a buffer
pub fn rows(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

/// Terminal double.
///
/// `script` is consumed by `poll_event`; an `InputEvent::None` entry ends one
/// tick's input drain, so `[None, Escape]` means "nothing on tick 1, ESC on
/// tick 2". Once the script runs dry every poll returns `None`.
pub struct ScriptedTerminal {
    terminal: Terminal<TestBackend>,
    script: VecDeque<InputEvent>,
    /// Block the next poll (real time) until this latch is set
    pub wait_for_fallback: Option<FallbackLatch>,
    /// Rows of every rendered frame
    pub frames: Vec<Vec<String>>,
    /// Virtual time of every cue
    pub cues: Vec<Instant>,
    pub restored: bool,
    pub fail_cue: bool,
    pub fail_render: bool,
}

impl ScriptedTerminal {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            script: VecDeque::new(),
            wait_for_fallback: None,
            frames: Vec::new(),
            cues: Vec::new(),
            restored: false,
            fail_cue: false,
            fail_render: false,
        }
    }

    pub fn with_script(mut self, script: impl IntoIterator<Item = InputEvent>) -> Self {
        self.script = script.into_iter().collect();
        self
    }

    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TerminalBackend for ScriptedTerminal {
    fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::sized(size.height, size.width))
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        if let Some(latch) = self.wait_for_fallback.take() {
            let deadline = std::time::Instant::now() + Duration::from_secs(5);
            while !latch.is_enabled() && std::time::Instant::now() < deadline {
                std::thread::sleep(Duration::from_millis(1));
            }
        }
        Ok(self.script.pop_front().unwrap_or(InputEvent::None))
    }

    fn render(&mut self, draw: &mut dyn FnMut(&mut dyn Surface)) -> io::Result<()> {
        if self.fail_render {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"));
        }
        self.terminal.draw(|frame| draw(frame.buffer_mut()))?;
        self.frames.push(rows(self.terminal.backend().buffer()));
        Ok(())
    }

    fn cue(&mut self) -> io::Result<()> {
        self.cues.push(Instant::now());
        if self.fail_cue {
            return Err(io::Error::new(io::ErrorKind::Other, "no bell"));
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        Ok(())
    }
}

/// Player whose first `fail_after` calls succeed (instantly) and the rest fail
pub struct CountingPlayer {
    pub attempts: AtomicUsize,
    pub stops: AtomicUsize,
    fail_after: usize,
}

impl CountingPlayer {
    pub fn failing() -> Self {
        Self::failing_after(0)
    }

    pub fn failing_after(fail_after: usize) -> Self {
        Self {
            attempts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            fail_after,
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl AudioPlayer for CountingPlayer {
    fn play_to_end(&self, path: &Path, _volume: f32) -> Result<(), PlaybackError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt >= self.fail_after {
            return Err(PlaybackError::Decode {
                path: path.to_path_buf(),
                reason: "not audio".into(),
            });
        }
        std::thread::sleep(Duration::from_millis(1));
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}
