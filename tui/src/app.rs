//! Main Application
//!
//! The App drives one noising session as a fixed-rate tick loop:
//! 1. Drain pending input (ESC / Ctrl+C stop, mouse events are swallowed)
//! 2. Work out the remaining time and stop when it hits zero
//! 3. Render a fresh [`Monitor`] over the whole terminal
//! 4. Ring the bell when the audio fallback is active
//! 5. Sleep until the next tick
//!
//! Teardown (stop audio, restore the terminal) runs however the loop ends.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::Notify;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::audio::{AudioLoop, AudioPlayer, FallbackLatch};
use crate::backend::{InputEvent, TerminalBackend};
use crate::compositor::Region;
use crate::config::SessionConfig;
use crate::error::UiError;
use crate::widgets::Monitor;

/// How long teardown waits for the audio task to let go of the device
const AUDIO_STOP_GRACE: Duration = Duration::from_millis(500);

/// Why the session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// ESC pressed
    Escape,
    /// Ctrl+C pressed or SIGINT received
    Interrupted,
    /// The time limit ran out
    TimeUp,
}

/// Session lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Not started yet
    Idle,
    Running,
    Stopped(StopReason),
    /// The loop hit a terminal error; teardown still ran
    Failed,
}

/// Main application state
pub struct App<B: TerminalBackend> {
    // === Collaborators ===
    backend: B,
    player: Arc<dyn AudioPlayer>,
    audio: Option<AudioLoop>,
    /// Set from outside (signal handler) to end the session
    interrupt: Option<Arc<Notify>>,

    // === Session State ===
    config: SessionConfig,
    state: SessionState,
    /// Monotonic session start
    start: Instant,
    /// Last time the bell rang (or the start)
    last_cue: Instant,
    /// Bell instead of audio?
    fallback: FallbackLatch,

    // === Counters ===
    ticks: u64,
    frames: u64,
    cues: u64,
}

impl<B: TerminalBackend> App<B> {
    /// Create a new App instance
    pub fn new(backend: B, config: SessionConfig, player: Arc<dyn AudioPlayer>) -> Self {
        let now = Instant::now();
        let fallback = FallbackLatch::new(config.sound.is_none());
        Self {
            backend,
            player,
            audio: None,
            interrupt: None,
            config,
            state: SessionState::Idle,
            start: now,
            last_cue: now,
            fallback,
            ticks: 0,
            frames: 0,
            cues: 0,
        }
    }

    /// End the session when `interrupt` is notified
    pub fn with_interrupt(mut self, interrupt: Arc<Notify>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Run until ESC, interrupt, or time-out. Teardown always runs.
    pub async fn run(&mut self) -> anyhow::Result<StopReason> {
        let result = self.run_loop().await;
        self.teardown().await;
        self.state = match &result {
            Ok(reason) => SessionState::Stopped(*reason),
            Err(_) => SessionState::Failed,
        };
        result
    }

    async fn run_loop(&mut self) -> anyhow::Result<StopReason> {
        let now = Instant::now();
        self.start = now;
        self.last_cue = now;
        self.state = SessionState::Running;

        let area = self.backend.area().context("failed to read terminal size")?;
        info!(
            noise = %self.config.noise,
            max_seconds = self.config.max_seconds,
            height = area.height(),
            width = area.width(),
            "noising session started"
        );

        if let Some(path) = self.config.sound.clone() {
            self.audio = Some(AudioLoop::start(
                Arc::clone(&self.player),
                path,
                self.config.volume,
                self.fallback.clone(),
            ));
        }

        loop {
            if let Some(reason) = self.frame()? {
                info!(?reason, ticks = self.ticks, "noising session stopped");
                return Ok(reason);
            }

            let tick = self.config.tick_interval;
            if self.sleep_or_interrupt(tick).await {
                info!(ticks = self.ticks, "noising session interrupted");
                return Ok(StopReason::Interrupted);
            }
        }
    }

    /// Returns `true` when interrupted before the tick elapsed
    async fn sleep_or_interrupt(&self, tick: Duration) -> bool {
        match &self.interrupt {
            Some(interrupt) => tokio::select! {
                biased;
                _ = interrupt.notified() => true,
                _ = tokio::time::sleep(tick) => false,
            },
            None => {
                tokio::time::sleep(tick).await;
                false
            }
        }
    }

    /// One tick. `Some` means the session is over.
    fn frame(&mut self) -> anyhow::Result<Option<StopReason>> {
        self.ticks += 1;

        let mut mouse_seen = false;
        loop {
            match self.backend.poll_event().context("failed to read input")? {
                InputEvent::None => break,
                InputEvent::Escape => return Ok(Some(StopReason::Escape)),
                InputEvent::Interrupt => return Ok(Some(StopReason::Interrupted)),
                InputEvent::Mouse => mouse_seen = true,
                InputEvent::Other => {}
            }
        }
        if mouse_seen {
            // swallowed so the wheel does not scroll the terminal; no redraw
            debug!(tick = self.ticks, "mouse input consumed");
            return Ok(None);
        }

        let remaining = self.remaining_seconds();
        if remaining == Some(0) {
            return Ok(Some(StopReason::TimeUp));
        }

        let monitor = Monitor::new(&self.config.noise, remaining);
        let mut drawn: Result<(), UiError> = Ok(());
        self.backend
            .render(&mut |surface| {
                drawn = Region::full(surface).draw_sub(&monitor);
            })
            .context("failed to draw frame")?;
        self.frames += 1;
        if let Err(err) = drawn {
            // rendering failures never stop the session
            warn!(error = %err, "Rendering error");
        }

        if self.fallback.is_enabled() {
            let now = Instant::now();
            if now.duration_since(self.last_cue) >= self.config.cue_interval {
                if let Err(err) = self.backend.cue() {
                    debug!(error = %err, "bell failed");
                }
                self.last_cue = now;
                self.cues += 1;
            }
        }

        Ok(None)
    }

    /// Whole seconds left, or `None` for an unbounded session
    pub fn remaining_seconds(&self) -> Option<u64> {
        let max = self.config.max_duration()?;
        Some(max.saturating_sub(self.start.elapsed()).as_secs())
    }

    async fn teardown(&mut self) {
        if let Some(mut audio) = self.audio.take() {
            audio.shutdown(AUDIO_STOP_GRACE).await;
        }
        if let Err(err) = self.backend.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Shared fallback flag (set once audio playback fails)
    pub fn fallback(&self) -> &FallbackLatch {
        &self.fallback
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Ticks started, including the one that stopped the session
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frames rendered
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bell cues emitted
    pub fn cues(&self) -> u64 {
        self.cues
    }
}
