//! Audio Fallback Controller
//!
//! Loops a user-supplied clip on a blocking background task. The only state
//! shared with the render loop is the [`FallbackLatch`]: once playback fails
//! the latch is set and the session uses the terminal bell for the rest of
//! its life. The latch never resets.

#[cfg(feature = "audio")]
mod rodio_player;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[cfg(feature = "audio")]
pub use rodio_player::RodioPlayer;

/// Failures from the audio backend
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The sound file could not be opened
    #[error("failed to open sound file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The sound file is not a format we can decode
    #[error("failed to decode sound file {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// No usable output device, or the device failed mid-play
    #[error("audio device error: {0}")]
    Device(String),

    /// This build has no audio support
    #[error("audio playback is not available in this build (enable the `audio` feature)")]
    Unsupported,
}

/// Decode-and-play collaborator
pub trait AudioPlayer: Send + Sync + 'static {
    /// Play `path` scaled by `volume`, blocking until it finishes or [`stop`](Self::stop) is called
    fn play_to_end(&self, path: &Path, volume: f32) -> Result<(), PlaybackError>;

    /// Stop whatever is playing
    fn stop(&self);
}

/// Player used when the crate is built without audio support
#[derive(Debug, Default)]
pub struct UnsupportedPlayer;

impl AudioPlayer for UnsupportedPlayer {
    fn play_to_end(&self, _path: &Path, _volume: f32) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unsupported)
    }

    fn stop(&self) {}
}

/// The player for this build
#[cfg(feature = "audio")]
pub fn default_player() -> Arc<dyn AudioPlayer> {
    Arc::new(RodioPlayer::new())
}

/// The player for this build
#[cfg(not(feature = "audio"))]
pub fn default_player() -> Arc<dyn AudioPlayer> {
    Arc::new(UnsupportedPlayer)
}

/// The clip a player is currently playing, plus a stop request that sticks.
///
/// Players register the playing handle only once it exists, which can be
/// long after `stop` was asked for. A stop that lands before registration is
/// remembered and handed back from [`register`](Self::register).
#[derive(Debug)]
pub struct PlaybackSlot<T> {
    state: Mutex<SlotState<T>>,
}

#[derive(Debug)]
struct SlotState<T> {
    current: Option<T>,
    stopped: bool,
}

impl<T> Default for PlaybackSlot<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState {
                current: None,
                stopped: false,
            }),
        }
    }
}

impl<T> PlaybackSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `item` as playing. `Err(item)` means stop was already
    /// requested and the caller must cut it off itself.
    pub fn register(&self, item: T) -> Result<(), T> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.stopped {
            return Err(item);
        }
        state.current = Some(item);
        Ok(())
    }

    /// Forget the current item after it finished on its own
    pub fn release(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.current = None;
    }

    /// Request a stop and take whatever is playing
    pub fn stop(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.stopped = true;
        state.current.take()
    }

    pub fn is_stopped(&self) -> bool {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).stopped
    }
}

/// One-way "use the bell" flag shared between the loop and the audio task
#[derive(Clone, Debug, Default)]
pub struct FallbackLatch(Arc<AtomicBool>);

impl FallbackLatch {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the latch. Returns `true` only for the call that flipped it.
    pub fn enable(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

/// Background loop playing one clip over and over
pub struct AudioLoop {
    player: Arc<dyn AudioPlayer>,
    stopping: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl AudioLoop {
    /// Start looping `path`. Must be called inside a tokio runtime.
    pub fn start(
        player: Arc<dyn AudioPlayer>,
        path: PathBuf,
        volume: f32,
        fallback: FallbackLatch,
    ) -> Self {
        let stopping = Arc::new(AtomicBool::new(false));

        let task = {
            let player = Arc::clone(&player);
            let stopping = Arc::clone(&stopping);
            tokio::task::spawn_blocking(move || {
                info!(path = %path.display(), volume, "looping sound file");
                while !stopping.load(Ordering::Acquire) {
                    if let Err(err) = player.play_to_end(&path, volume) {
                        player.stop();
                        if stopping.load(Ordering::Acquire) {
                            break;
                        }
                        warn!(error = %err, "sound playback failed, falling back to the terminal bell");
                        if fallback.enable() {
                            debug!("fallback cue enabled");
                        }
                        break;
                    }
                }
            })
        };

        Self {
            player,
            stopping,
            task: Some(task),
        }
    }

    /// Ask the loop to finish and cut off the current clip, without waiting
    pub fn stop(&mut self) {
        self.stopping.store(true, Ordering::Release);
        self.player.stop();
        // the blocking task notices the flag once play_to_end returns
        self.task.take();
    }

    /// Stop, then wait up to `grace` for the blocking task to finish
    pub async fn shutdown(&mut self, grace: Duration) {
        self.stopping.store(true, Ordering::Release);
        self.player.stop();

        let Some(task) = self.task.take() else {
            return;
        };
        match tokio::time::timeout(grace, task).await {
            Ok(Ok(())) => debug!("audio loop finished"),
            Ok(Err(err)) => warn!(error = %err, "audio task failed"),
            Err(_) => warn!(?grace, "audio task still running after stop, detaching"),
        }
    }
}

impl Drop for AudioLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
