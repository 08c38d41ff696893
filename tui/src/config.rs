//! Session Configuration
//!
//! Settings come from four places, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (`SPNOISER_*`, handled by clap)
//! 3. The TOML config file
//! 4. Defaults
//!
//! The file lives at `$XDG_CONFIG_HOME/spnoiser/config.toml` unless another
//! path is given.
//!
//! ```toml
//! noise = "beep"
//! time = 60
//! sound = "/home/me/alarm.wav"
//! volume = 0.8
//!
//! [timing]
//! tick_interval_ms = 800
//! cue_interval_ms = 1000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_NOISE: &str = "beep";
pub const DEFAULT_MAX_SECONDS: u64 = 60;
pub const DEFAULT_VOLUME: f32 = 1.0;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(800);
pub const DEFAULT_CUE_INTERVAL: Duration = Duration::from_millis(1000);

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// `[timing]` section
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingToml {
    pub tick_interval_ms: Option<u64>,
    pub cue_interval_ms: Option<u64>,
}

/// Contents of the config file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub noise: Option<String>,
    pub time: Option<u64>,
    pub sound: Option<PathBuf>,
    pub volume: Option<f32>,
    pub timing: TimingToml,
}

impl ConfigFile {
    /// `$XDG_CONFIG_HOME/spnoiser/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spnoiser").join("config.toml"))
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load an explicitly named file; it must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Load the default file if there is one
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub noise: Option<String>,
    pub time: Option<u64>,
    pub sound: Option<PathBuf>,
    pub volume: Option<f32>,
}

/// Fully resolved settings for one session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Text repeated across the screen
    pub noise: String,
    /// Maximum session length in seconds; 0 means unbounded
    pub max_seconds: u64,
    /// Clip to loop instead of the bell
    pub sound: Option<PathBuf>,
    /// Linear sample scale
    pub volume: f32,
    /// Time between frames
    pub tick_interval: Duration,
    /// Minimum time between bell cues
    pub cue_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            noise: DEFAULT_NOISE.to_string(),
            max_seconds: DEFAULT_MAX_SECONDS,
            sound: None,
            volume: DEFAULT_VOLUME,
            tick_interval: DEFAULT_TICK_INTERVAL,
            cue_interval: DEFAULT_CUE_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Merge overrides over the file over defaults, then validate
    pub fn resolve(overrides: Overrides, file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            noise: overrides.noise.or(file.noise).unwrap_or(defaults.noise),
            max_seconds: overrides.time.or(file.time).unwrap_or(defaults.max_seconds),
            sound: overrides.sound.or(file.sound),
            volume: overrides.volume.or(file.volume).unwrap_or(defaults.volume),
            tick_interval: file
                .timing
                .tick_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            cue_interval: file
                .timing
                .cue_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.cue_interval),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "volume must be a non-negative number, got {}",
                self.volume
            )));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "timing.tick_interval_ms must be greater than zero".into(),
            ));
        }
        if self.cue_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "timing.cue_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// `None` when the session never times out
    pub fn max_duration(&self) -> Option<Duration> {
        (self.max_seconds > 0).then(|| Duration::from_secs(self.max_seconds))
    }
}
