//! spnoiser Entry Point
//!
//! Usage:
//!   spnoiser [OPTIONS]
//!
//! Options:
//!   -n, --noise <TEXT>      Noise text (default: beep)
//!   -t, --time <SECONDS>    Max noising time, 0 = forever (default: 60)
//!   -s, --sound <PATH>      Audio file to loop instead of the bell
//!   -v, --volume <FLOAT>    Volume for the audio file (default: 1.0)
//!
//! Exit codes: 0 on ESC / time-out / interrupt, 2 on bad arguments or
//! configuration, 1 on anything else.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::Notify;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spnoiser_tui::audio;
use spnoiser_tui::backend::{restore_terminal, CrosstermTerminal};
use spnoiser_tui::config::{ConfigFile, Overrides, SessionConfig};
use spnoiser_tui::logging::LogGate;
use spnoiser_tui::App;

/// Upper bound on waiting for leftover blocking work (audio) at exit
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// SPNoiser: Run to annoy the user
#[derive(Parser, Debug)]
#[command(name = "spnoiser")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Annoying text [default: beep]
    #[arg(short = 'n', long, env = "SPNOISER_NOISE", value_name = "TEXT")]
    noise: Option<String>,

    /// Max annoying time in seconds, 0 for no limit [default: 60]
    #[arg(short = 't', long, env = "SPNOISER_TIME", value_name = "SECONDS")]
    time: Option<u64>,

    /// Audio file to loop (WAV recommended). Without it the terminal bell is used
    #[arg(short = 's', long, env = "SPNOISER_SOUND", value_name = "PATH")]
    sound: Option<PathBuf>,

    /// Volume for the audio file playback [default: 1.0]
    #[arg(short = 'v', long, env = "SPNOISER_VOLUME", value_name = "FLOAT")]
    volume: Option<f32>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "SPNOISER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "SPNOISER_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "SPNOISER_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            noise: self.noise.clone(),
            time: self.time,
            sound: self.sound.clone(),
            volume: self.volume,
        }
    }
}

/// Initialize logging with the specified level.
///
/// Stderr output goes through the returned gate so it can be muted while the
/// alternate screen is up; a log file is never muted.
fn init_logging(level: &str, log_file: Option<&PathBuf>) -> Result<LogGate> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("spnoiser={level},spnoiser_tui={level}"))
    });

    let gate = LogGate::new();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {path:?}"))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(gate.wrap(io::stderr)).init(),
    }

    Ok(gate)
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };
    Ok(SessionConfig::resolve(args.overrides(), file)?)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version land here too
            let code = if err.use_stderr() { 2 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let log_gate = match init_logging(&args.log_level, args.log_file.as_ref()) {
        Ok(gate) => gate,
        Err(err) => {
            eprintln!("Error in arguments: {err:#}");
            return ExitCode::from(2);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error in configuration: {err:#}");
            return ExitCode::from(2);
        }
    };

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: spnoiser requires a terminal (TTY)");
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };
    let result = runtime.block_on(run(config, log_gate));
    // don't hang on an audio clip that ignored the stop request
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error:\n{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: SessionConfig, log_gate: LogGate) -> Result<()> {
    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let interrupt = Arc::new(Notify::new());
    {
        let interrupt = Arc::clone(&interrupt);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.notify_one();
            }
        });
    }

    let terminal = CrosstermTerminal::enter().context("Failed to initialise terminal")?;
    let mut app = App::new(terminal, config, audio::default_player()).with_interrupt(interrupt);

    log_gate.mute();
    let result = app.run().await;
    log_gate.unmute();
    let reason = result?;

    info!(?reason, frames = app.frames(), cues = app.cues(), "exiting");
    Ok(())
}
