//! rodio-backed player

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::{AudioPlayer, PlaybackError, PlaybackSlot};

/// Plays clips on the default output device.
///
/// The output stream is opened on the calling thread for every clip, since
/// it cannot move between threads; only the sink is shared so `stop` can
/// reach it. A stop that arrives while the device is still opening cuts the
/// clip as soon as its sink exists.
#[derive(Default)]
pub struct RodioPlayer {
    current: PlaybackSlot<Arc<Sink>>,
}

impl RodioPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioPlayer for RodioPlayer {
    fn play_to_end(&self, path: &Path, volume: f32) -> Result<(), PlaybackError> {
        if self.current.is_stopped() {
            return Ok(());
        }
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|err| PlaybackError::Decode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let (_stream, handle) =
            OutputStream::try_default().map_err(|err| PlaybackError::Device(err.to_string()))?;
        let sink = Arc::new(Sink::try_new(&handle).map_err(|err| PlaybackError::Device(err.to_string()))?);
        sink.append(source.amplify(volume));

        if let Err(sink) = self.current.register(Arc::clone(&sink)) {
            sink.stop();
            return Ok(());
        }
        sink.sleep_until_end();
        self.current.release();
        Ok(())
    }

    fn stop(&self) {
        if let Some(sink) = self.current.stop() {
            sink.stop();
        }
    }
}
