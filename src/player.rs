//! Audio staging and playback.
//!
//! The downloaded payload is staged at a deterministic path, played to
//! completion through rodio, and removed again. Removal happens on every
//! exit path, including decoder and device failures.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::error::DrillError;

/// Staged audio payload on disk, removed on drop.
pub struct StagedAudio {
    path: PathBuf,
}

impl StagedAudio {
    pub fn write(path: &Path, audio: &[u8]) -> Result<Self, DrillError> {
        fs::write(path, audio)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Stage `audio` at `path` and play it synchronously to completion.
///
/// Blocking; the session driver runs this through `spawn_blocking`.
pub fn play_staged(path: &Path, audio: &[u8]) -> Result<(), DrillError> {
    let staged = StagedAudio::write(path, audio)?;

    let stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| DrillError::Playback(format!("failed to open audio output: {e}")))?;
    let sink = Sink::connect_new(stream.mixer());

    let file = File::open(staged.path())?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| DrillError::Playback(format!("failed to decode audio: {e}")))?;

    sink.append(source);
    sink.sleep_until_end();

    debug!("playback finished: {}", staged.path().display());
    Ok(())
}
