//! Error types for the drill tool.
//!
//! Nothing is recovered mid-run: parsing and category resolution fail before
//! any generation starts, and synthesis/playback failures abort the session.
//! Only `main` turns an error into an exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    /// Category name not in the registry. Fatal at startup.
    #[error("unknown drill category: {0}")]
    UnknownCategory(String),

    /// The synthesis service rejected the request or returned garbage.
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    /// The synthesis request never completed (network, timeout).
    #[error("synthesis request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Local audio device or decoder failure.
    #[error("audio playback failed: {0}")]
    Playback(String),

    /// Staging the audio payload on disk failed.
    #[error("audio staging failed: {0}")]
    Io(#[from] std::io::Error),
}
