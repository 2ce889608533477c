//! Configuration for the synthesis and playback collaborators.
//!
//! Loads config from YAML files in standard locations; every field has a
//! default so a missing or partial file still gives a working setup.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Remote speech-synthesis service parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub endpoint: String,
    pub engine: String,
    pub language: String,
    pub voice: String,
    pub output_format: String,
    pub timeout_ms: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://polly.eu-central-1.amazonaws.com".into(),
            engine: "standard".into(),
            language: "en-GB".into(),
            voice: "Brian".into(),
            output_format: "mp3".into(),
            timeout_ms: 30_000,
        }
    }
}

/// Local playback staging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// File name for the staged audio payload, created under the OS temp
    /// directory and overwritten per item.
    pub staging_file: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            staging_file: "speak-spelling.mp3".into(),
        }
    }
}

impl PlaybackConfig {
    pub fn staging_path(&self) -> PathBuf {
        std::env::temp_dir().join(&self.staging_file)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub synthesis: SynthesisConfig,
    pub playback: PlaybackConfig,
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./speak-spelling.yaml
    /// 2. ~/.config/speak-spelling/config.yaml
    /// 3. /etc/speak-spelling/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir()
                    .ok()
                    .map(|d| d.join("speak-spelling.yaml")),
                dirs::home_dir().map(|h| h.join(".config/speak-spelling/config.yaml")),
                Some(PathBuf::from("/etc/speak-spelling/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}: {e}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }
}
