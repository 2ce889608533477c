//! Session driver: builds the drill sequence and plays it item by item.
//!
//! Start → Resolved → Generating → Playing(0) → … → Done. Strictly
//! sequential: each item's playback completes before the next begins, and
//! the first failure ends the run.

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use crate::config::PlaybackConfig;
use crate::error::DrillError;
use crate::generator::{Category, DrillItem};
use crate::player;
use crate::synthesizer::SpeechSynthesizer;

/// Parameters for one end-to-end run, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub category: Category,
    pub slow: bool,
    pub count: u32,
}

/// Speaks one item's markup to completion.
#[async_trait]
pub trait Speaker {
    async fn speak(&self, markup: &str) -> Result<(), DrillError>;
}

/// Production speaker: remote synthesis, then staged local playback.
pub struct SpeechPipeline {
    synthesizer: SpeechSynthesizer,
    playback: PlaybackConfig,
}

impl SpeechPipeline {
    pub fn new(synthesizer: SpeechSynthesizer, playback: PlaybackConfig) -> Self {
        Self {
            synthesizer,
            playback,
        }
    }
}

#[async_trait]
impl Speaker for SpeechPipeline {
    async fn speak(&self, markup: &str) -> Result<(), DrillError> {
        let audio = self.synthesizer.synthesize(markup).await?;
        let path = self.playback.staging_path();
        tokio::task::spawn_blocking(move || player::play_staged(&path, &audio))
            .await
            .map_err(|e| DrillError::Playback(format!("playback task failed: {e}")))?
    }
}

/// Invoke the category's generator exactly `count` times, in call order.
pub fn build_sequence<R: Rng>(config: &SessionConfig, rng: &mut R) -> Vec<DrillItem> {
    (0..config.count)
        .map(|_| config.category.generate(config.slow, rng))
        .collect()
}

/// Run one drill session: print each item, then speak it.
pub async fn run<R, S>(config: &SessionConfig, rng: &mut R, speaker: &S) -> Result<(), DrillError>
where
    R: Rng,
    S: Speaker,
{
    let items = build_sequence(config, rng);
    info!(
        "generated {} item(s) for category {:?}",
        items.len(),
        config.category
    );

    for (i, item) in items.iter().enumerate() {
        println!("{i}) {}", item.text);
        speaker.speak(&item.markup).await?;
    }

    Ok(())
}
