//! speak-spelling-rs: spoken-language listening drills.
//!
//! Generates short practice items (phone numbers, surnames, numbers, dates),
//! converts each one to SSML, synthesizes it through a remote speech service
//! and plays the audio sequentially.

mod config;
mod error;
mod generator;
mod player;
mod session;
mod synthesizer;

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::DrillError;
use crate::generator::Category;
use crate::session::{SessionConfig, SpeechPipeline};
use crate::synthesizer::SpeechSynthesizer;

#[derive(Parser, Debug)]
#[command(
    name = "speak-spelling-rs",
    about = "Speaks synthetic practice items for listening drills",
    override_usage = "speak-spelling-rs -type (phone|digit|name) -s (true|false) -c <repeat_count>"
)]
struct Args {
    /// Drill category: phone, name, number or date
    #[arg(short = 't', long = "type", value_parser = parse_category)]
    category: Category,

    /// Slow speech flag; any non-empty value counts as true
    #[arg(short = 's', long = "slow", value_parser = parse_slow, default_value = "")]
    slow: bool,

    /// How many items to generate and speak
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    count: u32,

    /// Path to config YAML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random source (system entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::resolve(value).map_err(|e| e.to_string())
}

fn parse_slow(value: &str) -> Result<bool, String> {
    Ok(!value.is_empty())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(args).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), DrillError> {
    let config = config::Config::load(args.config.as_deref());

    let session = SessionConfig {
        category: args.category,
        slow: args.slow,
        count: args.count,
    };
    info!(
        "drill session: {:?} x{} (voice: {})",
        session.category, session.count, config.synthesis.voice
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let synthesizer = SpeechSynthesizer::new(config.synthesis.clone())?;
    let speaker = SpeechPipeline::new(synthesizer, config.playback.clone());

    session::run(&session, &mut rng, &speaker).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_flag_is_true_for_any_non_empty_value() {
        assert!(!parse_slow("").unwrap());
        assert!(parse_slow("true").unwrap());
        // "false" is still a non-empty string and therefore counts as true.
        assert!(parse_slow("false").unwrap());
    }

    #[test]
    fn cli_parses_a_full_invocation() {
        let args = Args::parse_from(["speak-spelling-rs", "-t", "number", "-c", "3"]);
        assert_eq!(args.category, Category::Number);
        assert_eq!(args.count, 3);
        assert!(!args.slow);
    }

    #[test]
    fn cli_rejects_unknown_category_and_negative_count() {
        assert!(Args::try_parse_from(["speak-spelling-rs", "-t", "digit"]).is_err());
        assert!(Args::try_parse_from(["speak-spelling-rs", "-t", "number", "-c", "-1"]).is_err());
    }

    #[test]
    fn cli_requires_a_category() {
        assert!(Args::try_parse_from(["speak-spelling-rs", "-c", "2"]).is_err());
    }
}
