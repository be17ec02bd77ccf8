//! Demo driver: transcribe one audio file and print its minutes.
//!
//! Usage: `minute-scribe <audio-file> [model-dir]`
//!
//! Reads `GEMINI_API_KEY` from the environment (a `.env` file is honored).

use anyhow::{bail, Result};
use minute_scribe::{MeetingSummarizer, RunOutcome, SummarizerConfig};
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let audio_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: minute-scribe <audio-file> [model-dir]"),
    };
    let model_dir = args.next().unwrap_or_else(|| "models".to_string());

    if !audio_path.exists() {
        bail!("audio file not found: {}", audio_path.display());
    }

    let config = SummarizerConfig::from_env(Path::new(&model_dir));
    let summarizer = MeetingSummarizer::initialize(&config);

    match summarizer.run(&audio_path).await {
        RunOutcome::TranscriptionFailed { detail } => {
            bail!("transcription failed: {}", detail);
        }
        RunOutcome::SummaryFailed { transcript, error } => {
            println!("--- Full Transcript ---\n{}\n", transcript);
            bail!("summarization failed: {}", error);
        }
        RunOutcome::Done {
            transcript,
            minutes,
        } => {
            println!("--- Full Transcript ---\n{}\n", transcript);

            println!("## Summary\n{}\n", minutes.summary);

            println!("## Key Decisions");
            for decision in &minutes.key_decisions {
                println!("- {}", decision);
            }

            println!("\n## Action Items");
            for item in &minutes.action_items {
                println!("- {}", item);
            }
        }
    }

    Ok(())
}
