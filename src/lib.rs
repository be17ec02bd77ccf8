//! Minute Scribe: automated meeting minutes from recorded audio.
//!
//! Two-stage pipeline with independent failure domains:
//!
//! 1. local Whisper transcription (whisper.cpp via whisper-rs), and
//! 2. structured minutes generation via the Gemini API with JSON-enforced
//!    output (summary, key decisions, action items).
//!
//! ```no_run
//! use minute_scribe::{MeetingSummarizer, SummarizerConfig};
//! use std::path::Path;
//!
//! # async fn demo() {
//! let config = SummarizerConfig::from_env("models");
//! let summarizer = MeetingSummarizer::initialize(&config);
//! let outcome = summarizer.run(Path::new("data/meeting_audio.mp3")).await;
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod summarizer;

pub use adapters::asr::WhisperEngine;
pub use adapters::llm::GeminiService;
pub use config::{LlmConfig, SummarizerConfig, WhisperConfig, WhisperModelSize};
pub use domain::{MeetingMinutes, RunOutcome, TranscriptResult};
pub use error::{AppError, SummaryError};
pub use summarizer::MeetingSummarizer;
