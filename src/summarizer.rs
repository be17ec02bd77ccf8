//! Meeting summarization orchestrator
//!
//! Owns both engine lifecycles and drives one linear run: transcribe, then
//! generate minutes only when transcription produced usable text. Each
//! stage's failures stay in their own domain; a failed stage ends the run
//! with a typed outcome instead of a fault.

use crate::adapters::asr::WhisperEngine;
use crate::adapters::llm::GeminiService;
use crate::config::SummarizerConfig;
use crate::domain::RunOutcome;
use crate::ports::{MinutesGeneratorPort, TranscriptionPort};
use std::path::Path;
use std::sync::Arc;

/// Detail reported when transcription succeeds but yields no text
pub const EMPTY_TRANSCRIPT: &str = "transcription produced no text";

/// Two-stage audio-to-minutes pipeline.
///
/// Engines are initialized once (fail-soft) and frozen; `run` takes `&self`
/// throughout, so one summarizer behind an `Arc` can serve independent runs
/// concurrently. No retries, no caching.
pub struct MeetingSummarizer {
    transcriber: Arc<dyn TranscriptionPort>,
    generator: Arc<dyn MinutesGeneratorPort>,
}

impl MeetingSummarizer {
    /// Initialize both engines from configuration.
    ///
    /// An engine that fails to initialize is marked unavailable and reports
    /// per-call failures; it never prevents construction.
    pub fn initialize(config: &SummarizerConfig) -> Self {
        let transcriber = WhisperEngine::initialize(&config.whisper);
        if !transcriber.is_available() {
            log::warn!("Transcription engine unavailable; runs will fail at transcription");
        }

        let generator = GeminiService::initialize(config.api_key.clone(), config.llm.clone());

        Self {
            transcriber: Arc::new(transcriber),
            generator: Arc::new(generator),
        }
    }

    /// Build a summarizer from already-constructed engines
    pub fn with_ports(
        transcriber: Arc<dyn TranscriptionPort>,
        generator: Arc<dyn MinutesGeneratorPort>,
    ) -> Self {
        Self {
            transcriber,
            generator,
        }
    }

    /// Whether the transcription engine initialized successfully
    pub fn transcription_available(&self) -> bool {
        self.transcriber.is_available()
    }

    /// Whether the minutes generator initialized successfully
    pub fn summarization_available(&self) -> bool {
        self.generator.is_available()
    }

    /// Run the full pipeline for one audio file.
    ///
    /// Summarization is never attempted after a transcription failure or an
    /// empty transcript.
    pub async fn run(&self, audio_path: &Path) -> RunOutcome {
        let transcript = self.transcriber.transcribe(audio_path);

        if !transcript.ok {
            let detail = transcript
                .error_detail
                .unwrap_or_else(|| "transcription failed".to_string());
            log::warn!("Run failed at transcription: {}", detail);
            return RunOutcome::TranscriptionFailed { detail };
        }

        if transcript.text.trim().is_empty() {
            log::warn!("Run failed at transcription: {}", EMPTY_TRANSCRIPT);
            return RunOutcome::TranscriptionFailed {
                detail: EMPTY_TRANSCRIPT.to_string(),
            };
        }

        match self.generator.generate_minutes(&transcript.text).await {
            Ok(minutes) => RunOutcome::Done {
                transcript: transcript.text,
                minutes,
            },
            Err(error) => {
                log::warn!("Run failed at summarization: {}", error);
                RunOutcome::SummaryFailed {
                    transcript: transcript.text,
                    error,
                }
            }
        }
    }
}
