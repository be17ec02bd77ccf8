/// Transcription port trait
///
/// Defines the interface for local ASR (Automatic Speech Recognition) engines.
/// Implementations: WhisperEngine
use crate::domain::TranscriptResult;
use std::path::Path;

/// Port trait for transcription engines.
///
/// `transcribe` never panics and never returns an error across the
/// boundary: every failure is folded into the `TranscriptResult`. Takes
/// `&self` only, so a shared engine is safe for concurrent read-only use.
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe an audio file to plain text
    fn transcribe(&self, audio_path: &Path) -> TranscriptResult;

    /// Whether the underlying model loaded at initialization
    fn is_available(&self) -> bool;
}
