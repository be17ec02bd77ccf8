//! Mock implementations for testing

use crate::domain::{MeetingMinutes, TranscriptResult};
use crate::error::SummaryError;
use crate::ports::llm::MinutesGeneratorPort;
use crate::ports::transcription::TranscriptionPort;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted transcriber: returns a fixed result and counts calls
pub struct MockTranscriber {
    result: TranscriptResult,
    available: bool,
    calls: AtomicUsize,
}

impl MockTranscriber {
    pub fn returning(result: TranscriptResult) -> Self {
        Self {
            result,
            available: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            result: TranscriptResult::failure("model not loaded"),
            available: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranscriptionPort for MockTranscriber {
    fn transcribe(&self, _audio_path: &Path) -> TranscriptResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Scripted minutes generator: pops queued responses and counts calls
pub struct MockMinutesGenerator {
    responses: Mutex<Vec<Result<MeetingMinutes, SummaryError>>>,
    available: bool,
    calls: AtomicUsize,
    last_transcript: Mutex<Option<String>>,
}

impl MockMinutesGenerator {
    pub fn returning(response: Result<MeetingMinutes, SummaryError>) -> Self {
        Self {
            responses: Mutex::new(vec![response]),
            available: true,
            calls: AtomicUsize::new(0),
            last_transcript: Mutex::new(None),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            available: false,
            calls: AtomicUsize::new(0),
            last_transcript: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Transcript passed to the most recent call, if any
    pub fn last_transcript(&self) -> Option<String> {
        self.last_transcript.lock().unwrap().clone()
    }
}

#[async_trait]
impl MinutesGeneratorPort for MockMinutesGenerator {
    async fn generate_minutes(&self, transcript: &str) -> Result<MeetingMinutes, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_transcript.lock().unwrap() = Some(transcript.to_string());

        if !self.available {
            return Err(SummaryError::Unavailable);
        }

        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(SummaryError::Unexpected("mock exhausted".to_string())))
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
