//! Configuration for the summarization pipeline
//!
//! All tunables are explicit constructor arguments; there are no
//! process-wide constants for model selection.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whisper model size tier.
///
/// Larger tiers are slower but more accurate; `Base` is a reasonable
/// CPU-only default for meeting audio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WhisperModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl WhisperModelSize {
    /// ggml model file name for this tier, as distributed by whisper.cpp
    pub fn file_name(&self) -> &'static str {
        match self {
            WhisperModelSize::Tiny => "ggml-tiny.bin",
            WhisperModelSize::Base => "ggml-base.bin",
            WhisperModelSize::Small => "ggml-small.bin",
            WhisperModelSize::Medium => "ggml-medium.bin",
            WhisperModelSize::Large => "ggml-large-v3.bin",
        }
    }
}

impl std::fmt::Display for WhisperModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WhisperModelSize::Tiny => write!(f, "tiny"),
            WhisperModelSize::Base => write!(f, "base"),
            WhisperModelSize::Small => write!(f, "small"),
            WhisperModelSize::Medium => write!(f, "medium"),
            WhisperModelSize::Large => write!(f, "large"),
        }
    }
}

/// Configuration for the local transcription engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperConfig {
    /// Directory containing ggml model files
    pub model_dir: PathBuf,

    /// Model size tier to load
    pub model_size: WhisperModelSize,

    /// Language code (e.g., "en"); None lets Whisper auto-detect
    pub language: Option<String>,
}

impl WhisperConfig {
    /// Full path to the ggml model file for the configured tier
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(self.model_size.file_name())
    }
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            model_size: WhisperModelSize::Base,
            language: Some("en".to_string()),
        }
    }
}

/// Configuration for LLM requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name (e.g., "gemini-2.5-flash")
    pub model: String,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f32>,

    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            temperature: Some(0.3), // Lower temperature for more focused outputs
            max_tokens: Some(2000),
        }
    }
}

/// Top-level pipeline configuration passed to `MeetingSummarizer::initialize`
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfig {
    pub whisper: WhisperConfig,
    pub llm: LlmConfig,

    /// Gemini API key; None marks the generator unavailable
    pub api_key: Option<String>,
}

impl SummarizerConfig {
    /// Build a configuration with the API key read from `GEMINI_API_KEY`.
    ///
    /// A missing or empty variable leaves the key as None; the generator
    /// will report itself unavailable instead of failing here.
    pub fn from_env(model_dir: impl AsRef<Path>) -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            log::warn!("GEMINI_API_KEY not set; summarization will be unavailable");
        }

        Self {
            whisper: WhisperConfig {
                model_dir: model_dir.as_ref().to_path_buf(),
                ..WhisperConfig::default()
            },
            llm: LlmConfig::default(),
            api_key,
        }
    }
}
