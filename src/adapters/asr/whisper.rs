//! Local Whisper transcription engine
//!
//! Wraps whisper.cpp via whisper-rs. Model loading happens once at
//! initialization and is fail-soft: a load failure marks the engine
//! unavailable instead of propagating. Transcription failures are per-call
//! and never poison availability.

use crate::adapters::asr::audio;
use crate::config::WhisperConfig;
use crate::domain::TranscriptResult;
use crate::error::{AppError, Result};
use crate::ports::transcription::TranscriptionPort;
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Fixed detail returned for every call on an unavailable engine
pub const MODEL_NOT_LOADED: &str = "model not loaded";

/// Local Whisper engine implementation
pub struct WhisperEngine {
    ctx: Option<WhisperContext>,
    language: Option<String>,
}

impl WhisperEngine {
    /// Load the configured ggml model.
    ///
    /// One-time, potentially slow, blocking operation. On failure (missing
    /// model file, corrupt artifact) the engine records itself unavailable;
    /// it never panics and never returns an error.
    pub fn initialize(config: &WhisperConfig) -> Self {
        let model_path = config.model_path();
        log::info!(
            "Loading Whisper model '{}' from {}",
            config.model_size,
            model_path.display()
        );

        let ctx = match Self::load_context(&model_path) {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::error!("Failed to load Whisper model: {}", e);
                None
            }
        };

        Self {
            ctx,
            language: config.language.clone(),
        }
    }

    fn load_context(model_path: &Path) -> Result<WhisperContext> {
        if !model_path.exists() {
            return Err(AppError::Whisper(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }

        let path_str = model_path
            .to_str()
            .ok_or_else(|| AppError::Whisper("invalid model path".to_string()))?;

        WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
            .map_err(|e| AppError::Whisper(format!("failed to load model: {}", e)))
    }

    /// Run greedy inference over preprocessed samples
    fn run_inference(&self, ctx: &WhisperContext, samples: &[f32]) -> Result<String> {
        let mut state = ctx
            .create_state()
            .map_err(|e| AppError::Whisper(format!("failed to create state: {}", e)))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        if let Some(ref lang) = self.language {
            params.set_language(Some(lang.as_str()));
        }
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_threads() as i32);

        state
            .full(params, samples)
            .map_err(|e| AppError::Whisper(format!("inference failed: {}", e)))?;

        // Reassemble the transcript from segment tokens; raw token text
        // carries its own leading whitespace.
        let mut text = String::new();
        let num_segments = state.full_n_segments();
        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            for tok_idx in 0..segment.n_tokens() {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };
                let token_text = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens like [_BEG_] and <|endoftext|>
                let trimmed = token_text.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                text.push_str(token_text);
            }
        }

        Ok(text.trim().to_string())
    }
}

impl TranscriptionPort for WhisperEngine {
    fn transcribe(&self, audio_path: &Path) -> TranscriptResult {
        let ctx = match &self.ctx {
            Some(ctx) => ctx,
            None => return TranscriptResult::failure(MODEL_NOT_LOADED),
        };

        log::info!("Starting transcription for {}", audio_path.display());

        let samples = match audio::load_whisper_input(audio_path) {
            Ok(samples) => samples,
            Err(e) => {
                log::warn!("Transcription failed: {}", e);
                return TranscriptResult::failure(e.to_string());
            }
        };

        match self.run_inference(ctx, &samples) {
            Ok(text) => {
                log::info!("Transcription complete ({} chars)", text.len());
                TranscriptResult::success(text)
            }
            Err(e) => {
                log::warn!("Transcription failed: {}", e);
                TranscriptResult::failure(e.to_string())
            }
        }
    }

    fn is_available(&self) -> bool {
        self.ctx.is_some()
    }
}

fn num_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(8)
}
