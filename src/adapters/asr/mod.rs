//! Local ASR adapter (whisper.cpp)

pub mod audio;
pub mod whisper;

pub use whisper::{WhisperEngine, MODEL_NOT_LOADED};
