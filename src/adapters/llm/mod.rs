//! LLM service adapters

pub mod gemini;

pub use gemini::{parse_minutes, GeminiService};
