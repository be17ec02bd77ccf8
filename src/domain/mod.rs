//! Domain models and prompt templates
//!
//! Platform-agnostic business entities; no adapter types leak in here.

pub mod models;
pub mod prompts;

pub use models::{
    ActionItemPayload, MeetingMinutes, MinutesPayload, RunOutcome, TranscriptResult,
    UNASSIGNED_OWNER,
};
pub use prompts::PromptTemplates;
