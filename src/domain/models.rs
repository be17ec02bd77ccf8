/// Domain models for Minute Scribe
///
/// These models represent core business entities and are provider-agnostic.
use serde::{Deserialize, Serialize};

/// Sentinel owner for action items with nobody named in the transcript
pub const UNASSIGNED_OWNER: &str = "TBD";

/// Result of a single transcription call.
///
/// Immutable once produced; one per audio input. `ok=false` results must
/// never be fed into summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Full transcript text (empty on failure)
    pub text: String,

    /// Whether transcription succeeded
    pub ok: bool,

    /// Underlying error message, verbatim, when `ok` is false
    pub error_detail: Option<String>,
}

impl TranscriptResult {
    /// Creates a successful transcript
    pub fn success(text: String) -> Self {
        Self {
            text,
            ok: true,
            error_detail: None,
        }
    }

    /// Creates a failed transcript carrying the underlying error message
    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            ok: false,
            error_detail: Some(detail.into()),
        }
    }
}

/// Structured meeting minutes extracted from a transcript.
///
/// Decisions and action items keep the order the model emitted them in;
/// that order is chronological/priority order within the meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingMinutes {
    /// Narrative summary of the whole meeting
    pub summary: String,

    /// Finalized decisions, in meeting order
    pub key_decisions: Vec<String>,

    /// Assigned tasks, each naming an owner or the "TBD" sentinel
    pub action_items: Vec<String>,
}

/// Wire shape of the minutes payload returned by the model.
///
/// Accepts `decisions` as an alias for `key_decisions` so downstream
/// consumers of either spelling interoperate. Action items may arrive as
/// plain strings or as `{task, owner}` objects; both are normalized.
#[derive(Debug, Deserialize)]
pub struct MinutesPayload {
    pub summary: String,

    #[serde(alias = "decisions")]
    pub key_decisions: Vec<String>,

    pub action_items: Vec<ActionItemPayload>,
}

/// One action item as emitted by the model
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActionItemPayload {
    /// Structured form: explicit task with an optional owner
    Structured {
        task: String,
        #[serde(default)]
        owner: Option<String>,
    },

    /// Free-form "Owner: task" string, passed through as-is
    Text(String),
}

impl ActionItemPayload {
    /// Render as an "owner: task" line, defaulting a missing owner to "TBD"
    pub fn into_line(self) -> String {
        match self {
            ActionItemPayload::Text(line) => line,
            ActionItemPayload::Structured { task, owner } => {
                let owner = owner
                    .filter(|o| !o.trim().is_empty())
                    .unwrap_or_else(|| UNASSIGNED_OWNER.to_string());
                format!("{}: {}", owner, task)
            }
        }
    }
}

impl From<MinutesPayload> for MeetingMinutes {
    fn from(payload: MinutesPayload) -> Self {
        Self {
            summary: payload.summary,
            key_decisions: payload.key_decisions,
            action_items: payload
                .action_items
                .into_iter()
                .map(ActionItemPayload::into_line)
                .collect(),
        }
    }
}

/// Final result of one orchestrated run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Transcription failed; summarization was never attempted
    TranscriptionFailed { detail: String },

    /// Transcription succeeded but minutes generation failed
    SummaryFailed {
        transcript: String,
        error: crate::error::SummaryError,
    },

    /// Both stages succeeded
    Done {
        transcript: String,
        minutes: MeetingMinutes,
    },
}

impl RunOutcome {
    /// Whether the run completed both stages
    pub fn is_done(&self) -> bool {
        matches!(self, RunOutcome::Done { .. })
    }
}
