//! Prompt templates for minutes generation
//!
//! The minutes template is the binding prompt contract with the model: it
//! demands exactly the three payload keys the parser expects.

/// Default prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Get the minutes extraction prompt
    ///
    /// Contains a `{transcript}` placeholder; the transcript is embedded
    /// verbatim, never paraphrased.
    pub fn minutes() -> &'static str {
        r#"Analyze the following meeting transcript. Your output must be in JSON format
with three top-level keys: 'summary', 'key_decisions', and 'action_items'.

1. 'summary': A concise paragraph summarizing the entire meeting.
2. 'key_decisions': A list of all finalized decisions made in the meeting.
3. 'action_items': A list of all tasks assigned, clearly stating the task
   and the person responsible (if mentioned), or 'TBD' if not.

TRANSCRIPT:
---
{transcript}
---"#
    }

    /// Render the minutes prompt for a transcript
    pub fn render_minutes(transcript: &str) -> String {
        Self::minutes().replace("{transcript}", transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_template_names_all_keys() {
        let prompt = PromptTemplates::minutes();
        assert!(prompt.contains("{transcript}"));
        assert!(prompt.contains("'summary'"));
        assert!(prompt.contains("'key_decisions'"));
        assert!(prompt.contains("'action_items'"));
        assert!(prompt.contains("'TBD'"));
    }

    #[test]
    fn test_render_embeds_transcript_verbatim() {
        let rendered = PromptTemplates::render_minutes("We decided to launch Friday.");
        assert!(rendered.contains("We decided to launch Friday."));
        assert!(!rendered.contains("{transcript}"));
    }
}
