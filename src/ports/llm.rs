/// Minutes generator port trait
///
/// Defines the interface for LLM-backed minutes generation.
/// Implementations: GeminiService
use crate::domain::MeetingMinutes;
use crate::error::SummaryError;
use async_trait::async_trait;

/// Port trait for minutes generators.
///
/// A generator is either available (credential supplied at initialization)
/// or permanently unavailable for the process lifetime; `generate_minutes`
/// on an unavailable generator returns `SummaryError::Unavailable` without
/// touching the network.
#[async_trait]
pub trait MinutesGeneratorPort: Send + Sync {
    /// Generate structured minutes from a transcript
    async fn generate_minutes(&self, transcript: &str) -> Result<MeetingMinutes, SummaryError>;

    /// Check if the service is configured (has API key)
    fn is_available(&self) -> bool;
}
