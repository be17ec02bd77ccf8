/// Adapter implementations of the port traits
pub mod asr;
pub mod llm;
