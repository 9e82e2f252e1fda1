// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System message sent with structured question generation.
pub const INTERVIEWER_SYSTEM: &str = "You are an expert technical interviewer.";

/// Persona prefix for single free-text question prompts.
pub const INTERVIEWER_PERSONA: &str = "You're an expert tech interviewer.";
