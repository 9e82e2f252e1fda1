// Question generation: prompt building, LLM call, response parsing.
// All LLM calls go through llm_client; nothing here talks to the provider directly.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
