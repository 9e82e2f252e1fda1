// Answer scoring. Pure computation, no LLM calls.

pub mod evaluator;
pub mod handlers;
