//! Response Parser: pulls the question array out of free-form LLM text.
//!
//! The model is asked for "ONLY a valid JSON array" but often wraps it in prose
//! or code fences. We slice from the first `[` to the last `]` and parse that.
//! Multiple arrays, or brackets inside surrounding prose, can still misfire.

use thiserror::Error;

use crate::models::question::Question;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON array found in response")]
    NoArray,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Returns the substring from the first `[` through the last `]`, inclusive.
pub fn extract_json_array(text: &str) -> Result<&str, ParseError> {
    match (text.find('['), text.rfind(']')) {
        (Some(first), Some(last)) if last > first => Ok(&text[first..=last]),
        _ => Err(ParseError::NoArray),
    }
}

/// Extracts and validates the question array from raw LLM output.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, ParseError> {
    let slice = extract_json_array(text)?;
    Ok(serde_json::from_str(slice)?)
}
