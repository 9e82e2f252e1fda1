//! Question generation pipeline: prompt → LLM → parse.
//! All LLM calls go through `ChatCompletion`; nothing here touches HTTP directly.

use tracing::info;

use crate::errors::AppError;
use crate::generation::parser::parse_questions;
use crate::generation::prompts::{
    coding_question_prompt, interview_questions_prompt, top_questions_prompt,
    BEHAVIORAL_QUESTION_PROMPT, SYSTEM_DESIGN_QUESTION_PROMPT,
};
use crate::llm_client::prompts::INTERVIEWER_SYSTEM;
use crate::llm_client::ChatCompletion;
use crate::models::question::{Difficulty, Question};

/// Generates a structured question set for a role. Either every question
/// parses or the whole call fails.
pub async fn generate_questions(
    llm: &dyn ChatCompletion,
    role: &str,
    difficulty: Difficulty,
    count: usize,
) -> Result<Vec<Question>, AppError> {
    let prompt = interview_questions_prompt(role, difficulty, count);
    let raw = llm.complete(&prompt, Some(INTERVIEWER_SYSTEM)).await?;
    let questions = parse_questions(&raw)?;

    info!(
        "Generated {} questions for role '{role}' ({difficulty})",
        questions.len()
    );
    Ok(questions)
}

/// One free-text coding question on a topic.
pub async fn generate_coding_question(
    llm: &dyn ChatCompletion,
    topic: &str,
    difficulty: Difficulty,
) -> Result<String, AppError> {
    let prompt = coding_question_prompt(topic, difficulty);
    Ok(llm.complete(&prompt, None).await?.trim().to_string())
}

pub async fn generate_behavioral_question(llm: &dyn ChatCompletion) -> Result<String, AppError> {
    Ok(llm
        .complete(BEHAVIORAL_QUESTION_PROMPT, None)
        .await?
        .trim()
        .to_string())
}

pub async fn generate_system_design_question(
    llm: &dyn ChatCompletion,
) -> Result<String, AppError> {
    Ok(llm
        .complete(SYSTEM_DESIGN_QUESTION_PROMPT, None)
        .await?
        .trim()
        .to_string())
}

/// Numbered list of the most common questions for a role, returned as text.
pub async fn generate_top_questions(
    llm: &dyn ChatCompletion,
    role: &str,
    difficulty: Difficulty,
) -> Result<String, AppError> {
    let prompt = top_questions_prompt(role, difficulty);
    Ok(llm.complete(&prompt, None).await?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned reply and records what it was asked.
    struct CannedLlm {
        reply: Result<String, u16>,
        seen: Mutex<Vec<(String, Option<String>)>>,
    }

    impl CannedLlm {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatCompletion for CannedLlm {
        async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.map(str::to_string)));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream down".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_generate_questions_parses_reply() {
        let llm = CannedLlm::ok(
            r#"Sure! [{"type": "open-ended", "content": "Why Rust?", "explanation": "Motivation"}]"#,
        );
        let questions = generate_questions(&llm, "Rust Developer", Difficulty::Easy, 1)
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].content, "Why Rust?");

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.contains("Rust Developer"));
        assert_eq!(seen[0].1.as_deref(), Some(INTERVIEWER_SYSTEM));
    }

    #[tokio::test]
    async fn test_generate_questions_without_array_is_parse_error() {
        let llm = CannedLlm::ok("I'm sorry, I can't produce that right now.");
        let err = generate_questions(&llm, "SRE", Difficulty::Hard, 15)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[tokio::test]
    async fn test_generate_questions_propagates_gateway_error() {
        let llm = CannedLlm::failing(503);
        let err = generate_questions(&llm, "SRE", Difficulty::Hard, 15)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_single_question_helpers_trim_reply() {
        let llm = CannedLlm::ok("\n  Design a URL shortener.  \n");
        let question = generate_system_design_question(&llm).await.unwrap();
        assert_eq!(question, "Design a URL shortener.");

        let question = generate_coding_question(&llm, "Trees", Difficulty::Medium)
            .await
            .unwrap();
        assert_eq!(question, "Design a URL shortener.");

        let seen = llm.seen.lock().unwrap();
        assert!(seen[1].0.contains("topic: Trees"));
        assert!(seen.iter().all(|(_, system)| system.is_none()));
    }

    #[tokio::test]
    async fn test_top_questions_and_behavioral_use_expected_prompts() {
        let llm = CannedLlm::ok("1. Tell me about yourself.");
        generate_top_questions(&llm, "PM", Difficulty::Easy).await.unwrap();
        generate_behavioral_question(&llm).await.unwrap();

        let seen = llm.seen.lock().unwrap();
        assert!(seen[0].0.contains(r#"role "PM""#));
        assert_eq!(seen[1].0, BEHAVIORAL_QUESTION_PROMPT);
    }
}
