//! Axum route handlers for the question generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{
    generate_behavioral_question, generate_coding_question, generate_questions,
    generate_system_design_question, generate_top_questions,
};
use crate::models::question::{Difficulty, Question};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body for role- or topic-based generation. Fields are optional so that a
/// missing value produces our own 400 instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct SubjectRequest {
    pub role: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

impl SubjectRequest {
    /// `role`, falling back to `topic` when role is absent or blank.
    fn role_or_topic(self) -> (Option<String>, Option<String>) {
        (first_present(self.role, self.topic), self.difficulty)
    }

    /// `topic`, falling back to `role` when topic is absent or blank.
    fn topic_or_role(self) -> (Option<String>, Option<String>) {
        (first_present(self.topic, self.role), self.difficulty)
    }
}

fn first_present(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred.filter(|s| !s.trim().is_empty()).or(fallback)
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct SingleQuestionResponse {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct TopQuestionsResponse {
    pub questions: String,
}

/// Checks both fields are present and non-blank, then parses the difficulty.
fn require_subject_and_difficulty(
    subject: Option<String>,
    difficulty: Option<String>,
    missing_message: &str,
) -> Result<(String, Difficulty), AppError> {
    let subject = subject.map(|s| s.trim().to_string()).unwrap_or_default();
    let difficulty = difficulty.unwrap_or_default();
    if subject.is_empty() || difficulty.trim().is_empty() {
        return Err(AppError::Validation(missing_message.to_string()));
    }
    let difficulty = difficulty.parse::<Difficulty>().map_err(AppError::Validation)?;
    Ok((subject, difficulty))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interview-questions
///
/// Generates a structured question set for a role. Validation happens before
/// any outbound call.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    body: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Json(request) = body?;
    let (role, difficulty) = request.role_or_topic();
    let (role, difficulty) = require_subject_and_difficulty(
        role,
        difficulty,
        "Missing role or difficulty.",
    )?;

    let questions = generate_questions(
        state.llm.as_ref(),
        &role,
        difficulty,
        state.config.question_count,
    )
    .await?;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/question
///
/// One free-text coding question on a topic.
pub async fn handle_coding_question(
    State(state): State<AppState>,
    body: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Json<SingleQuestionResponse>, AppError> {
    let Json(request) = body?;
    let (topic, difficulty) = request.topic_or_role();
    let (topic, difficulty) = require_subject_and_difficulty(
        topic,
        difficulty,
        "Missing topic or difficulty.",
    )?;

    let question = generate_coding_question(state.llm.as_ref(), &topic, difficulty).await?;
    Ok(Json(SingleQuestionResponse { question }))
}

/// GET /api/question/behavioral
pub async fn handle_behavioral_question(
    State(state): State<AppState>,
) -> Result<Json<SingleQuestionResponse>, AppError> {
    let question = generate_behavioral_question(state.llm.as_ref()).await?;
    Ok(Json(SingleQuestionResponse { question }))
}

/// GET /api/question/system-design
pub async fn handle_system_design_question(
    State(state): State<AppState>,
) -> Result<Json<SingleQuestionResponse>, AppError> {
    let question = generate_system_design_question(state.llm.as_ref()).await?;
    Ok(Json(SingleQuestionResponse { question }))
}

/// POST /api/top-questions
///
/// Returns the model's numbered list verbatim; it is not parsed.
pub async fn handle_top_questions(
    State(state): State<AppState>,
    body: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Json<TopQuestionsResponse>, AppError> {
    let Json(request) = body?;
    let (role, difficulty) = request.role_or_topic();
    let (role, difficulty) = require_subject_and_difficulty(
        role,
        difficulty,
        "Missing role or difficulty.",
    )?;

    let questions = generate_top_questions(state.llm.as_ref(), &role, difficulty).await?;
    Ok(Json(TopQuestionsResponse { questions }))
}
