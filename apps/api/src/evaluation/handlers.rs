//! Axum route handler for answer evaluation.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::evaluator::evaluate;
use crate::models::evaluation::{AnswerSet, EvaluationReport};
use crate::models::question::Question;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub questions: Option<Vec<Question>>,
    pub answers: Option<AnswerSet>,
}

/// POST /api/evaluate
///
/// Stateless: the client sends back the questions it was given along with
/// its answers.
pub async fn handle_evaluate(
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationReport>, AppError> {
    let Json(request) = body?;
    let (Some(questions), Some(answers)) = (request.questions, request.answers) else {
        return Err(AppError::Validation(
            "Missing questions or answers.".to_string(),
        ));
    };

    let report = evaluate(&questions, &answers);
    info!(
        "Evaluated {} questions ({} answers received): {}/{} correct",
        report.total,
        answers.len(),
        report.score,
        report.total
    );

    Ok(Json(report))
}
