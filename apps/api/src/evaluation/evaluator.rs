//! Answer Evaluator: literal, normalized comparison against recorded answers.
//!
//! The same rule applies to every question type, so free-text coding and
//! open-ended answers almost never match. Semantic grading is not attempted.

use crate::models::evaluation::{AnswerSet, EvaluationItem, EvaluationReport};
use crate::models::question::Question;

/// Trim surrounding whitespace and lower-case.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

pub fn is_match(user_answer: &str, correct_answer: &str) -> bool {
    normalize(user_answer) == normalize(correct_answer)
}

/// Scores each question in order. Unanswered questions and questions without a
/// recorded answer are compared as empty strings.
pub fn evaluate(questions: &[Question], answers: &AnswerSet) -> EvaluationReport {
    let evaluation: Vec<EvaluationItem> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(index).unwrap_or_default().to_string();
            let correct_answer = question.correct_answer.clone().unwrap_or_default();
            let is_correct = is_match(&user_answer, &correct_answer);

            EvaluationItem {
                question: question.content.clone(),
                kind: question.kind(),
                user_answer,
                correct_answer,
                explanation: question.explanation.clone().unwrap_or_default(),
                is_correct,
            }
        })
        .collect();

    EvaluationReport {
        score: evaluation.iter().filter(|item| item.is_correct).count(),
        total: questions.len(),
        evaluation,
    }
}
