use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Requested difficulty for generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!(
                "Unknown difficulty '{trimmed}'. Expected one of: Easy, Medium, Hard."
            )),
        }
    }
}

/// A single interview question as produced by the LLM and echoed back by the client.
///
/// Wire shape (camelCase):
/// `{ "type": "multiple-choice", "content": "...", "options": [...], "correctAnswer": "...", "explanation": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub format: QuestionFormat,
}

/// Per-type payload, tagged by the `type` field.
///
/// Multiple-choice questions are expected to carry options; an absent list
/// deserializes as empty rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionFormat {
    #[serde(alias = "multiple_choice", alias = "mcq")]
    MultipleChoice {
        #[serde(default)]
        options: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Coding {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        starter_code: Option<String>,
    },
    #[serde(alias = "open_ended")]
    OpenEnded,
}

/// The bare question type, used where the payload is not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    Coding,
    OpenEnded,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self.format {
            QuestionFormat::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionFormat::Coding { .. } => QuestionKind::Coding,
            QuestionFormat::OpenEnded => QuestionKind::OpenEnded,
        }
    }
}
