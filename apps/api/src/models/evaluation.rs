use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::question::QuestionKind;

/// Submitted answers keyed by zero-based question index.
///
/// Accepts either `{"0": "Paris", "2": "O(n)"}` or `["Paris", null, "O(n)"]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "AnswerSetRepr")]
pub struct AnswerSet(BTreeMap<usize, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerSetRepr {
    ByIndex(BTreeMap<String, Option<String>>),
    Ordered(Vec<Option<String>>),
}

impl TryFrom<AnswerSetRepr> for AnswerSet {
    type Error = String;

    fn try_from(repr: AnswerSetRepr) -> Result<Self, Self::Error> {
        let mut answers = BTreeMap::new();
        match repr {
            AnswerSetRepr::ByIndex(map) => {
                for (key, value) in map {
                    let index = key
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| format!("answer key '{key}' is not a question index"))?;
                    if let Some(answer) = value {
                        answers.insert(index, answer);
                    }
                }
            }
            AnswerSetRepr::Ordered(list) => {
                for (index, value) in list.into_iter().enumerate() {
                    if let Some(answer) = value {
                        answers.insert(index, answer);
                    }
                }
            }
        }
        Ok(AnswerSet(answers))
    }
}

impl AnswerSet {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(usize, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        AnswerSet(iter.into_iter().collect())
    }
}

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationItem {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
}

/// Score plus per-question breakdown, in question order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub score: usize,
    pub total: usize,
    pub evaluation: Vec<EvaluationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_set_from_object_keys() {
        let answers: AnswerSet = serde_json::from_str(r#"{"0": "Paris", "2": "O(n)"}"#).unwrap();
        assert_eq!(answers.get(0), Some("Paris"));
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), Some("O(n)"));
    }

    #[test]
    fn test_answer_set_from_array() {
        let answers: AnswerSet = serde_json::from_str(r#"["Paris", null, "O(n)"]"#).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(0), Some("Paris"));
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), Some("O(n)"));
    }

    #[test]
    fn test_answer_set_null_value_is_unanswered() {
        let answers: AnswerSet = serde_json::from_str(r#"{"0": null}"#).unwrap();
        assert_eq!(answers.get(0), None);
    }

    #[test]
    fn test_answer_set_rejects_non_index_key() {
        assert!(serde_json::from_str::<AnswerSet>(r#"{"first": "Paris"}"#).is_err());
    }

    #[test]
    fn test_answer_set_rejects_non_string_answer() {
        assert!(serde_json::from_str::<AnswerSet>(r#"{"0": 42}"#).is_err());
    }

    #[test]
    fn test_evaluation_item_wire_names() {
        let item = EvaluationItem {
            question: "Capital of France?".to_string(),
            kind: QuestionKind::MultipleChoice,
            user_answer: "paris".to_string(),
            correct_answer: "Paris".to_string(),
            explanation: String::new(),
            is_correct: true,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "multiple-choice");
        assert_eq!(value["userAnswer"], "paris");
        assert_eq!(value["correctAnswer"], "Paris");
        assert_eq!(value["isCorrect"], true);
    }
}
