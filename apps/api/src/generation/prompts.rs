// All LLM prompt templates for question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::INTERVIEWER_PERSONA;
use crate::models::question::Difficulty;

/// Structured question-set prompt. Replace: {count}, {role}, {difficulty}
pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Generate {count} interview questions for the role of "{role}" at "{difficulty}" difficulty.
Each question should be an object with:
- type: "multiple-choice", "coding", or "open-ended"
- content: the question text
- options: array of strings (for multiple-choice only)
- correctAnswer: string (for MCQ/coding)
- explanation: string

Return ONLY a valid JSON array of {count} such objects."#;

/// Top-questions prompt. Replace: {role}, {difficulty}
pub const TOP_QUESTIONS_TEMPLATE: &str = r#"You're a senior tech recruiter and interview expert.
Give the top 15 most frequently asked and expected interview questions
for the role "{role}" at "{difficulty}" level.

The output should include a mix of:
1. Coding questions (if technical),
2. Behavioral questions,
3. Multiple-choice or conceptual questions.

Only give the questions (numbered), no answers."#;

pub const BEHAVIORAL_QUESTION_PROMPT: &str = "You're an expert tech interviewer. \
    Give me one behavioral interview question suitable for a software engineering candidate. \
    Only the question.";

pub const SYSTEM_DESIGN_QUESTION_PROMPT: &str = "You're a senior system design interviewer. \
    Give one challenging system design interview question. Only the question.";

pub fn interview_questions_prompt(role: &str, difficulty: Difficulty, count: usize) -> String {
    INTERVIEW_QUESTIONS_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{role}", role)
        .replace("{difficulty}", difficulty.as_str())
}

pub fn coding_question_prompt(topic: &str, difficulty: Difficulty) -> String {
    format!(
        "{INTERVIEWER_PERSONA} Generate a {difficulty} level coding interview question \
         on the topic: {topic}. Only include the question, no answer."
    )
}

pub fn top_questions_prompt(role: &str, difficulty: Difficulty) -> String {
    TOP_QUESTIONS_TEMPLATE
        .replace("{role}", role)
        .replace("{difficulty}", difficulty.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_prompt_embeds_role_difficulty_and_count() {
        let prompt = interview_questions_prompt("Backend Engineer", Difficulty::Hard, 15);
        assert!(prompt.starts_with("Generate 15 interview questions"));
        assert!(prompt.contains(r#"role of "Backend Engineer""#));
        assert!(prompt.contains(r#""Hard" difficulty"#));
        assert!(prompt.contains("JSON array of 15"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_interview_prompt_describes_question_shape() {
        let prompt = interview_questions_prompt("QA", Difficulty::Easy, 3);
        for field in ["type:", "content:", "options:", "correctAnswer:", "explanation:"] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_coding_prompt_embeds_topic() {
        let prompt = coding_question_prompt("Graphs", Difficulty::Medium);
        assert!(prompt.contains("Medium level coding interview question"));
        assert!(prompt.contains("topic: Graphs"));
        assert!(prompt.starts_with(INTERVIEWER_PERSONA));
    }

    #[test]
    fn test_top_questions_prompt_has_no_placeholders() {
        let prompt = top_questions_prompt("Data Scientist", Difficulty::Easy);
        assert!(prompt.contains(r#"role "Data Scientist" at "Easy" level"#));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{difficulty}"));
    }
}
