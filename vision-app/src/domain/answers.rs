use serde::{Deserialize, Serialize};
use vision_errors::ValidationError;

pub const QUESTION_COUNT: usize = 10;

pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "What are your core values?",
    "What is your mission in your industry?",
    "What do you aspire to achieve in the long term?",
    "What innovative approaches will you implement to stay ahead of the competition?",
    "How do you plan to adapt to future challenges in your industry?",
    "What impact do you want to make in your community?",
    "What sets you apart from your competitors?",
    "What are your primary business goals?",
    "How do you envision your company\u{2019}s culture?",
    "How do you plan to measure success?",
];

/// The ten free-text answers, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormAnswers {
    answers: [String; QUESTION_COUNT],
}

impl FormAnswers {
    pub fn new(answers: [String; QUESTION_COUNT]) -> Self {
        Self { answers }
    }

    /// Sets the answer for a 1-based question number. Out-of-range numbers are ignored.
    pub fn set(&mut self, question: usize, answer: impl Into<String>) {
        if let Some(slot) = question
            .checked_sub(1)
            .and_then(|idx| self.answers.get_mut(idx))
        {
            *slot = answer.into();
        }
    }

    pub fn get(&self, question: usize) -> Option<&str> {
        question
            .checked_sub(1)
            .and_then(|idx| self.answers.get(idx))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }

    /// Every answer must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<usize> = self
            .answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.trim().is_empty())
            .map(|(idx, _)| idx + 1)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }

    /// Raw answers joined by single spaces, in question order.
    pub fn joined(&self) -> String {
        self.answers.join(" ")
    }
}
