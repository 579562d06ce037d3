use super::{Constraints, FormAnswers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionRequest {
    pub answers: FormAnswers,
    pub constraints: Constraints,
}

impl VisionRequest {
    pub fn new(answers: FormAnswers, constraints: Constraints) -> Self {
        Self {
            answers,
            constraints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vision {
    pub text: String,
}

impl Vision {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}
