use serde::{Deserialize, Serialize};

/// Required answers left empty at submit time.
///
/// `missing` holds 1-based question numbers in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Required answers missing for questions {missing:?}")]
pub struct ValidationError {
    pub missing: Vec<usize>,
}

impl ValidationError {
    pub fn new(missing: Vec<usize>) -> Self {
        Self { missing }
    }

    pub fn is_missing(&self, question: usize) -> bool {
        self.missing.contains(&question)
    }
}
