use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const WORD_LIMIT_RANGE: RangeInclusive<u32> = 50..=500;
pub const LINE_LIMIT_RANGE: RangeInclusive<u32> = 1..=20;
pub const DEFAULT_WORD_LIMIT: u32 = 100;
pub const DEFAULT_LINE_LIMIT: u32 = 5;

/// Exact word and line counts requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub word_limit: u32,
    pub line_limit: u32,
}

impl Constraints {
    pub fn new(word_limit: u32, line_limit: u32) -> Self {
        Self::default()
            .with_word_limit(word_limit)
            .with_line_limit(line_limit)
    }

    pub fn with_word_limit(mut self, word_limit: u32) -> Self {
        self.word_limit = clamp(word_limit, &WORD_LIMIT_RANGE);
        self
    }

    pub fn with_line_limit(mut self, line_limit: u32) -> Self {
        self.line_limit = clamp(line_limit, &LINE_LIMIT_RANGE);
        self
    }

    /// Values arriving over the wire bypass the setters.
    pub fn clamped(self) -> Self {
        Self::new(self.word_limit, self.line_limit)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            line_limit: DEFAULT_LINE_LIMIT,
        }
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
