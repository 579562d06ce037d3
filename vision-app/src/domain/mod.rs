mod answers;
mod constraints;
mod generation;
mod theme;
mod vision;

pub use answers::{FormAnswers, QUESTIONS, QUESTION_COUNT};
pub use constraints::{
    Constraints, DEFAULT_LINE_LIMIT, DEFAULT_WORD_LIMIT, LINE_LIMIT_RANGE, WORD_LIMIT_RANGE,
};
pub use generation::{GenerationState, GenerationStatus, RequestToken};
pub use theme::{
    MemoryThemeStore, ThemePreference, ThemeSettings, ThemeStore, UnknownTheme, THEME_ATTRIBUTE,
    THEME_STORAGE_KEY,
};
pub use vision::{Vision, VisionRequest};
