mod client;
mod config;
mod prompt;
mod types;

pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use prompt::build_vision_prompt;
pub use types::{GenerateContentRequest, GenerateContentResponse};
