use crate::application::GenerateVision;
use crate::infrastructure::gemini::GeminiConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_vision: Arc<GenerateVision>,
}

impl AppContext {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            generate_vision: Arc::new(GenerateVision::new(config)),
        }
    }

    pub fn from_env() -> Self {
        let config = GeminiConfig::from_env();
        tracing::info!("Using Gemini backend: {:?}", config);
        Self::new(config)
    }
}
