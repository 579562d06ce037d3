use super::config::GeminiConfig;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use vision_errors::AppError;

pub struct GeminiClient {
    http_client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// One POST, no retry. Returns the first candidate's first text part.
    pub async fn generate(&self, prompt: String) -> Result<String, AppError> {
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .http_client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GeminiError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini error: {} - {}", status, body);
            return Err(AppError::GeminiError(format!("API error: {}", status)));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.without_url().to_string()))?;

        completion
            .first_text()
            .ok_or_else(|| AppError::MalformedResponse("No candidate text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::new("test-key").with_api_base(format!("{}/v1beta", server.uri())),
        )
    }

    #[tokio::test]
    async fn test_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "Write it." }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Example vision." }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .generate("Write it.".to_string())
            .await
            .unwrap();
        assert_eq!(text, "Example vision.");
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("prompt".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GeminiError(_)));
        assert!(err.is_request_error());
    }

    #[tokio::test]
    async fn test_missing_candidates_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "promptFeedback": {} })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("prompt".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("prompt".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client.generate("prompt".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::GeminiError(_)));
        assert!(!err.to_string().contains("test-key"));
    }
}
