use crate::domain::{Vision, VisionRequest};
use crate::infrastructure::gemini::{build_vision_prompt, GeminiClient, GeminiConfig};
use vision_errors::AppError;

pub struct GenerateVision {
    client: GeminiClient,
}

impl GenerateVision {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config),
        }
    }

    pub async fn execute(&self, request: VisionRequest) -> Result<Vision, AppError> {
        let generation_id = uuid::Uuid::new_v4();

        if let Err(e) = request.answers.validate() {
            tracing::warn!(%generation_id, missing = ?e.missing, "Rejected incomplete answers");
            return Err(e.into());
        }

        let constraints = request.constraints.clamped();
        tracing::info!(
            %generation_id,
            model = %self.client.config().model,
            word_limit = constraints.word_limit,
            line_limit = constraints.line_limit,
            "Generating vision statement"
        );

        let prompt = build_vision_prompt(&request.answers, &constraints);
        match self.client.generate(prompt).await {
            Ok(text) => {
                tracing::info!(%generation_id, chars = text.len(), "Vision statement generated");
                Ok(Vision::new(text))
            }
            Err(e) => {
                tracing::error!(%generation_id, error = %e, "Vision generation failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Constraints, FormAnswers};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn use_case_for(server: &MockServer) -> GenerateVision {
        GenerateVision::new(GeminiConfig::new("k").with_api_base(server.uri()))
    }

    fn complete_answers() -> FormAnswers {
        FormAnswers::new(std::array::from_fn(|i| format!("answer {}", i + 1)))
    }

    #[tokio::test]
    async fn test_incomplete_answers_never_reach_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut answers = complete_answers();
        answers.set(4, "");
        let err = use_case_for(&server)
            .execute(VisionRequest::new(answers, Constraints::default()))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(v) => assert_eq!(v.missing, vec![4]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_out_of_range_limits_are_clamped_in_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("exactly 500 words"))
            .and(body_string_contains("exactly 1 lines"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "# Vision" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let raw = Constraints {
            word_limit: 10_000,
            line_limit: 0,
        };
        let vision = use_case_for(&server)
            .execute(VisionRequest::new(complete_answers(), raw))
            .await
            .unwrap();
        assert_eq!(vision.text, "# Vision");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = use_case_for(&server)
            .execute(VisionRequest::new(complete_answers(), Constraints::default()))
            .await
            .unwrap_err();
        assert!(err.is_request_error());
    }
}
