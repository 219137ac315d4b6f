use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::InvocationError,
    llm::summarizer::{SummaryResponse, Summarizer},
    types::ApiKey,
};

/// Chat completion client for Groq's OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
    pub const DEFAULT_MODEL: &str = "gemma-7b-it";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[tracing::instrument(skip(self, api_key, user_content), fields(model = %self.model))]
    pub async fn send_completion_request(
        &self,
        api_key: &ApiKey,
        user_content: String,
    ) -> Result<CompletionResponse, InvocationError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": 0.7,
            "messages": [
                {
                    "role": "user",
                    "content": user_content
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key.expose())
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(InvocationError::Api {
                status,
                message: api_error_message(&message),
            });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, falling back
/// to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for GroqClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn summarize(
        &self,
        api_key: &ApiKey,
        prompt: String,
    ) -> Result<SummaryResponse, InvocationError> {
        let response = self
            .send_completion_request(api_key, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(InvocationError::EmptyCompletion)?;

        Ok(SummaryResponse { summary })
    }
}
