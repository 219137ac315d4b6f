use std::sync::{Arc, Mutex};

use link_pulse::{ApiKey, InvocationError, SummaryResponse, Summarizer};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<(u16, String)>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(status: u16, msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some((status, msg.to_string())),
        }
    }
}

impl Summarizer for MockSummarizer {
    fn model(&self) -> &str {
        "mock-gemma"
    }

    async fn summarize(
        &self,
        _api_key: &ApiKey,
        prompt: String,
    ) -> Result<SummaryResponse, InvocationError> {
        self.calls.lock().unwrap().push(prompt);
        if let Some((status, ref message)) = self.fail_with {
            return Err(InvocationError::Api {
                status,
                message: message.clone(),
            });
        }
        Ok(SummaryResponse {
            summary: self.summary.clone(),
        })
    }
}
