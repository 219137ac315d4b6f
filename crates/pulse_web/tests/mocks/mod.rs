use std::sync::{Arc, Mutex};

use link_pulse::{
    ApiKey, InvocationError, Loader, RetrievalError, SegmentMetadata, SummaryResponse,
    Summarizer, TextSegment,
};
use url::Url;

#[derive(Clone, Default)]
pub struct CallLog(pub Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[derive(Clone)]
pub struct MockLoader {
    pub text: String,
    pub calls: CallLog,
    pub fail_with_status: Option<u16>,
}

impl MockLoader {
    pub fn new(text: &str, calls: CallLog) -> Self {
        Self {
            text: text.to_string(),
            calls,
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16, calls: CallLog) -> Self {
        Self {
            text: String::new(),
            calls,
            fail_with_status: Some(status),
        }
    }
}

impl Loader for MockLoader {
    const NAME: &'static str = "mock";

    async fn load(&self, url: &Url) -> Result<Vec<TextSegment>, RetrievalError> {
        self.calls.record(url.as_str());
        if let Some(status) = self.fail_with_status {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(vec![TextSegment::new(
            self.text.clone(),
            SegmentMetadata {
                source: url.to_string(),
                title: Some("Example Domain".into()),
                ..Default::default()
            },
        )])
    }
}

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: CallLog,
    pub fail_with: Option<(u16, String)>,
}

impl MockSummarizer {
    pub fn new(summary: &str, calls: CallLog) -> Self {
        Self {
            summary: summary.to_string(),
            calls,
            fail_with: None,
        }
    }

    pub fn failing(status: u16, msg: &str, calls: CallLog) -> Self {
        Self {
            summary: String::new(),
            calls,
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
        self.calls.record(prompt);
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
