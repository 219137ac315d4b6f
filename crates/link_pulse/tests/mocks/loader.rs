use std::sync::{Arc, Mutex};

use link_pulse::{Loader, RetrievalError, SegmentMetadata, TextSegment};
use url::Url;

#[derive(Clone)]
pub struct MockLoader {
    pub texts: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with_status: Option<u16>,
}

impl MockLoader {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            texts: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with_status: Some(status),
        }
    }
}

impl Loader for MockLoader {
    const NAME: &'static str = "mock";

    async fn load(&self, url: &Url) -> Result<Vec<TextSegment>, RetrievalError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(status) = self.fail_with_status {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(self
            .texts
            .iter()
            .map(|t| {
                TextSegment::new(
                    t.clone(),
                    SegmentMetadata {
                        source: url.to_string(),
                        title: Some("Mock Title".into()),
                        ..Default::default()
                    },
                )
            })
            .collect())
    }
}
