use std::fmt;

use serde::Serialize;
use url::Url;

use crate::ContentSource;

/// User supplied model API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for keys that are blank after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| ApiKey(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// A request that passed validation and may touch the network.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub api_key: ApiKey,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentMetadata {
    pub source: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub view_count: Option<u64>,
    pub length_seconds: Option<u64>,
}

/// One piece of extracted text, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub metadata: SegmentMetadata,
}

impl TextSegment {
    pub fn new(text: impl Into<String>, metadata: SegmentMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub source: ContentSource,
    pub source_text: String,
    pub title: Option<String>,
    pub summary: String,
}
