//! Failure taxonomy of a single summarization run.
//!
//! Every stage returns one of these explicitly; the presenter decides how
//! each variant is shown.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Please enter your Groq API Key in the sidebar.")]
    MissingCredential,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide the URL to get started")]
    Empty,
    #[error("Please enter a valid URL. It can be a YT video URL or website URL")]
    Malformed,
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("No readable content found at {url}")]
    Empty { url: String },
    #[error("Could not find a video id in {0}")]
    UnsupportedVideoUrl(String),
    #[error("No transcript available for video {video_id}")]
    NoTranscript { video_id: String },
    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl PipelineError {
    /// Failures caught before any network access.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingCredential | PipelineError::Validation(_)
        )
    }
}
