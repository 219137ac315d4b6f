use std::future::Future;

use serde::Deserialize;

use crate::{error::InvocationError, types::ApiKey};

/// A remote model that turns one fully rendered prompt into a summary.
pub trait Summarizer {
    fn model(&self) -> &str;

    fn summarize(
        &self,
        api_key: &ApiKey,
        prompt: String,
    ) -> impl Future<Output = Result<SummaryResponse, InvocationError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
