pub mod builder;

use crate::{
    error::PipelineError,
    llm::{chain::StuffChain, summarizer::Summarizer},
    loader::{ContentSource, Loader},
    types::{SummaryRequest, SummaryResult, TextSegment},
    validate::validate,
};

/// Single-shot URL summarization: validate, load, stuff, summarize.
///
/// Holds no state between runs; every call fetches its content afresh.
#[derive(Debug)]
pub struct SummaryPipeline<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    video_loader: V,
    page_loader: P,
    summarizer: S,
    chain: StuffChain,
}

impl<V, P, S> SummaryPipeline<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn new(video_loader: V, page_loader: P, summarizer: S, chain: StuffChain) -> Self {
        SummaryPipeline {
            video_loader,
            page_loader,
            summarizer,
            chain,
        }
    }

    pub fn model(&self) -> &str {
        self.summarizer.model()
    }

    /// Runs one request end to end. Input errors return before any
    /// network access.
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, api_key: &str, url: &str) -> Result<SummaryResult, PipelineError> {
        let request = validate(api_key, url)
            .inspect_err(|e| tracing::info!(error = %e, "Rejected request input"))?;

        self.summarize(request).await
    }

    #[tracing::instrument(skip_all, fields(url = %request.url))]
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResult, PipelineError> {
        let source = ContentSource::detect(&request.url);
        let segments = self.load(source, &request).await?;

        let source_text = self.chain.stuff(&segments);
        let title = segments.iter().find_map(|s| s.metadata.title.clone());
        let prompt = self.chain.compose(&segments);
        tracing::info!(
            %source,
            segments = segments.len(),
            prompt_chars = prompt.len(),
            model = self.summarizer.model(),
            "Summarizing content"
        );

        let response = self
            .summarizer
            .summarize(&request.api_key, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        Ok(SummaryResult {
            source,
            source_text,
            title,
            summary: response.summary,
        })
    }

    async fn load(
        &self,
        source: ContentSource,
        request: &SummaryRequest,
    ) -> Result<Vec<TextSegment>, PipelineError> {
        let (loader, result) = match source {
            ContentSource::Video => (V::NAME, self.video_loader.load(&request.url).await),
            ContentSource::Page => (P::NAME, self.page_loader.load(&request.url).await),
        };

        let segments = result
            .inspect_err(|e| tracing::error!(loader, error = %e, "Failed to load content"))?;

        if segments.iter().all(|s| s.text.trim().is_empty()) {
            return Err(crate::error::RetrievalError::Empty {
                url: request.url.to_string(),
            }
            .into());
        }

        Ok(segments)
    }
}
