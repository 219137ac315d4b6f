use crate::{
    llm::{chain::StuffChain, summarizer::Summarizer},
    loader::Loader,
    SummaryPipeline,
};

pub struct SummaryPipelineBuilder<V = (), P = (), S = ()> {
    video_loader: V,
    page_loader: P,
    summarizer: S,
    chain: StuffChain,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            video_loader: (),
            page_loader: (),
            summarizer: (),
            chain: StuffChain::default(),
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P, S> SummaryPipelineBuilder<V, P, S> {
    pub fn video_loader<V2: Loader + Send + Sync + 'static>(
        self,
        video_loader: V2,
    ) -> SummaryPipelineBuilder<V2, P, S> {
        SummaryPipelineBuilder {
            video_loader,
            page_loader: self.page_loader,
            summarizer: self.summarizer,
            chain: self.chain,
        }
    }

    pub fn page_loader<P2: Loader + Send + Sync + 'static>(
        self,
        page_loader: P2,
    ) -> SummaryPipelineBuilder<V, P2, S> {
        SummaryPipelineBuilder {
            video_loader: self.video_loader,
            page_loader,
            summarizer: self.summarizer,
            chain: self.chain,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<V, P, S2> {
        SummaryPipelineBuilder {
            video_loader: self.video_loader,
            page_loader: self.page_loader,
            summarizer,
            chain: self.chain,
        }
    }

    pub fn chain(mut self, chain: StuffChain) -> Self {
        self.chain = chain;
        self
    }
}

impl<V, P, S> SummaryPipelineBuilder<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<V, P, S> {
        SummaryPipeline::new(self.video_loader, self.page_loader, self.summarizer, self.chain)
    }
}
