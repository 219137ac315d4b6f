mod error;
pub mod llm;
pub mod loader;
pub mod parser;
mod pipeline;
pub mod tracing;
pub mod types;
pub mod validate;

pub use error::{InvocationError, PipelineError, RetrievalError, ValidationError};
pub use llm::{
    chain::StuffChain,
    groq::GroqClient,
    prompt::PromptTemplate,
    summarizer::{SummaryResponse, Summarizer},
};
pub use loader::{
    web::{PageLoaderSettings, WebPageLoader},
    youtube::YoutubeLoader,
    ContentSource, Loader,
};
pub use pipeline::{builder::SummaryPipelineBuilder, SummaryPipeline};
pub use types::{ApiKey, SegmentMetadata, SummaryRequest, SummaryResult, TextSegment};
