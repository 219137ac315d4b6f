use itertools::Itertools;

use crate::{llm::prompt::PromptTemplate, types::TextSegment};

/// "Stuff" strategy: all segments go into one prompt, without chunking.
#[derive(Debug, Clone)]
pub struct StuffChain {
    prompt: PromptTemplate,
    document_separator: String,
}

impl StuffChain {
    pub fn new(prompt: PromptTemplate) -> Self {
        Self {
            prompt,
            document_separator: "\n\n".into(),
        }
    }

    /// Concatenated segment text, as inserted into the prompt.
    pub fn stuff(&self, segments: &[TextSegment]) -> String {
        segments
            .iter()
            .map(|s| s.text.as_str())
            .join(&self.document_separator)
    }

    pub fn compose(&self, segments: &[TextSegment]) -> String {
        self.prompt.format(&self.stuff(segments))
    }
}

impl Default for StuffChain {
    fn default() -> Self {
        Self::new(PromptTemplate::summary())
    }
}
