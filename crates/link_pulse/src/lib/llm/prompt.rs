//! Prompt templates with `{name}` placeholders.

use std::borrow::Cow;

/// The fixed instruction used for every summary.
pub const SUMMARY_TEMPLATE: &str =
    "Provide a summary of the following content in 300 words:\nContent:{text}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: Cow<'static, str>,
    input_variable: Cow<'static, str>,
}

impl PromptTemplate {
    pub fn new(
        template: impl Into<Cow<'static, str>>,
        input_variable: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            template: template.into(),
            input_variable: input_variable.into(),
        }
    }

    pub fn summary() -> Self {
        Self::new(SUMMARY_TEMPLATE, "text")
    }

    /// Substitutes every `{input_variable}` occurrence with `value`.
    ///
    /// Braces inside `value` are never interpreted.
    pub fn format(&self, value: &str) -> String {
        let placeholder = format!("{{{}}}", self.input_variable);
        self.template
            .split(placeholder.as_str())
            .collect::<Vec<_>>()
            .join(value)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::summary()
    }
}
