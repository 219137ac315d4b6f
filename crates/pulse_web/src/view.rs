//! Page states and their rendering.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use link_pulse::{PipelineError, SummaryResult, ValidationError};

use crate::animation::Animations;

/// Where a single request ended up. `Loading` only exists in the browser,
/// between submit and response.
#[derive(Debug)]
pub enum PageState {
    Idle,
    MissingCredential,
    Invalid(ValidationError),
    Failed(PipelineError),
    Summarized(SummaryResult),
}

impl From<Result<SummaryResult, PipelineError>> for PageState {
    fn from(outcome: Result<SummaryResult, PipelineError>) -> Self {
        match outcome {
            Ok(result) => PageState::Summarized(result),
            Err(PipelineError::MissingCredential) => PageState::MissingCredential,
            Err(PipelineError::Validation(e)) => PageState::Invalid(e),
            Err(e) => PageState::Failed(e),
        }
    }
}

#[derive(Debug)]
pub struct Notice {
    pub level: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct SummaryView {
    pub text: String,
    pub source_line: String,
}

impl SummaryView {
    fn new(result: SummaryResult, model: &str) -> Self {
        let label = capitalize(&result.source.to_string());
        let label = match result.title {
            Some(title) => format!("{label}: {title}"),
            None => label,
        };

        Self {
            source_line: format!(
                "{label} ({} characters read with {model})",
                result.source_text.chars().count()
            ),
            text: result.summary,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    api_key: &'a str,
    url: &'a str,
    key_missing: bool,
    notice: Option<Notice>,
    summary: Option<SummaryView>,
    loading_animation: Option<&'a str>,
    success_animation: Option<&'a str>,
}

/// Form values echoed back into the page.
#[derive(Debug, Default)]
pub struct PageInput<'a> {
    pub api_key: &'a str,
    pub url: &'a str,
    pub model: &'a str,
}

pub fn render_page(state: PageState, input: PageInput<'_>, animations: &Animations) -> Response {
    let key_missing = input.api_key.trim().is_empty();

    let (notice, summary) = match state {
        // the key warning is always part of the page; it is only toggled
        PageState::Idle | PageState::MissingCredential => (None, None),
        PageState::Invalid(e) => (
            Some(Notice {
                level: "error",
                message: e.to_string(),
            }),
            None,
        ),
        PageState::Failed(e) => (
            Some(Notice {
                level: "exception",
                message: format!("Exception: {e}"),
            }),
            None,
        ),
        PageState::Summarized(result) => (None, Some(SummaryView::new(result, input.model))),
    };

    let template = IndexTemplate {
        api_key: input.api_key,
        url: input.url,
        key_missing,
        notice,
        loading_animation: animations.loading.as_ref().map(|a| a.script_json()),
        success_animation: summary
            .as_ref()
            .and(animations.success.as_ref())
            .map(|a| a.script_json()),
        summary,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use link_pulse::{ContentSource, RetrievalError};

    #[test]
    fn test_outcomes_map_to_page_states() {
        assert!(matches!(
            PageState::from(Err(PipelineError::MissingCredential)),
            PageState::MissingCredential
        ));
        assert!(matches!(
            PageState::from(Err(ValidationError::Malformed.into())),
            PageState::Invalid(ValidationError::Malformed)
        ));
        assert!(matches!(
            PageState::from(Err(RetrievalError::Empty { url: "u".into() }.into())),
            PageState::Failed(_)
        ));

        let result = SummaryResult {
            source: ContentSource::Page,
            source_text: "text".into(),
            title: None,
            summary: "summary".into(),
        };
        assert!(matches!(
            PageState::from(Ok(result)),
            PageState::Summarized(_)
        ));
    }

    #[test]
    fn test_summary_source_line() {
        let result = SummaryResult {
            source: ContentSource::Video,
            source_text: "héllo".into(),
            title: Some("Talk".into()),
            summary: "short".into(),
        };
        let view = SummaryView::new(result, "gemma-7b-it");
        assert_eq!(
            view.source_line,
            "YouTube video: Talk (5 characters read with gemma-7b-it)"
        );
        assert_eq!(view.text, "short");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("web page"), "Web page");
        assert_eq!(capitalize(""), "");
    }
}
