use axum::{extract::State, response::Response, Form};
use link_pulse::{Loader, Summarizer};
use serde::Deserialize;

use crate::{
    state::AppState,
    view::{render_page, PageInput, PageState},
};

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub url: String,
}

/// POST /summarize - Runs one pipeline and renders its outcome.
pub async fn summarize<V, P, S>(
    State(state): State<AppState<V, P, S>>,
    Form(form): Form<SummarizeForm>,
) -> Response
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let outcome = state.pipeline.run(&form.api_key, &form.url).await;
    if let Err(e) = &outcome {
        if !e.is_input_error() {
            tracing::warn!(error = %e, "Summarization run failed");
        }
    }

    let input = PageInput {
        api_key: &form.api_key,
        url: &form.url,
        model: state.pipeline.model(),
    };
    render_page(PageState::from(outcome), input, &state.animations)
}
