use axum::{extract::State, response::Response};
use link_pulse::{Loader, Summarizer};

use crate::{
    state::AppState,
    view::{render_page, PageInput, PageState},
};

/// GET / - Idle page. Without a key the submit action stays disabled.
pub async fn index<V, P, S>(State(state): State<AppState<V, P, S>>) -> Response
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let input = PageInput {
        model: state.pipeline.model(),
        ..Default::default()
    };
    render_page(PageState::Idle, input, &state.animations)
}
