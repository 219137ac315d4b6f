//! Application state.

use std::sync::Arc;

use link_pulse::{Loader, Summarizer, SummaryPipeline};

use crate::animation::Animations;

/// Shared by every handler. Both members are immutable after startup.
pub struct AppState<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub pipeline: Arc<SummaryPipeline<V, P, S>>,
    pub animations: Arc<Animations>,
}

impl<V, P, S> AppState<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn new(pipeline: SummaryPipeline<V, P, S>, animations: Animations) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            animations: Arc::new(animations),
        }
    }
}

impl<V, P, S> Clone for AppState<V, P, S>
where
    V: Loader + Send + Sync + 'static,
    P: Loader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            animations: Arc::clone(&self.animations),
        }
    }
}
