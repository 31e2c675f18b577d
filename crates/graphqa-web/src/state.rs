//! Application state.

use std::sync::Arc;

use graphqa_core::{GraphExecutor, QuestionAnswerService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub qa: QuestionAnswerService,
    pub graph: Arc<dyn GraphExecutor>,
}

impl AppState {
    pub fn new(graph: Arc<dyn GraphExecutor>) -> Self {
        Self {
            qa: QuestionAnswerService::new(graph.clone()),
            graph,
        }
    }
}
