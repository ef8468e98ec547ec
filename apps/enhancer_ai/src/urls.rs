use std::sync::Arc;

use axum::{routing::post, Router};

use crate::refiner::PromptRefiner;
use crate::views::improve_prompt::improve_prompt;
use crate::AiState;

pub fn router(refiner: Arc<dyn PromptRefiner>) -> Router {
    Router::new()
        .route("/api/improve-prompt", post(improve_prompt))
        .with_state(AiState { refiner })
}
