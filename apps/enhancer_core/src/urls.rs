use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::store::PromptStore;
use crate::views::{
    health::health,
    shared_prompt::{gallery, get_shared_prompt, publish_prompt, share_prompt},
};
use crate::AppState;

pub fn router(store: Arc<dyn PromptStore>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/prompts", post(share_prompt))
        .route("/api/prompts/{id}", get(get_shared_prompt))
        .route("/api/prompts/{id}/publish", post(publish_prompt))
        .route("/api/gallery", get(gallery))
        .with_state(AppState { store })
}
