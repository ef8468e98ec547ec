pub mod refiner;
pub mod serializers;
pub mod urls;
pub mod views;

use std::sync::Arc;

use crate::refiner::PromptRefiner;

/// Fixed system turn sent ahead of every user prompt.
pub const ENHANCEMENT_INSTRUCTION: &str = "Please refine the following user prompt to be more clear, focused, and effective. \
Preserve the original intent and key elements, but enhance its structure and wording \
to yield better results from an AI model. Here is the user's prompt:";

#[derive(Clone)]
pub struct AiState {
    pub refiner: Arc<dyn PromptRefiner>,
}
