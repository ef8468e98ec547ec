use axum::{extract::State, Json};
use enhancer_core::errors::{bad, internal, unauth, ApiResult};
use tracing::{info, warn};

use crate::refiner::RefineError;
use crate::serializers::improve_prompt::{ImprovePromptIn, ImprovePromptOut};
use crate::{AiState, ENHANCEMENT_INSTRUCTION};

pub async fn improve_prompt(
    State(state): State<AiState>,
    Json(inp): Json<ImprovePromptIn>,
) -> ApiResult<Json<ImprovePromptOut>> {
    if inp.prompt.is_empty() {
        return Err(bad("Prompt cannot be empty."));
    }
    if inp.api_key.is_empty() {
        return Err(bad("API key is required."));
    }

    match state
        .refiner
        .refine(ENHANCEMENT_INSTRUCTION, &inp.prompt, &inp.api_key)
        .await
    {
        Ok(improved) => {
            info!(chars_in = inp.prompt.len(), chars_out = improved.len(), "prompt improved");
            Ok(Json(ImprovePromptOut {
                original_prompt: inp.prompt,
                improved_prompt: improved,
            }))
        }
        Err(RefineError::InvalidCredential) => {
            warn!("completion provider rejected the supplied key");
            Err(unauth("Invalid OpenAI API key."))
        }
        Err(e) => Err(internal("An unexpected error occurred", e)),
    }
}
