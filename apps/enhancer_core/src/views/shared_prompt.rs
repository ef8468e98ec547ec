use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::{bad, internal, not_found, ApiResult};
use crate::serializers::shared_prompt::{GalleryResp, PromptDetail, ShareReq, ShareResp};
use crate::store::StoreError;
use crate::AppState;

const NOT_FOUND: &str = "Prompt not found.";

pub async fn share_prompt(
    State(state): State<AppState>,
    Json(req): Json<ShareReq>,
) -> ApiResult<Json<ShareResp>> {
    if req.original_prompt.is_empty() || req.improved_prompt.is_empty() {
        return Err(bad("Both prompts must be provided."));
    }

    let created = state
        .store
        .create(&req.original_prompt, &req.improved_prompt)
        .await
        .map_err(|e| internal("Failed to save prompt", e))?;

    info!(share_id = %created.id, "prompt shared");
    Ok(Json(ShareResp { share_id: created.id }))
}

pub async fn get_shared_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptDetail>> {
    let Some(found) = state
        .store
        .fetch(&id)
        .await
        .map_err(|e| internal("Failed to load prompt", e))?
    else {
        return Err(not_found(NOT_FOUND));
    };
    Ok(Json(found.into()))
}

pub async fn publish_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state
        .store
        .fetch(&id)
        .await
        .map_err(|e| internal("Failed to publish prompt", e))?
        .is_none()
    {
        return Err(not_found(NOT_FOUND));
    }

    match state.store.publish(&id).await {
        Ok(()) => {
            info!(share_id = %id, "prompt published");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(StoreError::NotFound(_)) => Err(not_found(NOT_FOUND)),
        Err(e) => Err(internal("Failed to publish prompt", e)),
    }
}

pub async fn gallery(State(state): State<AppState>) -> ApiResult<Json<GalleryResp>> {
    let prompts = state
        .store
        .list_public()
        .await
        .map_err(|e| internal("Failed to retrieve gallery", e))?;
    Ok(Json(GalleryResp {
        prompts: prompts.into_iter().map(PromptDetail::from).collect(),
    }))
}
