use serde::{Deserialize, Serialize};

use crate::models::SharedPrompt;

/// Missing fields deserialize as empty so they land on the same 400 path.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareReq {
    #[serde(default)]
    pub original_prompt: String,
    #[serde(default)]
    pub improved_prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResp {
    pub share_id: String,
}

/// Public projection of a stored pair; visibility and timestamp are withheld.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PromptDetail {
    pub id: String,
    pub original_prompt: String,
    pub improved_prompt: String,
}

impl From<SharedPrompt> for PromptDetail {
    fn from(m: SharedPrompt) -> Self {
        Self {
            id: m.id,
            original_prompt: m.original_prompt,
            improved_prompt: m.improved_prompt,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryResp {
    pub prompts: Vec<PromptDetail>,
}
