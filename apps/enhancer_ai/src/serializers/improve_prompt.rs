use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ImprovePromptIn {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, rename = "apiKey")]
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImprovePromptOut {
    pub original_prompt: String,
    pub improved_prompt: String,
}
