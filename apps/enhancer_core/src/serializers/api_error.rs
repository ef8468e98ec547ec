use serde::{Deserialize, Serialize};

/// Body of every non-2xx response produced by the handlers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
}
