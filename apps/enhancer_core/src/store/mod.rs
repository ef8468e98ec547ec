//! Persistence boundary for shared prompt pairs.
//!
//! Handlers only ever see `Arc<dyn PromptStore>`; the gateway injects the
//! sea-orm backed [`DbPromptStore`] and tests inject [`MemoryPromptStore`].

mod db;
mod memory;

pub use db::DbPromptStore;
pub use memory::MemoryPromptStore;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::SharedPrompt;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("prompt {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Insert a new private pair under a freshly generated identifier.
    async fn create(&self, original: &str, improved: &str) -> Result<SharedPrompt, StoreError>;

    async fn fetch(&self, id: &str) -> Result<Option<SharedPrompt>, StoreError>;

    /// Flip `is_public` to true. Idempotent; `NotFound` if nothing matched.
    async fn publish(&self, id: &str) -> Result<(), StoreError>;

    /// Published pairs, most recent first.
    async fn list_public(&self) -> Result<Vec<SharedPrompt>, StoreError>;
}

pub(crate) fn new_share_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
