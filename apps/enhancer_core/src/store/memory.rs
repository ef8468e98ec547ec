use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{new_share_id, PromptStore, StoreError};
use crate::models::SharedPrompt;

/// In-process store with the same contract as [`super::DbPromptStore`].
/// Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryPromptStore {
    rows: RwLock<Vec<SharedPrompt>>,
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn create(&self, original: &str, improved: &str) -> Result<SharedPrompt, StoreError> {
        let row = SharedPrompt {
            id: new_share_id(),
            original_prompt: original.to_owned(),
            improved_prompt: improved.to_owned(),
            is_public: false,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn fetch(&self, id: &str) -> Result<Option<SharedPrompt>, StoreError> {
        Ok(self.rows.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn publish(&self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        row.is_public = true;
        Ok(())
    }

    async fn list_public(&self) -> Result<Vec<SharedPrompt>, StoreError> {
        let mut out: Vec<SharedPrompt> = self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.is_public)
            .cloned()
            .collect();
        // stable sort keeps reverse insertion order for equal timestamps
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}
