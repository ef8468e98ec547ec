use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{new_share_id, PromptStore, StoreError};
use crate::models::shared_prompt::{ActiveModel, Column, Entity as Prompt};
use crate::models::SharedPrompt;

/// sea-orm backed store. Each operation is a single statement.
#[derive(Clone)]
pub struct DbPromptStore {
    db: DatabaseConnection,
}

impl DbPromptStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl PromptStore for DbPromptStore {
    async fn create(&self, original: &str, improved: &str) -> Result<SharedPrompt, StoreError> {
        let row = SharedPrompt {
            id: new_share_id(),
            original_prompt: original.to_owned(),
            improved_prompt: improved.to_owned(),
            is_public: false,
            created_at: Utc::now(),
        };

        let am = ActiveModel {
            id: Set(row.id.clone()),
            original_prompt: Set(row.original_prompt.clone()),
            improved_prompt: Set(row.improved_prompt.clone()),
            is_public: Set(row.is_public),
            created_at: Set(row.created_at),
        };
        Prompt::insert(am).exec_without_returning(&self.db).await?;
        Ok(row)
    }

    async fn fetch(&self, id: &str) -> Result<Option<SharedPrompt>, StoreError> {
        Ok(Prompt::find_by_id(id.to_owned()).one(&self.db).await?)
    }

    async fn publish(&self, id: &str) -> Result<(), StoreError> {
        let res = Prompt::update_many()
            .col_expr(Column::IsPublic, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }

    async fn list_public(&self) -> Result<Vec<SharedPrompt>, StoreError> {
        Ok(Prompt::find()
            .filter(Column::IsPublic.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?)
    }
}
