pub mod errors;
pub mod models;
pub mod serializers;
pub mod store;
pub mod urls;
pub mod views;

use std::sync::Arc;

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::store::PromptStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PromptStore>,
}

/// Ensure DB schema is up-to-date (calls migration crate).
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    use migration::Migrator;
    use sea_orm_migration::migrator::MigratorTrait;
    Migrator::up(db, None).await?;
    Ok(())
}
