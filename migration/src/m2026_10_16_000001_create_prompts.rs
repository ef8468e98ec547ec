use sea_orm_migration::prelude::*;

/// Table: prompts (shared original/improved pairs)
#[derive(DeriveIden)]
enum Prompts {
    Table,
    Id,
    OriginalPrompt,
    ImprovedPrompt,
    IsPublic,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prompts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prompts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Prompts::OriginalPrompt).text().not_null())
                    .col(ColumnDef::new(Prompts::ImprovedPrompt).text().not_null())
                    .col(
                        ColumnDef::new(Prompts::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Prompts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // gallery query: WHERE is_public ORDER BY created_at DESC
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prompts_public_created_at")
                    .table(Prompts::Table)
                    .col(Prompts::IsPublic)
                    .col(Prompts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prompts::Table).to_owned())
            .await
    }
}
