use sea_orm_migration::prelude::*;

mod m2026_10_16_000001_create_prompts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m2026_10_16_000001_create_prompts::Migration)]
    }
}
