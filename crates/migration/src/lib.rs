//! Migrator for the person registry.
//! The schema is a single table; resets drop and re-apply it via `Migrator::fresh`.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_persona;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_persona::Migration)]
    }
}
