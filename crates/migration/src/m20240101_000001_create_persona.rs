//! Create `persona` table.
//!
//! Ids are assigned by SQLite (AUTOINCREMENT), so they never repeat after a
//! row is gone; a full reset drops the table and restarts them at 1.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persona::Table)
                    .if_not_exists()
                    .col(pk_auto(Persona::Id))
                    .col(string(Persona::Name))
                    .col(integer(Persona::Age))
                    .col(string(Persona::Nationality))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Persona::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Persona {
    Table,
    Id,
    Name,
    Age,
    Nationality,
}
