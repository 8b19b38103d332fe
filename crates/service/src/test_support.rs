#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Fresh in-memory SQLite store with migrations applied.
///
/// sea-orm caps SQLite pools at one connection, so every query in a test sees
/// the same in-memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_url("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
