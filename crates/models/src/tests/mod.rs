
/// Person CRUD and query tests
pub mod persona_tests;

use sea_orm::DatabaseConnection;

use crate::db;

/// Fresh in-memory store with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let conn = db::connect_url("sqlite::memory:").await?;
    db::create_schema(&conn).await?;
    Ok(conn)
}
