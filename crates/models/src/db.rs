use configs::DbConfig;
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

pub const PERSONA_TABLE: &str = "persona";

/// Open the SQLite store described by `cfg`; the file is created if missing.
pub async fn connect(cfg: &DbConfig) -> Result<DatabaseConnection, ModelError> {
    connect_url(&cfg.url()).await
}

pub async fn connect_url(url: &str) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Drop every table and re-apply the schema. All stored rows are lost.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), ModelError> {
    Migrator::fresh(db).await?;
    info!(table = PERSONA_TABLE, "schema recreated");
    Ok(())
}

pub async fn has_schema(db: &DatabaseConnection) -> Result<bool, ModelError> {
    let manager = SchemaManager::new(db);
    Ok(manager.has_table(PERSONA_TABLE).await?)
}

/// Create the schema only when the person table is absent.
/// Returns whether it had to be created.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<bool, ModelError> {
    if has_schema(db).await? {
        return Ok(false);
    }
    create_schema(db).await?;
    Ok(true)
}
