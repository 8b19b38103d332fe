//! Environment/runtime helpers
//!
//! Sanity checks to ensure the database location is usable at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the directory holding the SQLite file exists.
///
/// In-memory databases and bare file names (current directory) need nothing.
/// Returns `true` when the database file itself is already present.
pub async fn ensure_parent_dir(database: &str) -> anyhow::Result<bool> {
    if database == ":memory:" {
        return Ok(false);
    }
    let path = Path::new(database);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    let exists = tokio::fs::metadata(path).await.is_ok();
    if exists {
        info!(%database, "using existing database file");
    } else {
        warn!(%database, "database file not found; it will be created on first connection");
    }
    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::ensure_parent_dir;

    #[tokio::test]
    async fn memory_database_needs_no_directory() {
        assert!(!ensure_parent_dir(":memory:").await.unwrap());
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested/data/personas.db");
        let existed = ensure_parent_dir(db.to_str().unwrap()).await.unwrap();
        assert!(!existed);
        assert!(db.parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn reports_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("personas.db");
        std::fs::write(&db, b"").unwrap();
        assert!(ensure_parent_dir(db.to_str().unwrap()).await.unwrap());
    }
}
