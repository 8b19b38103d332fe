use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::persona::domain::{NewPersona, Persona};

/// Storage abstraction for person records.
#[async_trait]
pub trait PersonaRepository: Send + Sync {
    /// Drop and recreate the person table.
    async fn create_schema(&self) -> Result<(), ServiceError>;
    /// Create the table if missing; `true` when it was created.
    async fn ensure_schema(&self) -> Result<bool, ServiceError>;
    async fn insert(&self, input: &NewPersona) -> Result<Persona, ServiceError>;
    async fn list(&self, page: Page) -> Result<Vec<Persona>, ServiceError>;
    /// `(id, age)` pairs for an exact nationality match, in id order.
    async fn ages_by_nationality(&self, nationality: &str) -> Result<Vec<(i32, i32)>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPersonaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPersonaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonaRepository for SeaOrmPersonaRepository {
    async fn create_schema(&self) -> Result<(), ServiceError> {
        Ok(models::db::create_schema(&self.db).await?)
    }

    async fn ensure_schema(&self) -> Result<bool, ServiceError> {
        Ok(models::db::ensure_schema(&self.db).await?)
    }

    async fn insert(&self, input: &NewPersona) -> Result<Persona, ServiceError> {
        Ok(models::persona::create(&self.db, &input.name, input.age, &input.nationality).await?)
    }

    async fn list(&self, page: Page) -> Result<Vec<Persona>, ServiceError> {
        Ok(models::persona::list(&self.db, page.limit(), page.offset()).await?)
    }

    async fn ages_by_nationality(
        &self,
        nationality: &str,
    ) -> Result<Vec<(i32, i32)>, ServiceError> {
        Ok(models::persona::ages_by_nationality(&self.db, nationality).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::persona::count(&self.db).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    struct Table {
        rows: Vec<Persona>,
        next_id: i32,
    }

    impl Table {
        fn empty() -> Self {
            Self { rows: Vec::new(), next_id: 1 }
        }
    }

    /// Behaves like the SQL store: every operation except schema creation
    /// fails until the table exists.
    #[derive(Default)]
    pub struct MockPersonaRepository {
        table: Mutex<Option<Table>>,
    }

    impl MockPersonaRepository {
        /// Repository whose table already exists.
        pub fn with_schema() -> Self {
            Self { table: Mutex::new(Some(Table::empty())) }
        }

        fn with_table<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T, ServiceError> {
            let mut guard = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            let table = guard
                .as_mut()
                .ok_or_else(|| ServiceError::Db("no such table: persona".into()))?;
            Ok(f(table))
        }
    }

    #[async_trait]
    impl PersonaRepository for MockPersonaRepository {
        async fn create_schema(&self) -> Result<(), ServiceError> {
            let mut guard = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            *guard = Some(Table::empty());
            Ok(())
        }

        async fn ensure_schema(&self) -> Result<bool, ServiceError> {
            let mut guard = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_some() {
                return Ok(false);
            }
            *guard = Some(Table::empty());
            Ok(true)
        }

        async fn insert(&self, input: &NewPersona) -> Result<Persona, ServiceError> {
            self.with_table(|t| {
                let row = Persona {
                    id: t.next_id,
                    name: input.name.clone(),
                    age: input.age,
                    nationality: input.nationality.clone(),
                };
                t.next_id += 1;
                t.rows.push(row.clone());
                row
            })
        }

        async fn list(&self, page: Page) -> Result<Vec<Persona>, ServiceError> {
            self.with_table(|t| {
                let skip = page.offset().unwrap_or(0) as usize;
                let take = page.limit().map_or(usize::MAX, |l| l as usize);
                t.rows.iter().skip(skip).take(take).cloned().collect()
            })
        }

        async fn ages_by_nationality(
            &self,
            nationality: &str,
        ) -> Result<Vec<(i32, i32)>, ServiceError> {
            self.with_table(|t| {
                t.rows
                    .iter()
                    .filter(|p| p.nationality == nationality)
                    .map(|p| (p.id, p.age))
                    .collect()
            })
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            self.with_table(|t| t.rows.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::persona::PersonaService;
    use crate::test_support::get_db;

    async fn seeded() -> Result<PersonaService<SeaOrmPersonaRepository>, anyhow::Error> {
        let svc = PersonaService::new(Arc::new(SeaOrmPersonaRepository::new(get_db().await?)));
        svc.insert("Ana", 30, "AR").await?;
        svc.insert("Bob", 25, "US").await?;
        svc.insert("Cat", 40, "AR").await?;
        Ok(svc)
    }

    #[tokio::test]
    async fn scenario_against_sqlite() -> Result<(), anyhow::Error> {
        let svc = seeded().await?;

        let ar = svc.age_report("AR").await?;
        assert_eq!(ar.ids, vec![1, 3]);
        assert_eq!(ar.ages, vec![30, 40]);

        let page = svc.report(Page::new(2, 1)).await?;
        assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);

        let all = svc.report(Page::new(0, 0)).await?;
        assert_eq!(all.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn age_report_ids_match_nationality_in_store() -> Result<(), anyhow::Error> {
        let svc = seeded().await?;
        svc.insert("Eve", 22, "AR ").await?;

        let ar = svc.age_report("AR").await?;
        assert_eq!(ar.ids.len(), ar.ages.len());
        let all = svc.report(Page::all()).await?;
        for id in &ar.ids {
            let row = all.iter().find(|p| p.id == *id).expect("id present in store");
            assert_eq!(row.nationality, "AR");
        }
        Ok(())
    }

    #[tokio::test]
    async fn limit_bounds_and_offset_skips() -> Result<(), anyhow::Error> {
        let svc = seeded().await?;
        for l in 1..=4u64 {
            let rows = svc.report(Page::new(l, 0)).await?;
            assert!(rows.len() as u64 <= l);
            assert_eq!(rows.first().map(|p| p.id), Some(1));
        }
        let from_two = svc.report(Page::new(0, 2)).await?;
        assert_eq!(from_two.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
        Ok(())
    }

    #[tokio::test]
    async fn reset_twice_leaves_empty_table() -> Result<(), anyhow::Error> {
        let svc = seeded().await?;
        svc.create_schema().await?;
        assert_eq!(svc.count().await?, 0);
        svc.create_schema().await?;
        assert!(svc.report(Page::all()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_is_storage_error() -> Result<(), anyhow::Error> {
        let db = models::db::connect_url("sqlite::memory:").await?;
        let repo = SeaOrmPersonaRepository::new(db);
        assert!(matches!(repo.list(Page::all()).await, Err(ServiceError::Db(_))));
        assert!(repo.ensure_schema().await?);
        assert!(repo.list(Page::all()).await?.is_empty());
        Ok(())
    }
}
