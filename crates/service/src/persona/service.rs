use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::persona::domain::{AgeReport, NewPersona, Persona};
use crate::persona::repository::PersonaRepository;

/// Person registry business service, independent of the web framework.
pub struct PersonaService<R: PersonaRepository> {
    repo: Arc<R>,
}

impl<R: PersonaRepository> Clone for PersonaService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: PersonaRepository> PersonaService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Drop and recreate the person table. Every stored record is lost.
    #[instrument(skip(self))]
    pub async fn create_schema(&self) -> Result<(), ServiceError> {
        self.repo.create_schema().await?;
        info!(event = "schema_reset", "person table recreated");
        Ok(())
    }

    /// Create the person table only if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<bool, ServiceError> {
        let created = self.repo.ensure_schema().await?;
        if created {
            info!(event = "schema_created", "person table was missing and has been created");
        }
        Ok(created)
    }

    /// Register a person; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use service::persona::{repository::mock::MockPersonaRepository, PersonaService};
    /// use std::sync::Arc;
    /// let svc = PersonaService::new(Arc::new(MockPersonaRepository::with_schema()));
    /// let p = tokio_test::block_on(svc.insert("Ana", 30, "AR")).unwrap();
    /// assert_eq!(p.id, 1);
    /// ```
    #[instrument(skip(self))]
    pub async fn insert(
        &self,
        name: &str,
        age: i32,
        nationality: &str,
    ) -> Result<Persona, ServiceError> {
        let input = NewPersona {
            name: name.to_string(),
            age,
            nationality: nationality.to_string(),
        };
        self.register(&input).await
    }

    pub async fn register(&self, input: &NewPersona) -> Result<Persona, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, nationality = %created.nationality, "persona registered");
        Ok(created)
    }

    /// Records in id order within `page`.
    pub async fn report(&self, page: Page) -> Result<Vec<Persona>, ServiceError> {
        self.repo.list(page).await
    }

    /// Ids and ages of every record with exactly this nationality.
    pub async fn age_report(&self, nationality: &str) -> Result<AgeReport, ServiceError> {
        let pairs = self.repo.ages_by_nationality(nationality).await?;
        Ok(pairs.into_iter().collect())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::repository::mock::MockPersonaRepository;

    fn service() -> PersonaService<MockPersonaRepository> {
        PersonaService::new(Arc::new(MockPersonaRepository::with_schema()))
    }

    async fn seed(svc: &PersonaService<MockPersonaRepository>) {
        svc.insert("Ana", 30, "AR").await.unwrap();
        svc.insert("Bob", 25, "US").await.unwrap();
        svc.insert("Cat", 40, "AR").await.unwrap();
    }

    #[tokio::test]
    async fn insert_then_full_report_contains_record() {
        let svc = service();
        let p = svc.insert("Dan", 51, "UY").await.unwrap();
        let all = svc.report(Page::new(0, 0)).await.unwrap();
        assert!(all.iter().any(|r| r.id == p.id && r.name == "Dan" && r.age == 51 && r.nationality == "UY"));
    }

    #[tokio::test]
    async fn scenario_age_report_and_page() {
        let svc = service();
        seed(&svc).await;

        let ar = svc.age_report("AR").await.unwrap();
        assert_eq!(ar.ids, vec![1, 3]);
        assert_eq!(ar.ages, vec![30, 40]);

        let page = svc.report(Page::new(2, 1)).await.unwrap();
        assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn limit_zero_returns_everything_after_offset() {
        let svc = service();
        seed(&svc).await;
        let rest = svc.report(Page::new(0, 2)).await.unwrap();
        assert_eq!(rest.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Cat"]);
    }

    #[tokio::test]
    async fn unmatched_nationality_is_empty_not_error() {
        let svc = service();
        seed(&svc).await;
        assert!(svc.age_report("BR").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn operations_fail_before_schema_exists() {
        let svc = PersonaService::new(Arc::new(MockPersonaRepository::default()));
        assert!(matches!(svc.report(Page::all()).await, Err(ServiceError::Db(_))));
        assert!(svc.ensure_schema().await.unwrap());
        assert!(!svc.ensure_schema().await.unwrap());
        assert_eq!(svc.count().await.unwrap(), 0);
    }
}
