use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::incoming::use_cases::{
    CreateResumeEntryUseCase, DeleteResumeEntryUseCase, GetResumeEntryUseCase,
    ListResumeEntriesUseCase, ResumeError, UpdateResumeEntryUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepository;

pub struct ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    repository: R,
    _section: PhantomData<fn() -> S>,
}

impl<S, R> ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _section: PhantomData,
        }
    }
}

#[async_trait]
impl<S, R> ListResumeEntriesUseCase<S> for ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    async fn execute(&self) -> Result<Vec<S>, ResumeError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<S, R> GetResumeEntryUseCase<S> for ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    async fn execute(&self, id: Uuid) -> Result<S, ResumeError> {
        Ok(self.repository.get(id).await?)
    }
}

#[async_trait]
impl<S, R> CreateResumeEntryUseCase<S> for ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    async fn execute(&self, draft: S::Draft) -> Result<S, ResumeError> {
        let entry = S::validate(draft)?;
        Ok(self.repository.create(entry).await?)
    }
}

#[async_trait]
impl<S, R> UpdateResumeEntryUseCase<S> for ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    async fn execute(&self, id: Uuid, changes: S::Changes) -> Result<S, ResumeError> {
        Ok(self.repository.update(id, changes).await?)
    }
}

#[async_trait]
impl<S, R> DeleteResumeEntryUseCase<S> for ResumeService<S, R>
where
    S: ResumeSection,
    R: ResumeRepository<S>,
{
    async fn execute(&self, id: Uuid) -> Result<(), ResumeError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resume::application::domain::entities::SkillCategory;
    use crate::modules::resume::application::domain::inputs::{
        NewSkillCategory, SkillCategoryChanges, SkillCategoryDraft,
    };
    use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepositoryError;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SkillsRepo {
        rows: Mutex<Vec<SkillCategory>>,
    }

    #[async_trait]
    impl ResumeRepository<SkillCategory> for SkillsRepo {
        async fn list(&self) -> Result<Vec<SkillCategory>, ResumeRepositoryError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by_key(|r| (r.order, r.created_at));
            Ok(rows)
        }

        async fn get(&self, id: Uuid) -> Result<SkillCategory, ResumeRepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(ResumeRepositoryError::NotFound)
        }

        async fn create(
            &self,
            entry: NewSkillCategory,
        ) -> Result<SkillCategory, ResumeRepositoryError> {
            let now = Utc::now();
            let row = SkillCategory {
                id: Uuid::new_v4(),
                category: entry.category,
                items: entry.items,
                order: entry.order,
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn update(
            &self,
            id: Uuid,
            changes: SkillCategoryChanges,
        ) -> Result<SkillCategory, ResumeRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(ResumeRepositoryError::NotFound)?;
            if let Some(items) = changes.items {
                row.items = items;
            }
            if let Some(order) = changes.order {
                row.order = order;
            }
            Ok(row.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                Err(ResumeRepositoryError::NotFound)
            } else {
                Ok(())
            }
        }
    }

    fn service() -> ResumeService<SkillCategory, SkillsRepo> {
        ResumeService::new(SkillsRepo::default())
    }

    fn draft(category: &str, order: i32) -> SkillCategoryDraft {
        SkillCategoryDraft {
            category: Some(category.into()),
            items: Some(vec!["Rust".into()]),
            order: Some(order),
        }
    }

    #[tokio::test]
    async fn list_orders_by_sort_key() {
        let svc = service();
        CreateResumeEntryUseCase::execute(&svc, draft("Backend", 2)).await.unwrap();
        CreateResumeEntryUseCase::execute(&svc, draft("Mobile", 1)).await.unwrap();

        let rows = ListResumeEntriesUseCase::execute(&svc).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();

        assert_eq!(names, vec!["Mobile", "Backend"]);
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let svc = service();
        let created = CreateResumeEntryUseCase::execute(&svc, draft("Mobile", 1))
            .await
            .unwrap();

        let fetched = GetResumeEntryUseCase::execute(&svc, created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn invalid_draft_is_not_stored() {
        let svc = service();

        let err = CreateResumeEntryUseCase::execute(
            &svc,
            SkillCategoryDraft {
                category: Some("Mobile".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ResumeError::Validation(_)));
        assert!(svc.repository.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_are_not_found() {
        let svc = service();

        let update = UpdateResumeEntryUseCase::execute(
            &svc,
            Uuid::new_v4(),
            SkillCategoryChanges::default(),
        )
        .await;
        let delete = DeleteResumeEntryUseCase::execute(&svc, Uuid::new_v4()).await;

        assert!(matches!(update.unwrap_err(), ResumeError::NotFound));
        assert!(matches!(delete.unwrap_err(), ResumeError::NotFound));
    }
}
