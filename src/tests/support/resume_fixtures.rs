use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, SkillCategory,
};
use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::application::resume_use_cases::SectionUseCases;

/// How a section row is built and merged in memory.
pub trait MemoryRow: ResumeSection {
    fn build(new: Self::New, id: Uuid, at: DateTime<Utc>) -> Self;
    fn merge(&mut self, changes: Self::Changes);
    fn id(&self) -> Uuid;
    fn sort_key(&self) -> (i32, DateTime<Utc>);
}

/// Vec-backed section storage with the same ordering as the database.
pub struct MemoryResumeRepository<S> {
    rows: Mutex<Vec<S>>,
}

impl<S> Default for MemoryResumeRepository<S> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<S: MemoryRow> ResumeRepository<S> for Arc<MemoryResumeRepository<S>> {
    async fn list(&self) -> Result<Vec<S>, ResumeRepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|r| r.sort_key());
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<S, ResumeRepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn create(&self, entry: S::New) -> Result<S, ResumeRepositoryError> {
        let row = S::build(entry, Uuid::new_v4(), Utc::now());
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: S::Changes) -> Result<S, ResumeRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ResumeRepositoryError::NotFound)?;
        row.merge(changes);
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Err(ResumeRepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Real resume service over an empty in-memory store.
pub fn memory_section<S: MemoryRow>() -> SectionUseCases<S> {
    SectionUseCases::from_repository(Arc::new(MemoryResumeRepository::<S>::default()))
}

impl MemoryRow for Experience {
    fn build(new: Self::New, id: Uuid, at: DateTime<Utc>) -> Self {
        Experience {
            id,
            title: new.title,
            company: new.company,
            period: new.period,
            description: new.description,
            achievements: new.achievements,
            order: new.order,
            created_at: at,
            updated_at: at,
        }
    }

    fn merge(&mut self, c: Self::Changes) {
        if let Some(v) = c.title {
            self.title = v;
        }
        if let Some(v) = c.company {
            self.company = v;
        }
        if let Some(v) = c.period {
            self.period = v;
        }
        if let Some(v) = c.description {
            self.description = v;
        }
        if let Some(v) = c.achievements {
            self.achievements = v;
        }
        if let Some(v) = c.order {
            self.order = v;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> (i32, DateTime<Utc>) {
        (self.order, self.created_at)
    }
}

impl MemoryRow for Education {
    fn build(new: Self::New, id: Uuid, at: DateTime<Utc>) -> Self {
        Education {
            id,
            degree: new.degree,
            school: new.school,
            period: new.period,
            achievements: new.achievements,
            order: new.order,
            created_at: at,
            updated_at: at,
        }
    }

    fn merge(&mut self, c: Self::Changes) {
        if let Some(v) = c.degree {
            self.degree = v;
        }
        if let Some(v) = c.school {
            self.school = v;
        }
        if let Some(v) = c.period {
            self.period = v;
        }
        if let Some(v) = c.achievements {
            self.achievements = v;
        }
        if let Some(v) = c.order {
            self.order = v;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> (i32, DateTime<Utc>) {
        (self.order, self.created_at)
    }
}

impl MemoryRow for SkillCategory {
    fn build(new: Self::New, id: Uuid, at: DateTime<Utc>) -> Self {
        SkillCategory {
            id,
            category: new.category,
            items: new.items,
            order: new.order,
            created_at: at,
            updated_at: at,
        }
    }

    fn merge(&mut self, c: Self::Changes) {
        if let Some(v) = c.category {
            self.category = v;
        }
        if let Some(v) = c.items {
            self.items = v;
        }
        if let Some(v) = c.order {
            self.order = v;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> (i32, DateTime<Utc>) {
        (self.order, self.created_at)
    }
}

impl MemoryRow for Certification {
    fn build(new: Self::New, id: Uuid, at: DateTime<Utc>) -> Self {
        Certification {
            id,
            name: new.name,
            issuer: new.issuer,
            date: new.date,
            pdf_url: new.pdf_url,
            order: new.order,
            created_at: at,
            updated_at: at,
        }
    }

    fn merge(&mut self, c: Self::Changes) {
        if let Some(v) = c.name {
            self.name = v;
        }
        if let Some(v) = c.issuer {
            self.issuer = v;
        }
        if let Some(v) = c.date {
            self.date = v;
        }
        if let Some(v) = c.pdf_url {
            self.pdf_url = v;
        }
        if let Some(v) = c.order {
            self.order = v;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> (i32, DateTime<Utc>) {
        (self.order, self.created_at)
    }
}
