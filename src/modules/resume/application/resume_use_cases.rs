use std::sync::Arc;

use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, SkillCategory,
};
use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::incoming::use_cases::{
    CreateResumeEntryUseCase, DeleteResumeEntryUseCase, GetResumeEntryUseCase,
    ListResumeEntriesUseCase, UpdateResumeEntryUseCase,
};
use crate::modules::resume::application::ports::outgoing::resume_repository::ResumeRepository;
use crate::modules::resume::application::service::ResumeService;

pub struct SectionUseCases<S: ResumeSection> {
    pub list: Arc<dyn ListResumeEntriesUseCase<S> + Send + Sync>,
    pub get: Arc<dyn GetResumeEntryUseCase<S> + Send + Sync>,
    pub create: Arc<dyn CreateResumeEntryUseCase<S> + Send + Sync>,
    pub update: Arc<dyn UpdateResumeEntryUseCase<S> + Send + Sync>,
    pub delete: Arc<dyn DeleteResumeEntryUseCase<S> + Send + Sync>,
}

impl<S: ResumeSection> Clone for SectionUseCases<S> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            get: self.get.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<S: ResumeSection> SectionUseCases<S> {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ResumeRepository<S> + 'static,
    {
        let service = Arc::new(ResumeService::<S, R>::new(repository));
        Self {
            list: service.clone(),
            get: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

#[derive(Clone)]
pub struct ResumeUseCases {
    pub experiences: SectionUseCases<Experience>,
    pub education: SectionUseCases<Education>,
    pub skills: SectionUseCases<SkillCategory>,
    pub certifications: SectionUseCases<Certification>,
}

impl ResumeUseCases {
    /// All four sections backed by one repository value.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ResumeRepository<Experience>
            + ResumeRepository<Education>
            + ResumeRepository<SkillCategory>
            + ResumeRepository<Certification>
            + Clone
            + 'static,
    {
        Self {
            experiences: SectionUseCases::from_repository(repository.clone()),
            education: SectionUseCases::from_repository(repository.clone()),
            skills: SectionUseCases::from_repository(repository.clone()),
            certifications: SectionUseCases::from_repository(repository),
        }
    }
}
