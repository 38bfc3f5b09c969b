mod certifications_postgres;
mod education_postgres;
mod experiences_postgres;
mod resume_repository_postgres;
pub mod sea_orm_entity;
mod skills_postgres;

pub use resume_repository_postgres::ResumeRepositoryPostgres;
