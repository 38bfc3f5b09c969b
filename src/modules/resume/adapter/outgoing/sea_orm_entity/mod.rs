pub mod resume_certifications;
pub mod resume_education;
pub mod resume_experiences;
pub mod resume_skills;
