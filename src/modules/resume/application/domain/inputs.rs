//! Create and update payloads for the resume sections.
//!
//! `*Draft` is what the client sent, `New*` is a validated insert and
//! `*Changes` is a merge where `None` keeps the stored value.

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceChanges {
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEducation {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub achievements: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationChanges {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillCategoryDraft {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSkillCategory {
    pub category: String,
    pub items: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategoryChanges {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CertificationDraft {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub pdf_url: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCertification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub pdf_url: String,
    pub order: i32,
}

/// `pdf_url` may be set to an empty string to detach the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationChanges {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub pdf_url: Option<String>,
    pub order: Option<i32>,
}
