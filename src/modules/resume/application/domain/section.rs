use serde::Serialize;

use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, SkillCategory,
};
use crate::modules::resume::application::domain::inputs::*;
use crate::shared::validation::{RequiredFields, ValidationError};

/// One ordered collection on the resume page.
///
/// The four sections share list/get/create/update/delete behaviour and
/// differ only in their fields and which of them are required.
pub trait ResumeSection: Clone + Serialize + Send + Sync + 'static {
    type Draft: Send + 'static;
    type New: Send + 'static;
    type Changes: Send + 'static;

    /// Used in messages, e.g. "Experience not found".
    const LABEL: &'static str;
    const NOT_FOUND_CODE: &'static str;

    fn validate(draft: Self::Draft) -> Result<Self::New, ValidationError>;
}

fn trimmed(value: Option<String>) -> String {
    value.unwrap_or_default().trim().to_string()
}

impl ResumeSection for Experience {
    type Draft = ExperienceDraft;
    type New = NewExperience;
    type Changes = ExperienceChanges;

    const LABEL: &'static str = "Experience";
    const NOT_FOUND_CODE: &'static str = "EXPERIENCE_NOT_FOUND";

    fn validate(draft: ExperienceDraft) -> Result<NewExperience, ValidationError> {
        RequiredFields::new()
            .text("title", draft.title.as_deref())
            .text("company", draft.company.as_deref())
            .text("period", draft.period.as_deref())
            .text("description", draft.description.as_deref())
            .finish()?;

        Ok(NewExperience {
            title: trimmed(draft.title),
            company: trimmed(draft.company),
            period: trimmed(draft.period),
            description: draft.description.unwrap_or_default(),
            achievements: draft.achievements.unwrap_or_default(),
            order: draft.order.unwrap_or(0),
        })
    }
}

impl ResumeSection for Education {
    type Draft = EducationDraft;
    type New = NewEducation;
    type Changes = EducationChanges;

    const LABEL: &'static str = "Education";
    const NOT_FOUND_CODE: &'static str = "EDUCATION_NOT_FOUND";

    fn validate(draft: EducationDraft) -> Result<NewEducation, ValidationError> {
        RequiredFields::new()
            .text("degree", draft.degree.as_deref())
            .text("school", draft.school.as_deref())
            .text("period", draft.period.as_deref())
            .finish()?;

        Ok(NewEducation {
            degree: trimmed(draft.degree),
            school: trimmed(draft.school),
            period: trimmed(draft.period),
            achievements: draft.achievements.unwrap_or_default(),
            order: draft.order.unwrap_or(0),
        })
    }
}

impl ResumeSection for SkillCategory {
    type Draft = SkillCategoryDraft;
    type New = NewSkillCategory;
    type Changes = SkillCategoryChanges;

    const LABEL: &'static str = "Skill category";
    const NOT_FOUND_CODE: &'static str = "SKILL_CATEGORY_NOT_FOUND";

    fn validate(draft: SkillCategoryDraft) -> Result<NewSkillCategory, ValidationError> {
        RequiredFields::new()
            .text("category", draft.category.as_deref())
            .present("items", draft.items.as_ref())
            .finish()?;

        Ok(NewSkillCategory {
            category: trimmed(draft.category),
            items: draft.items.unwrap_or_default(),
            order: draft.order.unwrap_or(0),
        })
    }
}

impl ResumeSection for Certification {
    type Draft = CertificationDraft;
    type New = NewCertification;
    type Changes = CertificationChanges;

    const LABEL: &'static str = "Certification";
    const NOT_FOUND_CODE: &'static str = "CERTIFICATION_NOT_FOUND";

    fn validate(draft: CertificationDraft) -> Result<NewCertification, ValidationError> {
        RequiredFields::new()
            .text("name", draft.name.as_deref())
            .finish()?;

        Ok(NewCertification {
            name: trimmed(draft.name),
            issuer: draft.issuer.unwrap_or_default(),
            date: draft.date.unwrap_or_default(),
            pdf_url: draft.pdf_url.unwrap_or_default(),
            order: draft.order.unwrap_or(0),
        })
    }
}
