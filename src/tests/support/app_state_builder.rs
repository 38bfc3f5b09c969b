use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::service::{AllowedEmailsPolicy, SignInWithGoogleService};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::currency::adapter::outgoing::MemoryRatesCache;
use crate::modules::currency::application::currency_use_cases::CurrencyUseCases;
use crate::modules::media::application::domain::upload_policy::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::pricing::application::pricing_use_cases::PricingUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, SkillCategory,
};
use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::resume_use_cases::{ResumeUseCases, SectionUseCases};
use crate::modules::service::application::service_use_cases::ServiceUseCases;
use crate::modules::version::application::version_use_cases::VersionUseCases;
use crate::tests::support::auth_helper::{StubIdentityVerifier, ADMIN_EMAIL};
use crate::tests::support::stubs::Unused;
use crate::AppState;

fn unused_section<S: ResumeSection>() -> SectionUseCases<S> {
    SectionUseCases {
        list: Arc::new(Unused),
        get: Arc::new(Unused),
        create: Arc::new(Unused),
        update: Arc::new(Unused),
        delete: Arc::new(Unused),
    }
}

/// Every bundle starts as a stub; tests swap in only what they exercise.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    pricing: PricingUseCases,
    service: ServiceUseCases,
    resume: ResumeUseCases,
    contact: ContactUseCases,
    version: VersionUseCases,
    media: MediaUseCases,
    currency: CurrencyUseCases,
    auth: AuthUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                update: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            pricing: PricingUseCases {
                list: Arc::new(Unused),
                get: Arc::new(Unused),
                create: Arc::new(Unused),
                update: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            service: ServiceUseCases {
                list: Arc::new(Unused),
                get: Arc::new(Unused),
                create: Arc::new(Unused),
                update: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            resume: ResumeUseCases {
                experiences: unused_section(),
                education: unused_section(),
                skills: unused_section(),
                certifications: unused_section(),
            },
            contact: ContactUseCases {
                get_details: Arc::new(Unused),
                update_details: Arc::new(Unused),
                send_message: Arc::new(Unused),
            },
            version: VersionUseCases {
                get: Arc::new(Unused),
                update: Arc::new(Unused),
            },
            media: MediaUseCases::new(Arc::new(Unused), UploadPolicy::new("test-bucket")),
            currency: CurrencyUseCases::new(
                Arc::new(Unused),
                Arc::new(MemoryRatesCache::new(Duration::from_secs(3600))),
                Arc::new(Unused),
            ),
            auth: AuthUseCases {
                sign_in: Arc::new(SignInWithGoogleService::new(
                    Arc::new(StubIdentityVerifier::default()),
                    Arc::new(AllowedEmailsPolicy::new([ADMIN_EMAIL])),
                )),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_project_use_case(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects_use_case(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project_use_case(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project_use_case(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project_use_case(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_pricing(mut self, pricing: PricingUseCases) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_service(mut self, service: ServiceUseCases) -> Self {
        self.service = service;
        self
    }

    pub fn with_experiences(mut self, section: SectionUseCases<Experience>) -> Self {
        self.resume.experiences = section;
        self
    }

    pub fn with_education(mut self, section: SectionUseCases<Education>) -> Self {
        self.resume.education = section;
        self
    }

    pub fn with_skills(mut self, section: SectionUseCases<SkillCategory>) -> Self {
        self.resume.skills = section;
        self
    }

    pub fn with_certifications(mut self, section: SectionUseCases<Certification>) -> Self {
        self.resume.certifications = section;
        self
    }

    pub fn with_contact(mut self, contact: ContactUseCases) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_version(mut self, version: VersionUseCases) -> Self {
        self.version = version;
        self
    }

    pub fn with_media(mut self, media: MediaUseCases) -> Self {
        self.media = media;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyUseCases) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_auth(mut self, auth: AuthUseCases) -> Self {
        self.auth = auth;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            pricing: self.pricing,
            service: self.service,
            resume: self.resume,
            contact: self.contact,
            version: self.version,
            media: self.media,
            currency: self.currency,
            auth: self.auth,
        })
    }
}
