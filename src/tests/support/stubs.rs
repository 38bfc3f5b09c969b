use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactDetails;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactMessageDraft, GetContactDetailsUseCase, SendContactMessageUseCase,
    UpdateContactDetailsUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactDetailsChanges;
use crate::modules::currency::application::ports::outgoing::{
    GeoLocator, LookupError, RatesProvider, RatesUnavailable,
};
use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};
use crate::modules::pricing::application::domain::entities::PricingPlan;
use crate::modules::pricing::application::ports::incoming::use_cases::{
    CreatePricingPlanUseCase, DeletePricingPlanUseCase, GetPricingPlanUseCase,
    ListPricingPlansUseCase, PricingError, PricingPlanDraft, UpdatePricingPlanUseCase,
};
use crate::modules::pricing::application::ports::outgoing::pricing_repository::PricingPlanChanges;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, UpdateProjectData,
};
use crate::modules::resume::application::domain::section::ResumeSection;
use crate::modules::resume::application::ports::incoming::use_cases::{
    CreateResumeEntryUseCase, DeleteResumeEntryUseCase, GetResumeEntryUseCase,
    ListResumeEntriesUseCase, ResumeError, UpdateResumeEntryUseCase,
};
use crate::modules::service::application::domain::entities::ServiceOffering;
use crate::modules::service::application::ports::incoming::use_cases::{
    CreateServiceUseCase, DeleteServiceUseCase, GetServiceUseCase, ListServicesUseCase,
    ServiceDraft, ServiceError, UpdateServiceUseCase,
};
use crate::modules::service::application::ports::outgoing::service_repository::ServiceChanges;
use crate::modules::version::application::domain::entities::VersionRecord;
use crate::modules::version::application::ports::incoming::use_cases::{
    GetVersionUseCase, UpdateVersionUseCase, VersionError,
};

/// Placeholder for every use case and port a test does not exercise.
#[derive(Default, Clone, Copy)]
pub struct Unused;

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

#[async_trait]
impl CreateProjectUseCase for Unused {
    async fn execute(&self, _data: CreateProjectData) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectsUseCase for Unused {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleProjectUseCase for Unused {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProjectUseCase for Unused {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<Project, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectUseCase for Unused {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Pricing
 * -------------------------------------------------- */

#[async_trait]
impl ListPricingPlansUseCase for Unused {
    async fn execute(&self) -> Result<Vec<PricingPlan>, PricingError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPricingPlanUseCase for Unused {
    async fn execute(&self, _id: Uuid) -> Result<PricingPlan, PricingError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreatePricingPlanUseCase for Unused {
    async fn execute(&self, _draft: PricingPlanDraft) -> Result<PricingPlan, PricingError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdatePricingPlanUseCase for Unused {
    async fn execute(
        &self,
        _id: Uuid,
        _changes: PricingPlanChanges,
    ) -> Result<PricingPlan, PricingError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeletePricingPlanUseCase for Unused {
    async fn execute(&self, _id: Uuid) -> Result<(), PricingError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Services
 * -------------------------------------------------- */

#[async_trait]
impl ListServicesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetServiceUseCase for Unused {
    async fn execute(&self, _id: Uuid) -> Result<ServiceOffering, ServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateServiceUseCase for Unused {
    async fn execute(&self, _draft: ServiceDraft) -> Result<ServiceOffering, ServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateServiceUseCase for Unused {
    async fn execute(
        &self,
        _id: Uuid,
        _changes: ServiceChanges,
    ) -> Result<ServiceOffering, ServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteServiceUseCase for Unused {
    async fn execute(&self, _id: Uuid) -> Result<(), ServiceError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Resume sections (any section type)
 * -------------------------------------------------- */

#[async_trait]
impl<S: ResumeSection> ListResumeEntriesUseCase<S> for Unused {
    async fn execute(&self) -> Result<Vec<S>, ResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl<S: ResumeSection> GetResumeEntryUseCase<S> for Unused {
    async fn execute(&self, _id: Uuid) -> Result<S, ResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl<S: ResumeSection> CreateResumeEntryUseCase<S> for Unused {
    async fn execute(&self, _draft: S::Draft) -> Result<S, ResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl<S: ResumeSection> UpdateResumeEntryUseCase<S> for Unused {
    async fn execute(&self, _id: Uuid, _changes: S::Changes) -> Result<S, ResumeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl<S: ResumeSection> DeleteResumeEntryUseCase<S> for Unused {
    async fn execute(&self, _id: Uuid) -> Result<(), ResumeError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Contact and version singletons
 * -------------------------------------------------- */

#[async_trait]
impl GetContactDetailsUseCase for Unused {
    async fn execute(&self) -> Result<ContactDetails, ContactError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateContactDetailsUseCase for Unused {
    async fn execute(
        &self,
        _changes: ContactDetailsChanges,
    ) -> Result<ContactDetails, ContactError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SendContactMessageUseCase for Unused {
    async fn execute(&self, _draft: ContactMessageDraft) -> Result<(), ContactError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetVersionUseCase for Unused {
    async fn execute(&self) -> Result<VersionRecord, VersionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateVersionUseCase for Unused {
    async fn execute(&self, _version: Option<String>) -> Result<VersionRecord, VersionError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Outgoing ports behind the media and currency bundles
 * -------------------------------------------------- */

#[async_trait]
impl ObjectStorage for Unused {
    async fn put_public_object(
        &self,
        _object_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        unimplemented!("Not used in this test")
    }

    async fn delete_object(&self, _object_name: &str) -> Result<(), StorageError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RatesProvider for Unused {
    async fn latest_usd_rates(&self) -> Result<HashMap<String, f64>, RatesUnavailable> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GeoLocator for Unused {
    async fn currency_for(&self, _ip: IpAddr) -> Result<Option<String>, LookupError> {
        unimplemented!("Not used in this test")
    }
}
