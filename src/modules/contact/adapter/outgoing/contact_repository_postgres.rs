use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_details::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::{ContactDetails, CONTACT_DETAILS_ID};
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactDetailsChanges, ContactRepository, ContactRepositoryError,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn get(&self) -> Result<Option<ContactDetails>, ContactRepositoryError> {
        Entity::find_by_id(CONTACT_DETAILS_ID.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_details)
            .transpose()
    }

    async fn upsert(
        &self,
        changes: ContactDetailsChanges,
        default_email: &str,
    ) -> Result<ContactDetails, ContactRepositoryError> {
        // Columns present in the request are the only ones touched on conflict.
        let mut on_conflict = OnConflict::column(Column::Id);
        if changes.email.is_some() {
            on_conflict.update_column(Column::Email);
        }
        if changes.phone.is_some() {
            on_conflict.update_column(Column::Phone);
        }
        if changes.location.is_some() {
            on_conflict.update_column(Column::Location);
        }
        if changes.social_links.is_some() {
            // jsonb `||` keeps stored keys and overwrites the supplied ones
            on_conflict.value(
                Column::SocialLinks,
                Expr::cust("contact_details.social_links || EXCLUDED.social_links"),
            );
        }
        on_conflict.update_column(Column::UpdatedAt);

        let social_links = changes.social_links.unwrap_or_default();
        let row = ActiveModel {
            id: Set(CONTACT_DETAILS_ID.to_string()),
            email: Set(changes.email.unwrap_or_else(|| default_email.to_string())),
            phone: Set(changes.phone.unwrap_or_default()),
            location: Set(changes.location.unwrap_or_default()),
            social_links: Set(serde_json::to_value(&social_links)
                .map_err(|e| ContactRepositoryError::SerializationError(e.to_string()))?),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let saved = Entity::insert(row)
            .on_conflict(on_conflict.to_owned())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_details(saved)
    }
}

fn model_to_details(
    model: contact_details::Model,
) -> Result<ContactDetails, ContactRepositoryError> {
    let social_links: BTreeMap<String, String> = serde_json::from_value(model.social_links)
        .map_err(|e| ContactRepositoryError::SerializationError(e.to_string()))?;

    Ok(ContactDetails {
        email: model.email,
        phone: model.phone,
        location: model.location,
        social_links,
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
