use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        credential::{entities::Credential, ports::CredentialRepository},
    },
    entity::credentials::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresCredentialRepository {
    pub db: DatabaseConnection,
}

impl PostgresCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CredentialRepository for PostgresCredentialRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Credential>, CoreError> {
        let credential = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get credential: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(credential.map(Credential::from))
    }

    async fn create_credential(&self, credential: Credential) -> Result<Credential, CoreError> {
        let active_model = ActiveModel {
            id: Set(credential.id),
            user_id: Set(credential.user_id),
            password_hash: Set(credential.password_hash.clone()),
            created_at: Set(credential.created_at.fixed_offset()),
            updated_at: Set(credential.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create credential: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Credential::from(created))
    }
}
