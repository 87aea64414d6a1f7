use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        authentication::{entities::AuthSession, ports::AuthSessionRepository},
        common::entities::app_errors::CoreError,
    },
    entity::auth_sessions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAuthSessionRepository {
    pub db: DatabaseConnection,
}

impl PostgresAuthSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AuthSessionRepository for PostgresAuthSessionRepository {
    async fn create_session(&self, session: AuthSession) -> Result<AuthSession, CoreError> {
        let active_model = ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token_hash: Set(session.token_hash.clone()),
            created_at: Set(session.created_at.fixed_offset()),
            expires_at: Set(session.expires_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create auth session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AuthSession::from(created))
    }

    async fn get_by_token_hash(&self, token_hash: String) -> Result<Option<AuthSession>, CoreError> {
        let session = Entity::find()
            .filter(Column::TokenHash.eq(token_hash))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get auth session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(session.map(AuthSession::from))
    }

    async fn delete_session(&self, id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete auth session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
