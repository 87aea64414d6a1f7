use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(user: &User) -> ActiveModel {
    ActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        date_of_birth: Set(user.date_of_birth.clone()),
        role: Set(user.role.clone()),
        registered_on: Set(user.registered_on.fixed_offset()),
        current_login: Set(user.current_login.map(|dt| dt.fixed_offset())),
        last_login: Set(user.last_login.map(|dt| dt.fixed_offset())),
        current_login_ip: Set(user.current_login_ip.clone()),
        last_login_ip: Set(user.last_login_ip.clone()),
        total_logins: Set(user.total_logins),
        created_at: Set(user.created_at.fixed_offset()),
        updated_at: Set(user.updated_at.fixed_offset()),
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(user.map(User::from))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created = Entity::insert(to_active_model(&user))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated = Entity::update(to_active_model(&user))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(updated))
    }
}
