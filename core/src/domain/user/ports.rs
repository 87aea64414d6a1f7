use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
