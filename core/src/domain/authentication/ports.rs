use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::AuthSession,
        value_objects::{AuthenticatedSession, Identity, LoginInput, RegisterUserInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthSessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: AuthSession,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn get_by_token_hash(
        &self,
        token_hash: String,
    ) -> impl Future<Output = Result<Option<AuthSession>, CoreError>> + Send;

    fn delete_session(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<AuthenticatedSession, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthenticatedSession, CoreError>> + Send;

    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn logout(&self, token: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
