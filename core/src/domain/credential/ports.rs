use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, credential::entities::Credential};

#[cfg_attr(test, mockall::automock)]
pub trait CredentialRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Credential>, CoreError>> + Send;

    fn create_credential(
        &self,
        credential: Credential,
    ) -> impl Future<Output = Result<Credential, CoreError>> + Send;
}
