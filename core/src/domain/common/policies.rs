use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::User,
};

/// Enforces a policy decision, turning a refusal into `CoreError::Forbidden`.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(err) => Err(err),
    }
}

#[derive(Debug, Clone, Default)]
pub struct LarderPolicy;

impl LarderPolicy {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn user_from_identity<'a>(&self, identity: &'a Identity) -> &'a User {
        match identity {
            Identity::User(user) => user,
        }
    }
}
