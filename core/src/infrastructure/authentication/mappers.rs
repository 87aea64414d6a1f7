use crate::{domain::authentication::entities::AuthSession, entity::auth_sessions};

impl From<&auth_sessions::Model> for AuthSession {
    fn from(model: &auth_sessions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash.clone(),
            created_at: model.created_at.to_utc(),
            expires_at: model.expires_at.to_utc(),
        }
    }
}

impl From<auth_sessions::Model> for AuthSession {
    fn from(model: auth_sessions::Model) -> Self {
        Self::from(&model)
    }
}
