use crate::{domain::credential::entities::Credential, entity::credentials};

impl From<&credentials::Model> for Credential {
    fn from(model: &credentials::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            password_hash: model.password_hash.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<credentials::Model> for Credential {
    fn from(model: credentials::Model) -> Self {
        Self::from(&model)
    }
}
