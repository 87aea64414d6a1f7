use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            date_of_birth: model.date_of_birth.clone(),
            role: model.role.clone(),
            registered_on: model.registered_on.to_utc(),
            current_login: model.current_login.map(|dt| dt.to_utc()),
            last_login: model.last_login.map(|dt| dt.to_utc()),
            current_login_ip: model.current_login_ip.clone(),
            last_login_ip: model.last_login_ip.clone(),
            total_logins: model.total_logins,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
