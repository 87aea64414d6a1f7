use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::LarderPolicy},
    shopping::{entities::ShoppingList, ports::ShoppingPolicy},
};

impl ShoppingPolicy for LarderPolicy {
    async fn can_access_list(
        &self,
        identity: &Identity,
        list: &ShoppingList,
    ) -> Result<bool, CoreError> {
        let user = self.user_from_identity(identity);

        Ok(user.id == list.user_id || user.is_admin())
    }
}
