use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::LarderPolicy},
    recipe::{entities::Recipe, ports::RecipePolicy},
};

impl RecipePolicy for LarderPolicy {
    async fn can_update_recipe(
        &self,
        identity: &Identity,
        recipe: &Recipe,
    ) -> Result<bool, CoreError> {
        let user = self.user_from_identity(identity);

        Ok(user.id == recipe.user_id || user.is_admin())
    }

    async fn can_delete_recipe(
        &self,
        identity: &Identity,
        recipe: &Recipe,
    ) -> Result<bool, CoreError> {
        let user = self.user_from_identity(identity);

        Ok(user.id == recipe.user_id || user.is_admin())
    }
}
