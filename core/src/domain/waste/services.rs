use uuid::Uuid;

use crate::domain::{
    authentication::{ports::AuthSessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::ports::{BarcodeRepository, FoodRepository},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::{
        entities::WastedFood,
        ports::{WasteRepository, WasteService},
    },
};

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> WasteService
    for Service<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC>
where
    U: UserRepository,
    C: CredentialRepository,
    H: HasherRepository,
    AS: AuthSessionRepository,
    F: FoodRepository,
    P: PantryRepository,
    R: RecipeRepository,
    RU: RecipeUsageRepository,
    RA: RatingRepository,
    SL: ShoppingRepository,
    W: WasteRepository,
    B: BarcodeRepository,
    HC: HealthCheckRepository,
{
    async fn get_wasted_food(&self, identity: Identity) -> Result<Vec<WastedFood>, CoreError> {
        self.waste_repository.get_wasted(identity.id()).await
    }

    async fn delete_wasted_food(
        &self,
        identity: Identity,
        waste_id: Uuid,
    ) -> Result<(), CoreError> {
        let record = self
            .waste_repository
            .get_by_id(identity.id(), waste_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.waste_repository.delete_wasted(record.id).await
    }
}
