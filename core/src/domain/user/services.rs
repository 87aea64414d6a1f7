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
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
    waste::ports::WasteRepository,
};

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> UserService
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
    async fn get_profile(&self, identity: Identity) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(user)
    }
}
