use crate::domain::{
    authentication::ports::AuthSessionRepository,
    common::{entities::app_errors::CoreError, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::ports::{BarcodeRepository, FoodRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    pantry::ports::PantryRepository,
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::ports::WasteRepository,
};

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
