use crate::domain::{
    authentication::ports::AuthSessionRepository,
    common::policies::LarderPolicy,
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::ports::{BarcodeRepository, FoodRepository},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::ports::WasteRepository,
};

/// Aggregate over every port the use-cases need. Each domain implements its
/// service trait on this one type, so the API holds a single service value.
#[derive(Debug, Clone)]
pub struct Service<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC>
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
    pub user_repository: U,
    pub credential_repository: C,
    pub hasher_repository: H,
    pub auth_session_repository: AS,
    pub food_repository: F,
    pub pantry_repository: P,
    pub recipe_repository: R,
    pub recipe_usage_repository: RU,
    pub rating_repository: RA,
    pub shopping_repository: SL,
    pub waste_repository: W,
    pub barcode_repository: B,
    pub health_check_repository: HC,
    pub policy: LarderPolicy,
}

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> Service<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        credential_repository: C,
        hasher_repository: H,
        auth_session_repository: AS,
        food_repository: F,
        pantry_repository: P,
        recipe_repository: R,
        recipe_usage_repository: RU,
        rating_repository: RA,
        shopping_repository: SL,
        waste_repository: W,
        barcode_repository: B,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            credential_repository,
            hasher_repository,
            auth_session_repository,
            food_repository,
            pantry_repository,
            recipe_repository,
            recipe_usage_repository,
            rating_repository,
            shopping_repository,
            waste_repository,
            barcode_repository,
            health_check_repository,
            policy: LarderPolicy::new(),
        }
    }
}
