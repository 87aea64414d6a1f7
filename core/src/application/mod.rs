use crate::{
    domain::common::{LarderConfig, services::Service},
    infrastructure::{
        authentication::repositories::auth_session_repository::PostgresAuthSessionRepository,
        credential::repositories::credential_repository::PostgresCredentialRepository,
        crypto::argon2_hasher::Argon2Hasher,
        db::postgres::Postgres,
        food::repositories::{
            barcode_repository::PostgresBarcodeRepository, food_repository::PostgresFoodRepository,
        },
        health::repositories::health_repository::PostgresHealthCheckRepository,
        pantry::repositories::pantry_repository::PostgresPantryRepository,
        recipe::repositories::{
            rating_repository::PostgresRatingRepository,
            recipe_repository::PostgresRecipeRepository,
            recipe_usage_repository::PostgresRecipeUsageRepository,
        },
        shopping::repositories::shopping_repository::PostgresShoppingRepository,
        user::repositories::user_repository::PostgresUserRepository,
        waste::repositories::waste_repository::PostgresWasteRepository,
    },
};

/// The service wired against Postgres, as the API consumes it.
pub type LarderService = Service<
    PostgresUserRepository,
    PostgresCredentialRepository,
    Argon2Hasher,
    PostgresAuthSessionRepository,
    PostgresFoodRepository,
    PostgresPantryRepository,
    PostgresRecipeRepository,
    PostgresRecipeUsageRepository,
    PostgresRatingRepository,
    PostgresShoppingRepository,
    PostgresWasteRepository,
    PostgresBarcodeRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresCredentialRepository::new(db.clone()),
        Argon2Hasher::new(),
        PostgresAuthSessionRepository::new(db.clone()),
        PostgresFoodRepository::new(db.clone()),
        PostgresPantryRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresRecipeUsageRepository::new(db.clone()),
        PostgresRatingRepository::new(db.clone()),
        PostgresShoppingRepository::new(db.clone()),
        PostgresWasteRepository::new(db.clone()),
        PostgresBarcodeRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    ))
}
