use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::AuthSessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::ports::{BarcodeRepository, FoodRepository, FoodService},
    health::ports::HealthCheckRepository,
    pantry::{ports::PantryRepository, value_objects::PantryStock},
    recipe::{
        entities::{InUseRecipe, Ingredient, Rating, Recipe, RecipeConfig},
        helpers::{is_makeable, plan_consumption},
        ports::{
            RatingRepository, RecipePolicy, RecipeRepository, RecipeService, RecipeUsageRepository,
        },
        value_objects::{
            CreateRecipeInput, InUseRecipeDetails, RecipeDetails, RecipeFilter, RecipeOverview,
            UpdateRecipeInput,
        },
    },
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::ports::WasteRepository,
};

pub fn mean_rating(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    let total: i32 = ratings.iter().map(|rating| rating.value).sum();
    Some(f64::from(total) / ratings.len() as f64)
}

fn validate_rating_value(value: i32) -> Result<(), CoreError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Invalid(
            "rating must be between 1 and 5".to_string(),
        ))
    }
}

fn validate_recipe_fields(
    name: &str,
    serves: i32,
    calories: Option<f64>,
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Invalid(
            "recipe name must not be empty".to_string(),
        ));
    }
    if serves < 1 {
        return Err(CoreError::Invalid("serves must be at least 1".to_string()));
    }
    if let Some(calories) = calories {
        if !calories.is_finite() || calories < 0.0 {
            return Err(CoreError::Invalid(
                "calories must not be negative".to_string(),
            ));
        }
    }

    Ok(())
}

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> RecipeService
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
    async fn get_recipes(
        &self,
        identity: Identity,
        filter: RecipeFilter,
    ) -> Result<Vec<RecipeOverview>, CoreError> {
        let can_make_filter = filter.can_make;
        let recipes = self
            .recipe_repository
            .fetch_recipes(identity.id(), filter)
            .await?;

        let pantry = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&pantry);

        let ids: Vec<Uuid> = recipes.iter().map(|recipe| recipe.id).collect();
        let mut by_recipe: HashMap<Uuid, Vec<Ingredient>> = HashMap::new();
        for ingredient in self.recipe_repository.fetch_ingredients(ids).await? {
            by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push(ingredient);
        }

        let overviews = recipes
            .into_iter()
            .map(|recipe| {
                let ingredients = by_recipe.remove(&recipe.id).unwrap_or_default();
                let can_make = is_makeable(&ingredients, &stock);
                RecipeOverview { recipe, can_make }
            })
            .filter(|overview| match can_make_filter {
                Some(wanted) => overview.can_make == wanted,
                None => true,
            })
            .collect();

        Ok(overviews)
    }

    async fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<RecipeDetails, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;

        let pantry = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&pantry);
        let can_make = is_makeable(&ingredients, &stock);

        Ok(RecipeDetails {
            recipe,
            ingredients,
            can_make,
        })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), name = %input.name))]
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<RecipeDetails, CoreError> {
        validate_recipe_fields(&input.name, input.serves, input.calories)?;

        let recipe = Recipe::new(RecipeConfig {
            user_id: identity.id(),
            name: input.name.trim().to_string(),
            method: input.method,
            serves: input.serves,
            calories: input.calories,
        });

        let mut ingredients = Vec::with_capacity(input.ingredients.len());
        for entry in input.ingredients {
            let qfood = self.resolve_quantified_food(entry).await?;
            ingredients.push(Ingredient::new(recipe.id, qfood));
        }

        let recipe = self
            .recipe_repository
            .create_recipe(recipe, ingredients.clone())
            .await?;

        tracing::info!(recipe_id = %recipe.id, "created recipe");

        let pantry = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&pantry);
        let can_make = is_makeable(&ingredients, &stock);

        Ok(RecipeDetails {
            recipe,
            ingredients,
            can_make,
        })
    }

    async fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<RecipeDetails, CoreError> {
        let mut recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_update_recipe(&identity, &recipe).await,
            "only the recipe owner can edit it",
        )?;

        if let Some(name) = &input.name {
            validate_recipe_fields(name, input.serves.unwrap_or(recipe.serves), input.calories)?;
        } else {
            validate_recipe_fields(
                &recipe.name,
                input.serves.unwrap_or(recipe.serves),
                input.calories,
            )?;
        }

        recipe.update(input.name, input.method, input.serves, input.calories);
        let recipe = self.recipe_repository.update_recipe(recipe).await?;

        let ingredients = match input.ingredients {
            Some(entries) => {
                let mut replacement = Vec::with_capacity(entries.len());
                for entry in entries {
                    let qfood = self.resolve_quantified_food(entry).await?;
                    replacement.push(Ingredient::new(recipe.id, qfood));
                }
                self.recipe_repository
                    .replace_ingredients(recipe.id, replacement.clone())
                    .await?;
                replacement
            }
            None => self.recipe_repository.get_ingredients(recipe.id).await?,
        };

        let pantry = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&pantry);
        let can_make = is_makeable(&ingredients, &stock);

        Ok(RecipeDetails {
            recipe,
            ingredients,
            can_make,
        })
    }

    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_delete_recipe(&identity, &recipe).await,
            "only the recipe owner can delete it",
        )?;

        self.recipe_repository.delete_recipe(recipe.id).await?;

        tracing::info!(recipe_id = %recipe.id, "deleted recipe");

        Ok(())
    }

    async fn rate_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        value: i32,
    ) -> Result<Recipe, CoreError> {
        validate_rating_value(value)?;

        let mut recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.rating_repository
            .upsert_rating(Rating::new(identity.id(), recipe.id, value))
            .await?;

        let ratings = self.rating_repository.get_for_recipe(recipe.id).await?;
        recipe.rating = mean_rating(&ratings);

        self.recipe_repository.update_recipe(recipe).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn use_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<InUseRecipe, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;
        let pantry = self.pantry_repository.get_items(identity.id()).await?;

        let plan = plan_consumption(&ingredients, &pantry)?;

        let in_use = self
            .recipe_usage_repository
            .begin_use(InUseRecipe::new(identity.id(), recipe.id), plan)
            .await?;

        tracing::info!(recipe_id = %recipe.id, "recipe moved to in use");

        Ok(in_use)
    }

    async fn get_in_use_recipes(
        &self,
        identity: Identity,
    ) -> Result<Vec<InUseRecipeDetails>, CoreError> {
        let markers = self
            .recipe_usage_repository
            .get_in_use(identity.id())
            .await?;

        let mut details = Vec::with_capacity(markers.len());
        for in_use in markers {
            if let Some(recipe) = self.recipe_repository.get_by_id(in_use.recipe_id).await? {
                details.push(InUseRecipeDetails { in_use, recipe });
            }
        }

        Ok(details)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn complete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        rating: Option<i32>,
    ) -> Result<(), CoreError> {
        let in_use = self
            .recipe_usage_repository
            .find_in_use(identity.id(), recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(value) = rating {
            self.rate_recipe(identity, recipe_id, value).await?;
        }

        self.recipe_usage_repository.complete_use(in_use.id).await?;

        tracing::info!(recipe_id = %recipe_id, "recipe completed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::MockAuthSessionRepository,
        credential::ports::MockCredentialRepository,
        crypto::ports::MockHasherRepository,
        food::{
            entities::QuantifiedFood,
            ports::{MockBarcodeRepository, MockFoodRepository},
        },
        health::ports::MockHealthCheckRepository,
        pantry::{entities::PantryItem, ports::MockPantryRepository},
        recipe::ports::{
            MockRatingRepository, MockRecipeRepository, MockRecipeUsageRepository,
        },
        shopping::ports::MockShoppingRepository,
        user::{
            entities::{User, UserConfig},
            ports::MockUserRepository,
        },
        waste::ports::MockWasteRepository,
    };

    type MockService = Service<
        MockUserRepository,
        MockCredentialRepository,
        MockHasherRepository,
        MockAuthSessionRepository,
        MockFoodRepository,
        MockPantryRepository,
        MockRecipeRepository,
        MockRecipeUsageRepository,
        MockRatingRepository,
        MockShoppingRepository,
        MockWasteRepository,
        MockBarcodeRepository,
        MockHealthCheckRepository,
    >;

    fn mock_service() -> MockService {
        Service::new(
            MockUserRepository::new(),
            MockCredentialRepository::new(),
            MockHasherRepository::new(),
            MockAuthSessionRepository::new(),
            MockFoodRepository::new(),
            MockPantryRepository::new(),
            MockRecipeRepository::new(),
            MockRecipeUsageRepository::new(),
            MockRatingRepository::new(),
            MockShoppingRepository::new(),
            MockWasteRepository::new(),
            MockBarcodeRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn test_identity() -> Identity {
        Identity::User(User::new(UserConfig {
            email: "cook@example.com".to_string(),
            first_name: "Avery".to_string(),
            last_name: "Cook".to_string(),
            date_of_birth: "01/01/1990".to_string(),
            role: "user".to_string(),
        }))
    }

    fn qfood(name: &str, quantity: f64, unit: &str) -> QuantifiedFood {
        QuantifiedFood {
            id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    fn test_recipe(user_id: Uuid, name: &str) -> Recipe {
        Recipe::new(RecipeConfig {
            user_id,
            name: name.to_string(),
            method: "mix and bake".to_string(),
            serves: 2,
            calories: Some(350.0),
        })
    }

    #[tokio::test]
    async fn use_recipe_commits_the_planned_takes() {
        let identity = test_identity();
        let user_id = identity.id();
        let recipe = test_recipe(user_id, "flatbread");
        let recipe_id = recipe.id;

        let pantry_row = PantryItem::new(user_id, qfood("flour", 500.0, "g"), None);
        let pantry_row_id = pantry_row.id;

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });
        service
            .recipe_repository
            .expect_get_ingredients()
            .returning(move |id| {
                let ingredient = Ingredient::new(id, qfood("flour", 200.0, "g"));
                Box::pin(async move { Ok(vec![ingredient]) })
            });
        service
            .pantry_repository
            .expect_get_items()
            .returning(move |_| {
                let row = pantry_row.clone();
                Box::pin(async move { Ok(vec![row]) })
            });
        service
            .recipe_usage_repository
            .expect_begin_use()
            .withf(move |in_use, plan| {
                in_use.recipe_id == recipe_id
                    && plan.len() == 1
                    && plan[0].pantry_item_id == pantry_row_id
                    && plan[0].take == 200.0
                    && plan[0].remaining == 300.0
            })
            .returning(|in_use, _| Box::pin(async move { Ok(in_use) }));

        let in_use = service
            .use_recipe(identity, recipe_id)
            .await
            .expect("use succeeds");

        assert_eq!(in_use.recipe_id, recipe_id);
        assert_eq!(in_use.user_id, user_id);
    }

    #[tokio::test]
    async fn use_recipe_with_short_stock_fails_and_commits_nothing() {
        let identity = test_identity();
        let user_id = identity.id();
        let recipe = test_recipe(user_id, "omelette");
        let recipe_id = recipe.id;

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });
        service
            .recipe_repository
            .expect_get_ingredients()
            .returning(move |id| {
                let ingredient = Ingredient::new(id, qfood("egg", 3.0, "count"));
                Box::pin(async move { Ok(vec![ingredient]) })
            });
        service
            .pantry_repository
            .expect_get_items()
            .returning(move |_| {
                let row = PantryItem::new(user_id, qfood("egg", 2.0, "count"), None);
                Box::pin(async move { Ok(vec![row]) })
            });
        service.recipe_usage_repository.expect_begin_use().times(0);

        let err = service
            .use_recipe(identity, recipe_id)
            .await
            .expect_err("stock is short");

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                food: "egg".to_string()
            }
        );
    }

    #[tokio::test]
    async fn use_recipe_unknown_recipe_is_not_found() {
        let identity = test_identity();

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service
            .use_recipe(identity, Uuid::new_v4())
            .await
            .expect_err("no such recipe");

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn complete_recipe_records_rating_and_recomputes_the_mean() {
        let identity = test_identity();
        let user_id = identity.id();
        let recipe = test_recipe(user_id, "stew");
        let recipe_id = recipe.id;
        let in_use = InUseRecipe::new(user_id, recipe_id);
        let in_use_id = in_use.id;

        let mut service = mock_service();
        service
            .recipe_usage_repository
            .expect_find_in_use()
            .returning(move |_, _| {
                let marker = in_use.clone();
                Box::pin(async move { Ok(Some(marker)) })
            });
        service
            .rating_repository
            .expect_upsert_rating()
            .withf(move |rating| rating.recipe_id == recipe_id && rating.value == 5)
            .returning(|rating| Box::pin(async move { Ok(rating) }));
        service
            .rating_repository
            .expect_get_for_recipe()
            .returning(move |id| {
                let ratings = vec![
                    Rating::new(Uuid::new_v4(), id, 4),
                    Rating::new(Uuid::new_v4(), id, 5),
                ];
                Box::pin(async move { Ok(ratings) })
            });
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });
        service
            .recipe_repository
            .expect_update_recipe()
            .withf(|recipe| recipe.rating == Some(4.5))
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        service
            .recipe_usage_repository
            .expect_complete_use()
            .withf(move |id| *id == in_use_id)
            .returning(|_| Box::pin(async { Ok(()) }));

        service
            .complete_recipe(identity, recipe_id, Some(5))
            .await
            .expect("completion succeeds");
    }

    #[tokio::test]
    async fn complete_without_in_use_marker_is_not_found() {
        let identity = test_identity();

        let mut service = mock_service();
        service
            .recipe_usage_repository
            .expect_find_in_use()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service
            .complete_recipe(identity, Uuid::new_v4(), None)
            .await
            .expect_err("nothing in use");

        assert_eq!(err, CoreError::NotFound);
    }

    #[test]
    fn mean_rating_averages_all_values() {
        let recipe_id = Uuid::new_v4();
        let ratings = vec![
            Rating::new(Uuid::new_v4(), recipe_id, 4),
            Rating::new(Uuid::new_v4(), recipe_id, 5),
            Rating::new(Uuid::new_v4(), recipe_id, 3),
        ];

        assert_eq!(mean_rating(&ratings), Some(4.0));
        assert_eq!(mean_rating(&[]), None);
    }
}
