use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::AuthSessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::{
        ports::{BarcodeRepository, FoodRepository, FoodService},
        value_objects::NewQuantifiedFood,
    },
    health::ports::HealthCheckRepository,
    pantry::{entities::PantryItem, ports::PantryRepository, shelf_life, value_objects::PantryStock},
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::{
        entities::{ShoppingItem, ShoppingList},
        helpers::shortfall_items,
        ports::{ShoppingPolicy, ShoppingRepository, ShoppingService},
        value_objects::ShoppingListDetails,
    },
    user::ports::UserRepository,
    waste::ports::WasteRepository,
};

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> ShoppingService
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
    async fn get_shopping_lists(
        &self,
        identity: Identity,
    ) -> Result<Vec<ShoppingList>, CoreError> {
        self.shopping_repository.get_lists(identity.id()).await
    }

    async fn create_shopping_list(
        &self,
        identity: Identity,
        name: String,
    ) -> Result<ShoppingList, CoreError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid(
                "shopping list name must not be empty".to_string(),
            ));
        }

        self.shopping_repository
            .create_list(ShoppingList::new(identity.id(), name), Vec::new())
            .await
    }

    async fn get_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<ShoppingListDetails, CoreError> {
        let list = self
            .shopping_repository
            .get_list(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_list(&identity, &list).await,
            "only the list owner can view it",
        )?;

        let items = self.shopping_repository.get_items(list.id).await?;

        Ok(ShoppingListDetails { list, items })
    }

    async fn delete_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<(), CoreError> {
        let list = self
            .shopping_repository
            .get_list(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_list(&identity, &list).await,
            "only the list owner can delete it",
        )?;

        self.shopping_repository.delete_list(list.id).await
    }

    async fn add_shopping_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        input: NewQuantifiedFood,
    ) -> Result<ShoppingItem, CoreError> {
        let list = self
            .shopping_repository
            .get_list(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_list(&identity, &list).await,
            "only the list owner can add items",
        )?;

        let qfood = self.resolve_quantified_food(input).await?;

        self.shopping_repository
            .add_item(ShoppingItem::new(list.id, qfood))
            .await
    }

    async fn remove_shopping_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), CoreError> {
        let list = self
            .shopping_repository
            .get_list(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_list(&identity, &list).await,
            "only the list owner can remove items",
        )?;

        let items = self.shopping_repository.get_items(list.id).await?;
        let item = items
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or(CoreError::NotFound)?;

        self.shopping_repository.remove_item(item.id).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn create_list_from_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<ShoppingListDetails, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;
        let pantry = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&pantry);

        let needed = shortfall_items(&ingredients, &stock);

        let list = ShoppingList::new(
            identity.id(),
            format!("Ingredients needed for {}", recipe.name),
        );

        let mut items = Vec::with_capacity(needed.len());
        for entry in needed {
            let qfood = self.resolve_quantified_food(entry).await?;
            items.push(ShoppingItem::new(list.id, qfood));
        }

        let list = self
            .shopping_repository
            .create_list(list, items.clone())
            .await?;

        tracing::info!(list_id = %list.id, items = items.len(), "created shopping list from recipe");

        Ok(ShoppingListDetails { list, items })
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn complete_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<Vec<PantryItem>, CoreError> {
        let list = self
            .shopping_repository
            .get_list(list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_list(&identity, &list).await,
            "only the list owner can complete it",
        )?;

        let items = self.shopping_repository.get_items(list.id).await?;
        let today = Utc::now().date_naive();

        // The bought items keep their quantified rows; only the owner moves
        // from the list to the pantry.
        let pantry_items: Vec<PantryItem> = items
            .into_iter()
            .map(|item| {
                let expiry = shelf_life::suggest_expiry(&item.qfood.name, today);
                PantryItem::new(list.user_id, item.qfood, Some(expiry))
            })
            .collect();

        self.shopping_repository
            .complete_list(list.id, pantry_items.clone())
            .await?;

        tracing::info!(list_id = %list.id, items = pantry_items.len(), "shopping list completed into pantry");

        Ok(pantry_items)
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
        pantry::ports::MockPantryRepository,
        recipe::{
            entities::{Ingredient, Recipe, RecipeConfig},
            ports::{MockRatingRepository, MockRecipeRepository, MockRecipeUsageRepository},
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

    fn expect_resolver_passthrough(service: &mut MockService) {
        service
            .food_repository
            .expect_get_food_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        service
            .food_repository
            .expect_create_food()
            .returning(|food| Box::pin(async move { Ok(food) }));
        service
            .food_repository
            .expect_create_quantified()
            .returning(|qfood| Box::pin(async move { Ok(qfood) }));
    }

    #[tokio::test]
    async fn delta_list_holds_only_the_shortfall() {
        let identity = test_identity();
        let user_id = identity.id();

        let recipe = Recipe::new(RecipeConfig {
            user_id,
            name: "Pancakes".to_string(),
            method: "whisk and fry".to_string(),
            serves: 4,
            calories: None,
        });
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
            .returning(|id| {
                let ingredients = vec![
                    Ingredient::new(id, qfood("flour", 500.0, "g")),
                    Ingredient::new(id, qfood("egg", 2.0, "count")),
                ];
                Box::pin(async move { Ok(ingredients) })
            });
        service
            .pantry_repository
            .expect_get_items()
            .returning(move |_| {
                let row = PantryItem::new(user_id, qfood("flour", 200.0, "g"), None);
                Box::pin(async move { Ok(vec![row]) })
            });
        expect_resolver_passthrough(&mut service);
        service
            .shopping_repository
            .expect_create_list()
            .withf(|list, items| {
                list.name == "Ingredients needed for Pancakes"
                    && items.len() == 2
                    && items[0].qfood.name == "flour"
                    && items[0].qfood.quantity == 300.0
                    && items[1].qfood.name == "egg"
                    && items[1].qfood.quantity == 2.0
            })
            .returning(|list, _| Box::pin(async move { Ok(list) }));

        let details = service
            .create_list_from_recipe(identity, recipe_id)
            .await
            .expect("delta list is created");

        assert_eq!(details.items.len(), 2);
    }

    #[tokio::test]
    async fn completing_a_list_moves_items_into_the_pantry() {
        let identity = test_identity();
        let user_id = identity.id();

        let list = ShoppingList::new(user_id, "weekend shop".to_string());
        let list_id = list.id;
        let bought = vec![
            ShoppingItem::new(list_id, qfood("milk", 1.0, "l")),
            ShoppingItem::new(list_id, qfood("bread", 1.0, "loaf")),
        ];
        let bought_qfood_ids: Vec<Uuid> = bought.iter().map(|item| item.qfood.id).collect();

        let mut service = mock_service();
        service
            .shopping_repository
            .expect_get_list()
            .returning(move |_| {
                let list = list.clone();
                Box::pin(async move { Ok(Some(list)) })
            });
        service
            .shopping_repository
            .expect_get_items()
            .returning(move |_| {
                let items = bought.clone();
                Box::pin(async move { Ok(items) })
            });
        let expected_ids = bought_qfood_ids.clone();
        service
            .shopping_repository
            .expect_complete_list()
            .withf(move |id, pantry_items| {
                *id == list_id
                    && pantry_items.len() == 2
                    && pantry_items
                        .iter()
                        .zip(&expected_ids)
                        .all(|(item, qfood_id)| item.qfood.id == *qfood_id)
                    && pantry_items.iter().all(|item| item.expiry.is_some())
            })
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let pantry_items = service
            .complete_shopping_list(identity, list_id)
            .await
            .expect("completion succeeds");

        assert_eq!(pantry_items.len(), 2);
        assert!(pantry_items.iter().all(|item| item.user_id == user_id));
    }

    #[tokio::test]
    async fn strangers_cannot_complete_someone_elses_list() {
        let identity = test_identity();
        let other_owner = Uuid::new_v4();
        let list = ShoppingList::new(other_owner, "not yours".to_string());
        let list_id = list.id;

        let mut service = mock_service();
        service
            .shopping_repository
            .expect_get_list()
            .returning(move |_| {
                let list = list.clone();
                Box::pin(async move { Ok(Some(list)) })
            });
        service.shopping_repository.expect_complete_list().times(0);

        let err = service
            .complete_shopping_list(identity, list_id)
            .await
            .expect_err("policy refuses");

        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
