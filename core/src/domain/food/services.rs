use crate::domain::{
    authentication::ports::AuthSessionRepository,
    common::{entities::app_errors::CoreError, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::{
        entities::{Barcode, FoodItem, QuantifiedFood},
        ports::{BarcodeRepository, FoodRepository, FoodService},
        value_objects::{NewQuantifiedFood, RegisterBarcodeInput},
    },
    health::ports::HealthCheckRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::ports::WasteRepository,
};

const FOOD_SEARCH_LIMIT: u64 = 20;
const BARCODE_MAX_LENGTH: usize = 15;

/// The unit recorded when a form leaves the field blank.
pub const DEFAULT_UNIT: &str = "g";

pub fn validate_new_quantified_food(input: &NewQuantifiedFood) -> Result<(), CoreError> {
    if input.food_name.trim().is_empty() {
        return Err(CoreError::Invalid("food name must not be empty".to_string()));
    }

    if !input.quantity.is_finite() || input.quantity <= 0.0 {
        return Err(CoreError::Invalid("quantity must be positive".to_string()));
    }

    Ok(())
}

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> FoodService
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
    async fn resolve_quantified_food(
        &self,
        input: NewQuantifiedFood,
    ) -> Result<QuantifiedFood, CoreError> {
        validate_new_quantified_food(&input)?;

        let name = input.food_name.trim().to_string();
        let unit = match input.unit.trim() {
            "" => DEFAULT_UNIT.to_string(),
            unit => unit.to_string(),
        };

        let food = match self.food_repository.get_food_by_name(name.clone()).await? {
            Some(existing) => existing,
            None => self.food_repository.create_food(FoodItem::new(name)).await?,
        };

        self.food_repository
            .create_quantified(QuantifiedFood::new(&food, input.quantity, unit))
            .await
    }

    async fn search_food_items(&self, query: String) -> Result<Vec<FoodItem>, CoreError> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.food_repository
            .search_foods(query, FOOD_SEARCH_LIMIT)
            .await
    }

    async fn register_barcode(&self, input: RegisterBarcodeInput) -> Result<Barcode, CoreError> {
        let code = input.barcode.trim().to_string();
        if code.is_empty() || code.len() > BARCODE_MAX_LENGTH {
            return Err(CoreError::Invalid(format!(
                "barcode must be 1 to {BARCODE_MAX_LENGTH} characters"
            )));
        }

        if self
            .barcode_repository
            .get_by_barcode(code.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Invalid(
                "barcode is already registered".to_string(),
            ));
        }

        let qfood = self.resolve_quantified_food(input.food).await?;

        let barcode = self
            .barcode_repository
            .create_barcode(Barcode::new(code, qfood))
            .await?;

        tracing::info!(barcode = %barcode.barcode, food = %barcode.qfood.name, "registered barcode");

        Ok(barcode)
    }

    async fn lookup_barcode(&self, barcode: String) -> Result<Barcode, CoreError> {
        self.barcode_repository
            .get_by_barcode(barcode.trim().to_string())
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, quantity: f64, unit: &str) -> NewQuantifiedFood {
        NewQuantifiedFood {
            food_name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn rejects_blank_names_and_non_positive_quantities() {
        assert!(validate_new_quantified_food(&input("flour", 500.0, "g")).is_ok());
        assert!(validate_new_quantified_food(&input("  ", 500.0, "g")).is_err());
        assert!(validate_new_quantified_food(&input("flour", 0.0, "g")).is_err());
        assert!(validate_new_quantified_food(&input("flour", -1.0, "g")).is_err());
        assert!(validate_new_quantified_food(&input("flour", f64::NAN, "g")).is_err());
    }
}
