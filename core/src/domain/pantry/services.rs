use chrono::{NaiveDate, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::AuthSessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    credential::ports::CredentialRepository,
    crypto::ports::HasherRepository,
    food::{
        entities::QuantifiedFood,
        ports::{BarcodeRepository, FoodRepository, FoodService},
        value_objects::NewQuantifiedFood,
    },
    health::ports::HealthCheckRepository,
    pantry::{
        entities::{DATE_FORMAT, PantryItem},
        ports::{PantryRepository, PantryService},
        shelf_life,
        value_objects::{
            AddPantryItemInput, PantryStock, PantrySummaryEntry, UpdatePantryItemInput,
        },
    },
    recipe::ports::{RatingRepository, RecipeRepository, RecipeUsageRepository},
    shopping::ports::ShoppingRepository,
    user::ports::UserRepository,
    waste::{entities::WastedFood, ports::WasteRepository},
};

pub fn validate_expiry(expiry: &str) -> Result<(), CoreError> {
    NaiveDate::parse_from_str(expiry, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| CoreError::Invalid("expiry must be DD/MM/YYYY".to_string()))
}

/// Soonest expiry first; rows without a parseable date sort last.
pub fn sort_by_expiry(items: &mut [PantryItem]) {
    items.sort_by(|a, b| match (a.expiry_date(), b.expiry_date()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

impl<U, C, H, AS, F, P, R, RU, RA, SL, W, B, HC> PantryService
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
    async fn get_pantry(&self, identity: Identity) -> Result<Vec<PantryItem>, CoreError> {
        let mut items = self.pantry_repository.get_items(identity.id()).await?;
        sort_by_expiry(&mut items);

        Ok(items)
    }

    async fn get_pantry_summary(
        &self,
        identity: Identity,
    ) -> Result<Vec<PantrySummaryEntry>, CoreError> {
        let items = self.pantry_repository.get_items(identity.id()).await?;
        let stock = PantryStock::from_items(&items);

        let mut entries: Vec<PantrySummaryEntry> = stock
            .iter()
            .map(|(key, quantity)| PantrySummaryEntry {
                name: key.name().to_string(),
                unit: key.unit().to_string(),
                quantity,
            })
            .collect();
        entries.sort_by(|a, b| (&a.name, &a.unit).cmp(&(&b.name, &b.unit)));

        Ok(entries)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), food = %input.food_name))]
    async fn add_pantry_item(
        &self,
        identity: Identity,
        input: AddPantryItemInput,
    ) -> Result<PantryItem, CoreError> {
        if let Some(expiry) = &input.expiry {
            validate_expiry(expiry)?;
        }

        let qfood = self
            .resolve_quantified_food(NewQuantifiedFood {
                food_name: input.food_name,
                quantity: input.quantity,
                unit: input.unit,
            })
            .await?;

        let expiry = match input.expiry {
            Some(expiry) => expiry,
            None => shelf_life::suggest_expiry(&qfood.name, Utc::now().date_naive()),
        };

        self.pantry_repository
            .create_item(PantryItem::new(identity.id(), qfood, Some(expiry)))
            .await
    }

    async fn add_pantry_item_by_barcode(
        &self,
        identity: Identity,
        barcode: String,
        expiry: Option<String>,
    ) -> Result<PantryItem, CoreError> {
        if let Some(expiry) = &expiry {
            validate_expiry(expiry)?;
        }

        let registered = self
            .barcode_repository
            .get_by_barcode(barcode.trim().to_string())
            .await?
            .ok_or(CoreError::NotFound)?;

        // Each pantry row owns its quantified row, so the barcode's template
        // is cloned rather than shared.
        let source = registered.qfood;
        let qfood = self
            .food_repository
            .create_quantified(QuantifiedFood {
                id: generate_uuid_v7(),
                food_id: source.food_id,
                name: source.name.clone(),
                quantity: source.quantity,
                unit: source.unit,
            })
            .await?;

        let expiry = match expiry {
            Some(expiry) => expiry,
            None => shelf_life::suggest_expiry(&qfood.name, Utc::now().date_naive()),
        };

        self.pantry_repository
            .create_item(PantryItem::new(identity.id(), qfood, Some(expiry)))
            .await
    }

    async fn update_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdatePantryItemInput,
    ) -> Result<PantryItem, CoreError> {
        let mut item = self
            .pantry_repository
            .get_item(identity.id(), item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(quantity) = input.quantity {
            if !quantity.is_finite() || quantity <= 0.0 {
                return Err(CoreError::Invalid("quantity must be positive".to_string()));
            }
            item.qfood.quantity = quantity;
        }

        if let Some(unit) = input.unit {
            let unit = unit.trim().to_string();
            if unit.is_empty() {
                return Err(CoreError::Invalid("unit must not be empty".to_string()));
            }
            item.qfood.unit = unit;
        }

        if let Some(expiry) = input.expiry {
            validate_expiry(&expiry)?;
            item.expiry = Some(expiry);
        }

        self.pantry_repository.update_item(item).await
    }

    async fn remove_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> Result<(), CoreError> {
        let item = self
            .pantry_repository
            .get_item(identity.id(), item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.pantry_repository.delete_item(item.id).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn discard_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> Result<WastedFood, CoreError> {
        let item = self
            .pantry_repository
            .get_item(identity.id(), item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let expired = item.expiry.clone();
        let record = self
            .waste_repository
            .move_from_pantry(item.id, WastedFood::new(item.user_id, item.qfood, expired))
            .await?;

        tracing::info!(food = %record.qfood.name, "pantry item discarded to waste log");

        Ok(record)
    }
}
