use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::value_objects::StockKey,
    pantry::{entities::PantryItem, services::sort_by_expiry, value_objects::PantryStock},
    recipe::{entities::Ingredient, value_objects::PantryTake},
};

/// Tolerance for float accumulation dust when draining rows.
pub(crate) const EPSILON: f64 = 1e-9;

/// Whether the aggregated stock covers every ingredient. Stops at the first
/// unmet one; callers that need to know which ingredient failed use
/// [`first_lacking`].
pub fn is_makeable(ingredients: &[Ingredient], stock: &PantryStock) -> bool {
    first_lacking(ingredients, stock).is_none()
}

/// The first ingredient, in recipe order, whose stock key is absent or short.
pub fn first_lacking<'a>(
    ingredients: &'a [Ingredient],
    stock: &PantryStock,
) -> Option<&'a Ingredient> {
    ingredients
        .iter()
        .find(|ingredient| !stock.covers(&ingredient.qfood.stock_key(), ingredient.qfood.quantity))
}

/// Plans how a recipe's requirements drain the pantry, row by row.
///
/// Rows sharing a stock key are consumed soonest-expiry first, rows without a
/// parseable date last. Takes are cumulative across ingredients, so two
/// ingredients naming the same key compete for the same rows and the plan
/// fails when their combined requirement exceeds the stock. On failure the
/// error names the first ingredient that could not be satisfied and no plan
/// is produced.
pub fn plan_consumption(
    ingredients: &[Ingredient],
    pantry: &[PantryItem],
) -> Result<Vec<PantryTake>, CoreError> {
    let mut rows: Vec<PantryItem> = pantry.to_vec();
    sort_by_expiry(&mut rows);

    let mut rows_by_key: HashMap<StockKey, Vec<&PantryItem>> = HashMap::new();
    for row in &rows {
        rows_by_key.entry(row.qfood.stock_key()).or_default().push(row);
    }

    let mut remaining: HashMap<Uuid, f64> = rows
        .iter()
        .map(|row| (row.id, row.qfood.quantity))
        .collect();

    let mut takes: Vec<PantryTake> = Vec::new();

    for ingredient in ingredients {
        let mut needed = ingredient.qfood.quantity;
        let key = ingredient.qfood.stock_key();

        if let Some(candidates) = rows_by_key.get(&key) {
            for row in candidates {
                if needed <= EPSILON {
                    break;
                }

                let available = remaining[&row.id];
                if available <= EPSILON {
                    continue;
                }

                let take = needed.min(available);
                let mut left = available - take;
                if left <= EPSILON {
                    left = 0.0;
                }

                takes.push(PantryTake {
                    pantry_item_id: row.id,
                    qfood_id: row.qfood.id,
                    food_name: ingredient.qfood.name.clone(),
                    expected_quantity: available,
                    take,
                    remaining: left,
                });

                remaining.insert(row.id, left);
                needed -= take;
            }
        }

        if needed > EPSILON {
            return Err(CoreError::InsufficientStock {
                food: ingredient.qfood.name.clone(),
            });
        }
    }

    Ok(takes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::entities::QuantifiedFood;

    fn qfood(name: &str, quantity: f64, unit: &str) -> QuantifiedFood {
        QuantifiedFood {
            id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    fn ingredient(name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient::new(Uuid::new_v4(), qfood(name, quantity, unit))
    }

    fn pantry_item(name: &str, quantity: f64, unit: &str, expiry: Option<&str>) -> PantryItem {
        PantryItem::new(
            Uuid::new_v4(),
            qfood(name, quantity, unit),
            expiry.map(str::to_string),
        )
    }

    #[test]
    fn makeable_when_every_key_is_covered() {
        let pantry = vec![
            pantry_item("flour", 500.0, "g", None),
            pantry_item("egg", 3.0, "count", None),
        ];
        let stock = PantryStock::from_items(&pantry);

        let ok = vec![
            ingredient("flour", 200.0, "g"),
            ingredient("egg", 2.0, "count"),
        ];
        let short = vec![
            ingredient("flour", 200.0, "g"),
            ingredient("egg", 4.0, "count"),
        ];

        assert!(is_makeable(&ok, &stock));
        assert!(!is_makeable(&short, &stock));
    }

    #[test]
    fn lacking_ingredient_is_reported_in_recipe_order() {
        let stock = PantryStock::from_items(&[pantry_item("flour", 100.0, "g", None)]);

        let ingredients = vec![
            ingredient("flour", 200.0, "g"),
            ingredient("egg", 1.0, "count"),
        ];

        let lacking = first_lacking(&ingredients, &stock).expect("something is lacking");
        assert_eq!(lacking.qfood.name, "flour");
    }

    #[test]
    fn unit_mismatch_counts_as_absent() {
        let stock = PantryStock::from_items(&[pantry_item("milk", 2.0, "l", None)]);

        let ingredients = vec![ingredient("milk", 500.0, "ml")];

        assert!(!is_makeable(&ingredients, &stock));
    }

    #[test]
    fn plan_decrements_a_single_row() {
        let pantry = vec![pantry_item("flour", 500.0, "g", None)];
        let ingredients = vec![ingredient("flour", 200.0, "g")];

        let takes = plan_consumption(&ingredients, &pantry).expect("plan succeeds");

        assert_eq!(takes.len(), 1);
        assert_eq!(takes[0].pantry_item_id, pantry[0].id);
        assert_eq!(takes[0].expected_quantity, 500.0);
        assert_eq!(takes[0].take, 200.0);
        assert_eq!(takes[0].remaining, 300.0);
    }

    #[test]
    fn plan_fails_without_touching_anything_when_short() {
        let pantry = vec![pantry_item("egg", 2.0, "count", None)];
        let ingredients = vec![ingredient("egg", 3.0, "count")];

        let err = plan_consumption(&ingredients, &pantry).expect_err("stock is short");

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                food: "egg".to_string()
            }
        );
    }

    #[test]
    fn plan_drains_soonest_expiry_first() {
        let fresh = pantry_item("flour", 300.0, "g", Some("01/12/2025"));
        let stale = pantry_item("flour", 300.0, "g", Some("01/06/2025"));
        let undated = pantry_item("flour", 300.0, "g", None);
        let pantry = vec![fresh.clone(), undated.clone(), stale.clone()];

        let ingredients = vec![ingredient("flour", 500.0, "g")];
        let takes = plan_consumption(&ingredients, &pantry).expect("plan succeeds");

        assert_eq!(takes.len(), 2);
        assert_eq!(takes[0].pantry_item_id, stale.id);
        assert_eq!(takes[0].take, 300.0);
        assert_eq!(takes[0].remaining, 0.0);
        assert_eq!(takes[1].pantry_item_id, fresh.id);
        assert_eq!(takes[1].take, 200.0);
        assert_eq!(takes[1].remaining, 100.0);
    }

    #[test]
    fn ingredients_sharing_a_key_compete_for_stock() {
        let pantry = vec![pantry_item("butter", 250.0, "g", None)];
        let ingredients = vec![
            ingredient("butter", 150.0, "g"),
            ingredient("butter", 150.0, "g"),
        ];

        let err = plan_consumption(&ingredients, &pantry).expect_err("combined need exceeds stock");

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                food: "butter".to_string()
            }
        );
    }

    #[test]
    fn second_take_expects_the_drained_quantity() {
        let pantry = vec![pantry_item("butter", 250.0, "g", None)];
        let ingredients = vec![
            ingredient("butter", 150.0, "g"),
            ingredient("butter", 50.0, "g"),
        ];

        let takes = plan_consumption(&ingredients, &pantry).expect("plan succeeds");

        assert_eq!(takes.len(), 2);
        assert_eq!(takes[0].expected_quantity, 250.0);
        assert_eq!(takes[0].remaining, 100.0);
        assert_eq!(takes[1].expected_quantity, 100.0);
        assert_eq!(takes[1].remaining, 50.0);
    }

    #[test]
    fn fractional_requirements_tolerate_float_dust() {
        let pantry = vec![
            pantry_item("vanilla", 0.1, "tsp", Some("01/06/2025")),
            pantry_item("vanilla", 0.2, "tsp", Some("01/07/2025")),
        ];
        let ingredients = vec![ingredient("vanilla", 0.3, "tsp")];

        let takes = plan_consumption(&ingredients, &pantry).expect("plan succeeds");

        assert_eq!(takes.len(), 2);
    }
}
