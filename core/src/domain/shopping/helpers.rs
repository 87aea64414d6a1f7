use crate::domain::{
    food::value_objects::NewQuantifiedFood, pantry::value_objects::PantryStock,
    recipe::entities::Ingredient,
};

/// What a recipe still needs on top of the pantry: absent keys get the full
/// required quantity, short keys the difference, covered keys nothing. Keys
/// match the aggregation key exactly, so a stocked amount in another unit
/// does not reduce the shortfall.
pub fn shortfall_items(ingredients: &[Ingredient], stock: &PantryStock) -> Vec<NewQuantifiedFood> {
    ingredients
        .iter()
        .filter_map(|ingredient| {
            let required = ingredient.qfood.quantity;
            let on_hand = stock.quantity_of(&ingredient.qfood.stock_key());

            if on_hand >= required {
                return None;
            }

            Some(NewQuantifiedFood {
                food_name: ingredient.qfood.name.clone(),
                quantity: required - on_hand,
                unit: ingredient.qfood.unit.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{food::entities::QuantifiedFood, pantry::entities::PantryItem};

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

    fn stock_of(rows: &[(&str, f64, &str)]) -> PantryStock {
        let items: Vec<PantryItem> = rows
            .iter()
            .map(|(name, quantity, unit)| {
                PantryItem::new(Uuid::new_v4(), qfood(name, *quantity, *unit), None)
            })
            .collect();

        PantryStock::from_items(&items)
    }

    #[test]
    fn empty_pantry_needs_the_full_ingredient_list() {
        let ingredients = vec![
            ingredient("flour", 500.0, "g"),
            ingredient("egg", 3.0, "count"),
        ];

        let needed = shortfall_items(&ingredients, &PantryStock::default());

        assert_eq!(needed.len(), 2);
        assert_eq!(needed[0].food_name, "flour");
        assert_eq!(needed[0].quantity, 500.0);
        assert_eq!(needed[1].food_name, "egg");
        assert_eq!(needed[1].quantity, 3.0);
    }

    #[test]
    fn fully_stocked_pantry_needs_nothing() {
        let ingredients = vec![ingredient("flour", 500.0, "g")];
        let stock = stock_of(&[("flour", 750.0, "g")]);

        assert!(shortfall_items(&ingredients, &stock).is_empty());
    }

    #[test]
    fn partial_stock_yields_the_difference() {
        let ingredients = vec![ingredient("flour", 500.0, "g")];
        let stock = stock_of(&[("flour", 200.0, "g")]);

        let needed = shortfall_items(&ingredients, &stock);

        assert_eq!(needed.len(), 1);
        assert_eq!(needed[0].quantity, 300.0);
        assert_eq!(needed[0].unit, "g");
    }

    #[test]
    fn another_unit_never_reduces_the_shortfall() {
        let ingredients = vec![ingredient("milk", 500.0, "ml")];
        let stock = stock_of(&[("milk", 2.0, "l")]);

        let needed = shortfall_items(&ingredients, &stock);

        assert_eq!(needed.len(), 1);
        assert_eq!(needed[0].quantity, 500.0);
        assert_eq!(needed[0].unit, "ml");
    }

    #[test]
    fn stock_aggregates_across_rows_before_comparing() {
        let ingredients = vec![ingredient("butter", 250.0, "g")];
        let stock = stock_of(&[("butter", 150.0, "g"), ("Butter", 100.0, "g")]);

        assert!(shortfall_items(&ingredients, &stock).is_empty());
    }
}
