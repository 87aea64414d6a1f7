use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{food::value_objects::StockKey, pantry::entities::PantryItem};

/// A user's pantry folded down to totals per stock key. Rows whose key
/// differs only by unit land in separate buckets; nothing is converted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PantryStock {
    totals: HashMap<StockKey, f64>,
}

impl PantryStock {
    pub fn from_items(items: &[PantryItem]) -> Self {
        let mut totals: HashMap<StockKey, f64> = HashMap::new();

        for item in items {
            *totals.entry(item.qfood.stock_key()).or_insert(0.0) += item.qfood.quantity;
        }

        Self { totals }
    }

    pub fn quantity_of(&self, key: &StockKey) -> f64 {
        self.totals.get(key).copied().unwrap_or(0.0)
    }

    pub fn covers(&self, key: &StockKey, required: f64) -> bool {
        self.quantity_of(key) >= required
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StockKey, f64)> {
        self.totals.iter().map(|(key, total)| (key, *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AddPantryItemInput {
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePantryItemInput {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry: Option<String>,
}

/// One line of the aggregated pantry view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PantrySummaryEntry {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::food::entities::QuantifiedFood;

    fn pantry_item(name: &str, quantity: f64, unit: &str) -> PantryItem {
        let qfood = QuantifiedFood {
            id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        };

        PantryItem::new(Uuid::new_v4(), qfood, None)
    }

    #[test]
    fn sums_rows_sharing_a_stock_key() {
        let items = vec![
            pantry_item("flour", 300.0, "g"),
            pantry_item("Flour", 200.0, "g"),
            pantry_item("egg", 6.0, "count"),
        ];

        let stock = PantryStock::from_items(&items);

        assert_eq!(stock.len(), 2);
        assert_eq!(stock.quantity_of(&StockKey::new("flour", "g")), 500.0);
        assert_eq!(stock.quantity_of(&StockKey::new("egg", "count")), 6.0);
    }

    #[test]
    fn units_never_merge() {
        let items = vec![
            pantry_item("milk", 1.0, "l"),
            pantry_item("milk", 500.0, "ml"),
        ];

        let stock = PantryStock::from_items(&items);

        assert_eq!(stock.len(), 2);
        assert_eq!(stock.quantity_of(&StockKey::new("milk", "l")), 1.0);
        assert_eq!(stock.quantity_of(&StockKey::new("milk", "ml")), 500.0);
        assert!(!stock.covers(&StockKey::new("milk", "cups"), 1.0));
    }

    #[test]
    fn covers_compares_against_the_total() {
        let items = vec![
            pantry_item("butter", 125.0, "g"),
            pantry_item("butter", 125.0, "g"),
        ];

        let stock = PantryStock::from_items(&items);

        assert!(stock.covers(&StockKey::new("butter", "g"), 250.0));
        assert!(!stock.covers(&StockKey::new("butter", "g"), 250.1));
    }

    #[test]
    fn empty_pantry_covers_nothing() {
        let stock = PantryStock::from_items(&[]);

        assert!(stock.is_empty());
        assert!(!stock.covers(&StockKey::new("flour", "g"), 1.0));
        assert_eq!(stock.quantity_of(&StockKey::new("flour", "g")), 0.0);
    }
}
