/// The canonical matching key for everything quantity-related: pantry
/// aggregation, recipe feasibility, and shopping-list deltas all compare
/// food by this key. Units are opaque labels, so `("flour", "g")` and
/// `("flour", "kg")` are distinct stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StockKey {
    name: String,
    unit: String,
}

impl StockKey {
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.trim().to_ascii_lowercase(),
            unit: unit.trim().to_ascii_lowercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl std::fmt::Display for StockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.unit)
    }
}

/// A not-yet-persisted amount of food, as entered in a form or computed as a
/// shopping-list shortfall. The resolver turns it into catalogue rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuantifiedFood {
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl NewQuantifiedFood {
    pub fn stock_key(&self) -> StockKey {
        StockKey::new(&self.food_name, &self.unit)
    }
}

#[derive(Debug, Clone)]
pub struct RegisterBarcodeInput {
    pub barcode: String,
    pub food: NewQuantifiedFood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_key_normalizes_case_and_whitespace() {
        assert_eq!(StockKey::new(" Flour ", "G"), StockKey::new("flour", "g"));
    }

    #[test]
    fn stock_key_keeps_units_apart() {
        assert_ne!(StockKey::new("flour", "g"), StockKey::new("flour", "kg"));
    }
}
