use chrono::{Duration, NaiveDate};

use crate::domain::pantry::entities::DATE_FORMAT;

/// Fallback shelf life when nothing better is known.
const DEFAULT_DAYS: i64 = 1;

/// Storage descriptions for common foods, keyed by normalized name. The
/// wording mirrors food-safety guidance, which is why a single entry can
/// carry several comma-separated clauses.
const STORAGE_GUIDE: &[(&str, &str)] = &[
    ("apple", "3 weeks in the pantry, 6 weeks refrigerated"),
    ("banana", "5 days"),
    ("bread", "5 days, 2 weeks refrigerated"),
    ("butter", "1 month refrigerated"),
    ("carrot", "3 weeks refrigerated"),
    ("cheese", "2 weeks once opened"),
    ("chicken", "2 days refrigerated, not safe at room temperature"),
    ("cooked rice", "1 day refrigerated"),
    ("egg", "3 weeks refrigerated"),
    ("eggs", "3 weeks refrigerated"),
    ("fish", "2 days refrigerated, not safe at room temperature"),
    ("flour", "6 months in an airtight container"),
    ("garlic", "3 months in a cool dark place"),
    ("lettuce", "1 week refrigerated"),
    ("milk", "1 week refrigerated"),
    ("minced beef", "2 days refrigerated"),
    ("mushroom", "4 days refrigerated"),
    ("onion", "1 month in a cool dark place"),
    ("pasta", "6 months in the pantry"),
    ("potato", "2 months in a cool dark place"),
    ("rice", "6 months in the pantry"),
    ("sugar", "6 months in the pantry"),
    ("tomato", "5 days"),
    ("yoghurt", "2 weeks refrigerated"),
];

pub fn storage_description(food_name: &str) -> Option<&'static str> {
    let normalized = food_name.trim().to_ascii_lowercase();

    STORAGE_GUIDE
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, description)| *description)
}

/// Reads a human storage description and returns the longest duration it
/// mentions. Clauses are comma-separated `<n> day|week|month` phrases; weeks
/// count as 7 days and months as 30. Anything flagged "not safe", and any
/// text with no parseable clause, falls back to the 1-day default.
pub fn parse_storage_duration(description: &str) -> Duration {
    let text = description.to_ascii_lowercase();

    if text.contains("not safe") {
        return Duration::days(DEFAULT_DAYS);
    }

    let mut best: Option<i64> = None;

    for clause in text.split(',') {
        if let Some(days) = parse_clause(clause) {
            best = Some(best.map_or(days, |current| current.max(days)));
        }
    }

    Duration::days(best.unwrap_or(DEFAULT_DAYS))
}

fn parse_clause(clause: &str) -> Option<i64> {
    let mut amount: Option<i64> = None;

    for word in clause.split_whitespace() {
        if let Ok(value) = word.parse::<i64>() {
            amount = Some(value);
            continue;
        }

        if let Some(value) = amount {
            if word.starts_with("day") {
                return Some(value);
            }
            if word.starts_with("week") {
                return Some(value * 7);
            }
            if word.starts_with("month") {
                return Some(value * 30);
            }
        }
    }

    None
}

/// Suggested expiry date for a food bought today, `DD/MM/YYYY`.
pub fn suggest_expiry(food_name: &str, today: NaiveDate) -> String {
    let duration = storage_description(food_name)
        .map(parse_storage_duration)
        .unwrap_or_else(|| Duration::days(DEFAULT_DAYS));

    (today + duration).format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(description: &str) -> i64 {
        parse_storage_duration(description).num_days()
    }

    #[test]
    fn parses_single_clauses() {
        assert_eq!(days("3 days"), 3);
        assert_eq!(days("2 weeks"), 14);
        assert_eq!(days("1 month"), 30);
    }

    #[test]
    fn takes_the_longest_clause() {
        assert_eq!(days("2 weeks, 3 days"), 14);
        assert_eq!(days("5 days, 1 month in the freezer"), 30);
    }

    #[test]
    fn not_safe_overrides_everything() {
        assert_eq!(days("not safe once opened"), 1);
        assert_eq!(days("2 weeks, not safe at room temperature"), 1);
    }

    #[test]
    fn unparseable_text_gets_the_default() {
        assert_eq!(days("store in a cool dry place"), 1);
        assert_eq!(days(""), 1);
    }

    #[test]
    fn ignores_numbers_without_a_unit() {
        assert_eq!(days("type 00, 6 months"), 180);
    }

    #[test]
    fn suggests_dates_in_day_month_year() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");

        assert_eq!(suggest_expiry("banana", today), "06/03/2025");
        assert_eq!(suggest_expiry("unknown exotic fruit", today), "02/03/2025");
    }

    #[test]
    fn guide_lookup_normalizes_names() {
        assert!(storage_description(" Milk ").is_some());
        assert!(storage_description("dragonfruit").is_none());
    }
}
