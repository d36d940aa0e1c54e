// src/chat/intent.rs
// Keyword-based intent classification over the seven fixed categories.

use super::resolver::{similarity, FUZZY_CUTOFF};
use super::Category;

/// Ordered keyword rules. First matching rule wins, so "flood risk" is a
/// flood query, not a risk query.
const RULES: &[(&[&str], Category)] = &[
    (&["flood", "rain"], Category::Flood),
    (&["accident"], Category::Accident),
    (&["crime"], Category::Crime),
    (&["pollution", "air"], Category::Pollution),
    (&["heat", "temperature"], Category::Heat),
    (&["population"], Category::Population),
    (&["risk", "riskfactor", "risk factor"], Category::Risk),
];

/// Classify free text into a category, or `None` when no rule matches.
/// An exact containment pass runs first; a per-token fuzzy pass then catches
/// misspelled keywords ("accidnt") at the same cutoff the zone resolver uses.
pub fn classify(query: &str) -> Option<Category> {
    let query = query.to_lowercase();

    for (keywords, category) in RULES {
        if keywords.iter().any(|keyword| query.contains(keyword)) {
            return Some(*category);
        }
    }

    for (keywords, category) in RULES {
        for token in query.split_whitespace() {
            if keywords
                .iter()
                .any(|keyword| similarity(token, keyword) >= FUZZY_CUTOFF)
            {
                return Some(*category);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_a_trigger_keyword() {
        assert_eq!(classify("any flood today?"), Some(Category::Flood));
        assert_eq!(classify("heavy rain expected"), Some(Category::Flood));
        assert_eq!(classify("accident count"), Some(Category::Accident));
        assert_eq!(classify("crime stats"), Some(Category::Crime));
        assert_eq!(classify("air quality"), Some(Category::Pollution));
        assert_eq!(classify("pollution levels"), Some(Category::Pollution));
        assert_eq!(classify("temperature outside"), Some(Category::Heat));
        assert_eq!(classify("population density"), Some(Category::Population));
        assert_eq!(classify("overall risk factor"), Some(Category::Risk));
    }

    #[test]
    fn rule_order_breaks_ties() {
        // Both flood and risk keywords appear; flood is the earlier rule.
        assert_eq!(classify("flood risk in adyar"), Some(Category::Flood));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("CRIME in Velachery"), Some(Category::Crime));
    }

    #[test]
    fn misspelled_keyword_still_classifies() {
        assert_eq!(classify("accidnt near anna nagar"), Some(Category::Accident));
    }

    #[test]
    fn no_keyword_yields_none() {
        assert_eq!(classify("how is the weather"), None);
        assert_eq!(classify(""), None);
    }
}
