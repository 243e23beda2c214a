use crate::models::Property;
use serde::{Deserialize, Serialize};

/// Selection value that disables the country or type predicate
pub const ALL: &str = "All";

/// Type choices offered by the explore filters
pub const PROPERTY_TYPES: [&str; 6] = [ALL, "Apartment", "House", "Villa", "Studio", "Penthouse"];

/// Explore-page query: free text plus country and type selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of title or location; empty matches all
    pub text: String,
    /// Exact country name, or `ALL`
    pub country: String,
    /// Exact property type, or `ALL`
    pub kind: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            country: ALL.to_string(),
            kind: ALL.to_string(),
        }
    }
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn is_match_all(&self) -> bool {
        self.text.is_empty() && self.country == ALL && self.kind == ALL
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.matches_text(property)
            && (self.country == ALL || property.country == self.country)
            && (self.kind == ALL || property.kind == self.kind)
    }

    fn matches_text(&self, property: &Property) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        property.title.to_lowercase().contains(&needle)
            || property.location.to_lowercase().contains(&needle)
    }
}

/// Listings satisfying every predicate of `query`, in input order
pub fn filter<'a>(properties: &'a [Property], query: &SearchQuery) -> Vec<&'a Property> {
    properties.iter().filter(|p| query.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn titles<'a>(found: &[&'a Property]) -> Vec<&'a str> {
        found.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn default_query_keeps_everything_in_order() {
        let properties = seed::default_properties();
        let query = SearchQuery::default();

        assert!(query.is_match_all());
        assert_eq!(
            titles(&filter(&properties, &query)),
            vec!["Modern Sunset Villa", "Standard Town House"]
        );
    }

    #[test]
    fn predicates_are_conjunctive() {
        let properties = seed::default_properties();

        let found = filter(&properties, &SearchQuery::text("sunset"));
        assert_eq!(titles(&found), vec!["Modern Sunset Villa"]);

        let found = filter(&properties, &SearchQuery::text("sunset").with_country("Pakistan"));
        assert!(found.is_empty());

        let found = filter(
            &properties,
            &SearchQuery::text("SUNSET").with_country("United States").with_kind("Villa"),
        );
        assert_eq!(titles(&found), vec!["Modern Sunset Villa"]);

        let found = filter(&properties, &SearchQuery::default().with_kind("Studio"));
        assert!(found.is_empty());
    }

    #[test]
    fn text_matches_location_too() {
        let properties = seed::default_properties();

        let found = filter(&properties, &SearchQuery::text("gulb"));
        assert_eq!(titles(&found), vec!["Standard Town House"]);

        // street and city are not searched
        assert!(filter(&properties, &SearchQuery::text("Main Blvd")).is_empty());
    }

    #[test]
    fn survivors_keep_relative_order() {
        let mut properties = seed::default_properties();
        let mut third = properties[0].clone();
        third.id = "3".to_string();
        third.title = "Sunset Studio".to_string();
        properties.push(third);

        let found = filter(&properties, &SearchQuery::text("sunset"));
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        // same input, same output
        assert_eq!(filter(&properties, &SearchQuery::text("sunset")), found);
    }
}
