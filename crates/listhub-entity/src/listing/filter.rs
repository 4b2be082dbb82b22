//! Listing search filter.
//!
//! A [`ListingFilter`] is the single definition of the listing predicates.
//! The in-memory store evaluates it with [`ListingFilter::matches`]; the
//! Postgres repository translates the same fields into SQL.

use super::kind::ListingType;
use super::model::Listing;
use super::status::ListingStatus;

/// AND-combined listing predicates. Every `None` field is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring of title, description, address or neighborhood.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Case-insensitive neighborhood substring.
    pub neighborhood: Option<String>,
    /// Exact listing type.
    pub listing_type: Option<ListingType>,
    /// Exact status.
    pub status: Option<ListingStatus>,
    /// Inclusive minimum room count. Listings without a room count never match.
    pub min_rooms: Option<i32>,
    /// Exact amenity flag.
    pub has_gumdrop_garden: Option<bool>,
}

impl ListingFilter {
    /// Drop empty text predicates so they behave as absent.
    pub fn normalized(mut self) -> Self {
        self.search = self.search.filter(|s| !s.is_empty());
        self.neighborhood = self.neighborhood.filter(|s| !s.is_empty());
        self
    }

    /// Evaluate every active predicate against `listing`.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(search) = non_empty(&self.search) {
            let needle = search.to_lowercase();
            let hit = contains_ci(Some(&listing.title), &needle)
                || contains_ci(listing.description.as_deref(), &needle)
                || contains_ci(Some(&listing.address), &needle)
                || contains_ci(listing.neighborhood.as_deref(), &needle);
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| listing.price > max) {
            return false;
        }

        if let Some(neighborhood) = non_empty(&self.neighborhood) {
            let needle = neighborhood.to_lowercase();
            if !contains_ci(listing.neighborhood.as_deref(), &needle) {
                return false;
            }
        }

        if self.listing_type.is_some_and(|t| listing.listing_type != t) {
            return false;
        }
        if self.status.is_some_and(|s| listing.status != s) {
            return false;
        }

        if let Some(min_rooms) = self.min_rooms {
            match listing.num_rooms {
                Some(rooms) if rooms >= min_rooms => {}
                _ => return false,
            }
        }

        if self
            .has_gumdrop_garden
            .is_some_and(|flag| listing.has_gumdrop_garden != flag)
        {
            return false;
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ci(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(lowered_needle))
}

/// Escape `LIKE` metacharacters so `value` matches literally, then wrap it
/// in `%` for a substring pattern. Uses `\` as the escape character.
pub fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
