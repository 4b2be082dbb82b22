//! Listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::ListingType;
use super::status::ListingStatus;

/// A property advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: i64,
    /// Headline shown in search results.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Asking price, never negative.
    pub price: f64,
    /// Street address.
    pub address: String,
    /// Neighborhood name used for filter suggestions.
    pub neighborhood: Option<String>,
    /// Interior area.
    pub square_feet: Option<i32>,
    /// Room count.
    pub num_rooms: Option<i32>,
    /// Decorative feature count.
    pub num_candy_canes: Option<i32>,
    /// Amenity flag.
    pub has_gumdrop_garden: bool,
    /// Material or style.
    pub frosting_type: Option<String>,
    /// Kind of property.
    pub listing_type: ListingType,
    /// Sale status.
    pub status: ListingStatus,
    /// URL of the listing image, stored opaquely.
    pub image_url: Option<String>,
    /// Owning user, absent for legacy listings.
    pub owner_id: Option<i64>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated; `None` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    /// Headline.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Asking price.
    pub price: f64,
    /// Street address.
    pub address: String,
    /// Neighborhood name.
    pub neighborhood: Option<String>,
    /// Interior area.
    pub square_feet: Option<i32>,
    /// Room count.
    pub num_rooms: Option<i32>,
    /// Decorative feature count.
    pub num_candy_canes: Option<i32>,
    /// Amenity flag.
    pub has_gumdrop_garden: bool,
    /// Material or style.
    pub frosting_type: Option<String>,
    /// Kind of property.
    pub listing_type: ListingType,
    /// Sale status.
    pub status: ListingStatus,
    /// Image URL.
    pub image_url: Option<String>,
}

impl NewListing {
    /// Minimal listing with every optional attribute left at its default.
    pub fn new(title: impl Into<String>, price: f64, address: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            price,
            address: address.into(),
            neighborhood: None,
            square_feet: None,
            num_rooms: None,
            num_candy_canes: None,
            has_gumdrop_garden: false,
            frosting_type: None,
            listing_type: ListingType::default(),
            status: ListingStatus::default(),
            image_url: None,
        }
    }

    /// Materialize the listing with server-assigned fields.
    pub fn into_listing(self, id: i64, owner_id: Option<i64>, created_at: DateTime<Utc>) -> Listing {
        Listing {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            address: self.address,
            neighborhood: self.neighborhood,
            square_feet: self.square_feet,
            num_rooms: self.num_rooms,
            num_candy_canes: self.num_candy_canes,
            has_gumdrop_garden: self.has_gumdrop_garden,
            frosting_type: self.frosting_type,
            listing_type: self.listing_type,
            status: self.status,
            image_url: self.image_url,
            owner_id,
            created_at,
            updated_at: None,
        }
    }
}

/// A partial update. `None` leaves a field untouched; for nullable fields
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub neighborhood: Option<Option<String>>,
    pub square_feet: Option<Option<i32>>,
    pub num_rooms: Option<Option<i32>>,
    pub num_candy_canes: Option<Option<i32>>,
    pub has_gumdrop_garden: Option<bool>,
    pub frosting_type: Option<Option<String>>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    pub image_url: Option<Option<String>>,
}

impl ListingChanges {
    /// True if no field is supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the supplied fields to `listing` in place and stamp `updated_at`.
    pub fn apply_to(&self, listing: &mut Listing, now: DateTime<Utc>) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut listing.title, &self.title);
        set(&mut listing.description, &self.description);
        set(&mut listing.price, &self.price);
        set(&mut listing.address, &self.address);
        set(&mut listing.neighborhood, &self.neighborhood);
        set(&mut listing.square_feet, &self.square_feet);
        set(&mut listing.num_rooms, &self.num_rooms);
        set(&mut listing.num_candy_canes, &self.num_candy_canes);
        set(&mut listing.has_gumdrop_garden, &self.has_gumdrop_garden);
        set(&mut listing.frosting_type, &self.frosting_type);
        set(&mut listing.listing_type, &self.listing_type);
        set(&mut listing.status, &self.status);
        set(&mut listing.image_url, &self.image_url);
        listing.updated_at = Some(now);
    }
}
