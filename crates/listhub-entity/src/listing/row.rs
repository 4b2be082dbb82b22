//! Storage representation of a listing.
//!
//! The database keeps the amenity flag as a `SMALLINT` and the enumerations
//! as plain strings. [`ListingRow`] is the only place those shapes exist;
//! every read path converts through `TryFrom<ListingRow> for Listing`.

use chrono::{DateTime, Utc};
use listhub_core::AppError;
use sqlx::FromRow;

use super::kind::ListingType;
use super::model::Listing;
use super::status::ListingStatus;

/// A `listings` row exactly as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub address: String,
    pub neighborhood: Option<String>,
    pub square_feet: Option<i32>,
    pub num_rooms: Option<i32>,
    pub num_candy_canes: Option<i32>,
    pub has_gumdrop_garden: i16,
    pub frosting_type: Option<String>,
    pub listing_type: String,
    pub status: String,
    pub image_url: Option<String>,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Encode the amenity flag for storage.
pub fn flag_to_storage(flag: bool) -> i16 {
    i16::from(flag)
}

/// Decode the stored amenity flag. Any non-zero value is `true`.
pub fn flag_from_storage(value: i16) -> bool {
    value != 0
}

impl TryFrom<ListingRow> for Listing {
    type Error = AppError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let listing_type: ListingType = row.listing_type.parse().map_err(|_| {
            AppError::internal(format!(
                "Listing {} has unknown listing_type '{}'",
                row.id, row.listing_type
            ))
        })?;
        let status: ListingStatus = row.status.parse().map_err(|_| {
            AppError::internal(format!(
                "Listing {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            address: row.address,
            neighborhood: row.neighborhood,
            square_feet: row.square_feet,
            num_rooms: row.num_rooms,
            num_candy_canes: row.num_candy_canes,
            has_gumdrop_garden: flag_from_storage(row.has_gumdrop_garden),
            frosting_type: row.frosting_type,
            listing_type,
            status,
            image_url: row.image_url,
            owner_id: row.owner_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ListingRow {
        ListingRow {
            id: 3,
            title: "Licorice Lodge".to_string(),
            description: None,
            price: 420.0,
            address: "7 Fudge Way".to_string(),
            neighborhood: None,
            square_feet: None,
            num_rooms: None,
            num_candy_canes: None,
            has_gumdrop_garden: 0,
            frosting_type: None,
            listing_type: "cottage".to_string(),
            status: "available".to_string(),
            image_url: None,
            owner_id: Some(1),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_flag_conversion() {
        assert_eq!(flag_to_storage(true), 1);
        assert_eq!(flag_to_storage(false), 0);
        assert!(flag_from_storage(1));
        assert!(!flag_from_storage(0));
    }

    #[test]
    fn test_row_to_listing_decodes_flag_and_enums() {
        let mut row = row();
        row.has_gumdrop_garden = 1;
        row.listing_type = "castle".to_string();
        row.status = "pending".to_string();

        let listing = Listing::try_from(row).unwrap();
        assert!(listing.has_gumdrop_garden);
        assert_eq!(listing.listing_type, ListingType::Castle);
        assert_eq!(listing.status, ListingStatus::Pending);
    }

    #[test]
    fn test_row_with_unknown_enum_is_rejected() {
        let mut row = row();
        row.status = "archived".to_string();

        let err = Listing::try_from(row).unwrap_err();
        assert_eq!(err.kind, listhub_core::error::ErrorKind::Internal);
    }
}
