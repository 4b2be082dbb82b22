//! Request DTOs with validation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use listhub_entity::listing::{
    ListingChanges, ListingFilter, ListingStatus, ListingType, NewListing,
};
use listhub_service::PageParams;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address. Only uniqueness is enforced, not format.
    pub email: String,
    /// Username.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Plain-text password; length is checked by the account service.
    pub password: String,
}

/// Login form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/listings`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: f64,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(max = 200))]
    pub neighborhood: Option<String>,
    pub square_feet: Option<i32>,
    pub num_rooms: Option<i32>,
    pub num_candy_canes: Option<i32>,
    #[serde(default)]
    pub has_gumdrop_garden: Option<bool>,
    #[validate(length(max = 500))]
    pub frosting_type: Option<String>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            address: req.address,
            neighborhood: req.neighborhood,
            square_feet: req.square_feet,
            num_rooms: req.num_rooms,
            num_candy_canes: req.num_candy_canes,
            has_gumdrop_garden: req.has_gumdrop_garden.unwrap_or(false),
            frosting_type: req.frosting_type,
            listing_type: req.listing_type.unwrap_or_default(),
            status: req.status.unwrap_or_default(),
            image_url: req.image_url,
        }
    }
}

/// Body of `PUT /api/listings/{id}`.
///
/// Absent fields are left untouched. For optional columns an explicit
/// `null` clears the value; for required columns `null` means no change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_nullable_lengths"))]
pub struct UpdateListingRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub neighborhood: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub square_feet: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub num_rooms: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub num_candy_canes: Option<Option<i32>>,
    pub has_gumdrop_garden: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub frosting_type: Option<Option<String>>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

impl From<UpdateListingRequest> for ListingChanges {
    fn from(req: UpdateListingRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            address: req.address,
            neighborhood: req.neighborhood,
            square_feet: req.square_feet,
            num_rooms: req.num_rooms,
            num_candy_canes: req.num_candy_canes,
            has_gumdrop_garden: req.has_gumdrop_garden,
            frosting_type: req.frosting_type,
            listing_type: req.listing_type,
            status: req.status,
            image_url: req.image_url,
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query-string flag accepting `true`/`false`, `1`/`0`, `yes`/`no` and
/// `on`/`off`, case-insensitively.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(D::Error::custom(format!("invalid boolean '{raw}'"))),
    }
}

fn validate_nullable_lengths(req: &UpdateListingRequest) -> Result<(), ValidationError> {
    let limits = [
        (&req.neighborhood, 200, "neighborhood_too_long"),
        (&req.frosting_type, 500, "frosting_type_too_long"),
        (&req.image_url, 500, "image_url_too_long"),
    ];

    for (value, max, code) in limits {
        if let Some(Some(text)) = value {
            if text.chars().count() > max {
                return Err(ValidationError::new(code));
            }
        }
    }
    Ok(())
}

/// Query string of `GET /api/listings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub neighborhood: Option<String>,
    pub listing_type: Option<ListingType>,
    pub status: Option<ListingStatus>,
    pub min_rooms: Option<i32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_gumdrop_garden: Option<bool>,
}

impl ListingQuery {
    /// Split into the filter and the paging window request.
    pub fn into_parts(self) -> (ListingFilter, PageParams) {
        let filter = ListingFilter {
            search: self.search,
            min_price: self.min_price,
            max_price: self.max_price,
            neighborhood: self.neighborhood,
            listing_type: self.listing_type,
            status: self.status,
            min_rooms: self.min_rooms,
            has_gumdrop_garden: self.has_gumdrop_garden,
        };
        let page = PageParams {
            skip: self.skip,
            limit: self.limit,
        };
        (filter.normalized(), page)
    }
}
