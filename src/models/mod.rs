use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role of a signed-in user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Host,
    #[serde(alias = "Client")]
    Client,
}

/// The signed-in user record, also the shape persisted in the session slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Condo,
    Cabin,
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Condo,
        PropertyType::Cabin,
        PropertyType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Condo => "condo",
            PropertyType::Cabin => "cabin",
            PropertyType::Other => "other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown property type '{0}'")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    /// Tags are matched exactly, the same way the filter compares them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

/// A listed rental unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    /// Nightly rate
    pub price: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub max_guests: u32,
    pub host_id: String,
    pub rating: f32,
    pub review_count: u32,
    /// Carried along with the listing but never consulted by search.
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Everything a host submits for a new listing; id and timestamp are assigned by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub price: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub max_guests: u32,
    pub host_id: String,
    pub rating: f32,
    pub review_count: u32,
    pub available_dates: Vec<NaiveDate>,
}

impl NewProperty {
    pub fn into_property(self, id: String, created_at: DateTime<Utc>) -> Property {
        Property {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            price: self.price,
            images: self.images,
            amenities: self.amenities,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            max_guests: self.max_guests,
            host_id: self.host_id,
            rating: self.rating,
            review_count: self.review_count,
            available_dates: self.available_dates,
            created_at,
        }
    }
}

/// Partial listing update. Present fields overwrite, absent fields stay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub price: Option<u32>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub max_guests: Option<u32>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub available_dates: Option<Vec<NaiveDate>>,
}

impl PropertyUpdate {
    pub fn apply_to(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(images) = self.images {
            property.images = images;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(max_guests) = self.max_guests {
            property.max_guests = max_guests;
        }
        if let Some(rating) = self.rating {
            property.rating = rating;
        }
        if let Some(review_count) = self.review_count {
            property.review_count = review_count;
        }
        if let Some(available_dates) = self.available_dates {
            property.available_dates = available_dates;
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A guest's reservation of a property for a date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    /// Fixed at booking time, never recomputed.
    pub total_price: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Half-open ranges: a check-out day may be another stay's check-in day.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in < check_out && check_in < self.check_out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub property_id: String,
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: u64,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn into_booking(self, id: String, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            property_id: self.property_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            total_price: self.total_price,
            status: self.status,
            created_at,
        }
    }
}

/// Search criteria narrowing the visible property set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Matched against city or country, empty means anywhere
    pub location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub min_price: u32,
    pub max_price: u32,
    /// None means any type
    pub property_type: Option<PropertyType>,
    /// Every label listed here must be on the property
    pub amenities: Vec<String>,
}

impl SearchFilters {
    pub const DEFAULT_MIN_PRICE: u32 = 0;
    pub const DEFAULT_MAX_PRICE: u32 = 1000;
    pub const DEFAULT_GUESTS: u32 = 1;
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            check_in: None,
            check_out: None,
            guests: Self::DEFAULT_GUESTS,
            min_price: Self::DEFAULT_MIN_PRICE,
            max_price: Self::DEFAULT_MAX_PRICE,
            property_type: None,
            amenities: Vec::new(),
        }
    }
}
