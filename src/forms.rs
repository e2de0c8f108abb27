//! Raw form input coerced into typed values at the edge of the app.

use crate::models::{
    Booking, BookingStatus, Coordinates, Location, NewBooking, NewProperty, Property, PropertyType,
    SearchFilters, User,
};
use chrono::NaiveDate;
use thiserror::Error;

/// Blocking failures shown to the user; the action is abandoned and nothing changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please sign in to continue")]
    LoginRequired,
    #[error("Please fill in all fields")]
    MissingName,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("Unknown property type '{0}'")]
    UnknownPropertyType(String),
    #[error("Please add at least one image URL")]
    NoImages,
    #[error("Please select check-in and check-out dates")]
    MissingDates,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("Check-out must be after check-in")]
    InvalidDateRange,
    #[error("This property hosts between 1 and {max} guests")]
    GuestCount { max: u32 },
    #[error("Property {0} was not found")]
    UnknownProperty(String),
    #[error("These dates are already booked")]
    Unavailable,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search bar and filter panel, as typed
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub min_price: String,
    pub max_price: String,
    pub property_type: String,
    pub amenities: Vec<String>,
}

impl FilterForm {
    /// Never fails: anything unparseable falls back to the filter defaults.
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            location: self.location.trim().to_string(),
            check_in: parse_date(&self.check_in).ok().flatten(),
            check_out: parse_date(&self.check_out).ok().flatten(),
            guests: parse_or(&self.guests, SearchFilters::DEFAULT_GUESTS),
            min_price: parse_or(&self.min_price, SearchFilters::DEFAULT_MIN_PRICE),
            max_price: parse_or(&self.max_price, SearchFilters::DEFAULT_MAX_PRICE),
            property_type: self.property_type.trim().parse().ok(),
            amenities: self.amenities,
        }
    }
}

/// Zero counts as "not entered", same as an empty box. Negative numbers pin to
/// zero and oversized ones to `u32::MAX`, so a bound keeps its direction.
fn parse_or(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => default,
        Ok(n) => u32::try_from(n.max(0)).unwrap_or(u32::MAX),
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// `Ok(None)` for a blank box
fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

/// Add-listing form
#[derive(Debug, Clone)]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub price: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub max_guests: String,
    pub amenities: Vec<String>,
    pub image_urls: Vec<String>,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            price: String::new(),
            property_type: PropertyType::Apartment.to_string(),
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            max_guests: "1".to_string(),
            amenities: Vec::new(),
            image_urls: vec![String::new()],
        }
    }
}

impl PropertyForm {
    pub fn validate(self, host: &User) -> Result<NewProperty, ValidationError> {
        let images: Vec<String> = self
            .image_urls
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        if images.is_empty() {
            return Err(ValidationError::NoImages);
        }

        let property_type = self
            .property_type
            .trim()
            .parse::<PropertyType>()
            .map_err(|_| ValidationError::UnknownPropertyType(self.property_type.clone()))?;

        Ok(NewProperty {
            title: required("Title", &self.title)?,
            description: self.description.trim().to_string(),
            location: Location {
                address: self.address.trim().to_string(),
                city: required("City", &self.city)?,
                country: required("Country", &self.country)?,
                coordinates: Coordinates::default(),
            },
            price: parse_count("Price", &required("Price", &self.price)?)?,
            images,
            amenities: self.amenities,
            property_type,
            bedrooms: parse_count("Bedrooms", &self.bedrooms)?,
            bathrooms: parse_count("Bathrooms", &self.bathrooms)?,
            max_guests: parse_count("Max guests", &self.max_guests)?,
            host_id: host.id.clone(),
            rating: 0.0,
            review_count: 0,
            available_dates: Vec::new(),
        })
    }
}

/// Reservation box on a listing page
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl BookingForm {
    /// Checks run in the order the reservation box reports them.
    pub fn validate(
        &self,
        guest: Option<&User>,
        property: &Property,
        existing: &[Booking],
    ) -> Result<NewBooking, ValidationError> {
        let guest = guest.ok_or(ValidationError::LoginRequired)?;

        let (check_in, check_out) = match (parse_date(&self.check_in)?, parse_date(&self.check_out)?) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return Err(ValidationError::MissingDates),
        };
        if check_out <= check_in {
            return Err(ValidationError::InvalidDateRange);
        }
        if self.guests == 0 || self.guests > property.max_guests {
            return Err(ValidationError::GuestCount { max: property.max_guests });
        }

        let taken = existing
            .iter()
            .filter(|b| b.property_id == property.id && b.is_active())
            .any(|b| b.overlaps(check_in, check_out));
        if taken {
            return Err(ValidationError::Unavailable);
        }

        Ok(NewBooking {
            property_id: property.id.clone(),
            guest_id: guest.id.clone(),
            check_in,
            check_out,
            guests: self.guests,
            total_price: total_price(property.price, check_in, check_out),
            status: BookingStatus::Confirmed,
        })
    }
}

/// Whole nights between the two dates, zero when the range is empty or reversed
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> u64 {
    u64::try_from((check_out - check_in).num_days()).unwrap_or(0)
}

pub fn total_price(nightly: u32, check_in: NaiveDate, check_out: NaiveDate) -> u64 {
    nights(check_in, check_out) * u64::from(nightly)
}

pub fn validate_signup(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}
