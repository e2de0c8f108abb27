use crate::catalog::Catalog;
use crate::models::{Booking, Property, User};

const FEATURED_COUNT: usize = 6;

/// A signed-in user's view of the marketplace
#[derive(Debug)]
pub struct Dashboard<'a> {
    /// Stays this user booked
    pub bookings: Vec<&'a Booking>,
    /// Listings this user hosts
    pub properties: Vec<&'a Property>,
    /// Stays other guests booked at this user's listings
    pub property_bookings: Vec<&'a Booking>,
}

impl<'a> Dashboard<'a> {
    pub fn for_user(catalog: &'a Catalog, user: &User) -> Self {
        let properties: Vec<&Property> = catalog
            .properties()
            .iter()
            .filter(|p| p.host_id == user.id)
            .collect();

        let bookings = catalog
            .bookings()
            .iter()
            .filter(|b| b.guest_id == user.id)
            .collect();

        let property_bookings = catalog
            .bookings()
            .iter()
            .filter(|b| properties.iter().any(|p| p.id == b.property_id))
            .collect();

        Self {
            bookings,
            properties,
            property_bookings,
        }
    }

    /// Mean rating over hosted listings, 0 with none
    pub fn average_rating(&self) -> f32 {
        if self.properties.is_empty() {
            return 0.0;
        }
        let total: f32 = self.properties.iter().map(|p| p.rating).sum();
        total / self.properties.len() as f32
    }
}

/// Listing a booking refers to; `None` once that listing is deleted
pub fn booked_property<'a>(catalog: &'a Catalog, booking: &Booking) -> Option<&'a Property> {
    catalog.property(&booking.property_id)
}

/// Home page picks, the first listings in catalog order
pub fn featured(catalog: &Catalog) -> &[Property] {
    let properties = catalog.properties();
    &properties[..properties.len().min(FEATURED_COUNT)]
}
