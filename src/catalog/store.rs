use crate::catalog::filter::filter_properties;
use crate::catalog::ids::IdGenerator;
use crate::catalog::seed::seed_properties;
use crate::models::{
    Booking, BookingStatus, NewBooking, NewProperty, Property, PropertyUpdate, SearchFilters,
};
use chrono::Utc;
use tracing::{debug, info};

/// In-memory listings and bookings plus the active search filters
#[derive(Debug, Default)]
pub struct Catalog {
    properties: Vec<Property>,
    bookings: Vec<Booking>,
    filters: SearchFilters,
    ids: IdGenerator,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the seed listings
    pub fn seeded() -> Self {
        Self::with_properties(seed_properties())
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        debug!("Search filters updated: {:?}", filters);
        self.filters = filters;
    }

    /// Listings matching the current filters, in catalog order
    pub fn filtered(&self) -> Vec<&Property> {
        filter_properties(&self.properties, &self.filters)
    }

    pub fn add_property(&mut self, input: NewProperty) -> &Property {
        let property = input.into_property(self.ids.next_id(), Utc::now());
        info!("Listing added: {} ({})", property.title, property.id);
        self.properties.push(property);
        &self.properties[self.properties.len() - 1]
    }

    /// Returns false when no listing has that id.
    pub fn update_property(&mut self, id: &str, update: PropertyUpdate) -> bool {
        match self.properties.iter_mut().find(|p| p.id == id) {
            Some(property) => {
                update.apply_to(property);
                info!("Listing updated: {}", id);
                true
            }
            None => {
                debug!("Update ignored, no listing {}", id);
                false
            }
        }
    }

    /// Bookings referencing the listing are left in place.
    pub fn delete_property(&mut self, id: &str) -> bool {
        let before = self.properties.len();
        self.properties.retain(|p| p.id != id);
        let removed = self.properties.len() != before;
        if removed {
            info!("Listing deleted: {}", id);
        }
        removed
    }

    /// Stores the booking as given; dates and price are not checked here.
    pub fn create_booking(&mut self, input: NewBooking) -> &Booking {
        let booking = input.into_booking(self.ids.next_id(), Utc::now());
        info!(
            "Booking {} created for listing {} ({} to {})",
            booking.id, booking.property_id, booking.check_in, booking.check_out
        );
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }

    pub fn cancel_booking(&mut self, id: &str) -> bool {
        match self.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                info!("Booking cancelled: {}", id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Location, PropertyType};
    use chrono::NaiveDate;

    fn new_property(title: &str, host: &str) -> NewProperty {
        NewProperty {
            title: title.to_string(),
            description: "Quiet flat".to_string(),
            location: Location {
                address: "1 Main St".to_string(),
                city: "Lisbon".to_string(),
                country: "Portugal".to_string(),
                coordinates: Coordinates::default(),
            },
            price: 95,
            images: vec!["https://example.com/a.jpg".to_string()],
            amenities: vec!["WiFi".to_string()],
            property_type: PropertyType::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            max_guests: 2,
            host_id: host.to_string(),
            rating: 0.0,
            review_count: 0,
            available_dates: vec![],
        }
    }

    fn new_booking(property_id: &str, guest_id: &str) -> NewBooking {
        NewBooking {
            property_id: property_id.to_string(),
            guest_id: guest_id.to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            guests: 2,
            total_price: 660,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn add_property_assigns_id_and_appends() {
        let mut catalog = Catalog::seeded();
        let id = catalog.add_property(new_property("Loft", "7")).id.clone();

        assert_eq!(catalog.properties().len(), 4);
        assert_eq!(catalog.properties().last().unwrap().id, id);
        assert!(!["1", "2", "3"].contains(&id.as_str()));

        let second = catalog.add_property(new_property("Loft 2", "7")).id.clone();
        assert_ne!(id, second);
    }

    #[test]
    fn update_property_merges_only_present_fields() {
        let mut catalog = Catalog::seeded();
        let before = catalog.property("2").unwrap().clone();

        let touched = catalog.update_property(
            "2",
            PropertyUpdate {
                price: Some(250),
                title: Some("Cozier Mountain Cabin".to_string()),
                ..Default::default()
            },
        );
        assert!(touched);

        let after = catalog.property("2").unwrap();
        assert_eq!(after.price, 250);
        assert_eq!(after.title, "Cozier Mountain Cabin");
        assert_eq!(after.amenities, before.amenities);
        assert_eq!(after.location, before.location);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut catalog = Catalog::seeded();
        let before = catalog.properties().to_vec();
        assert!(!catalog.update_property("nope", PropertyUpdate { price: Some(1), ..Default::default() }));
        assert_eq!(catalog.properties(), before.as_slice());
    }

    #[test]
    fn deleted_property_never_comes_back_from_search() {
        let mut catalog = Catalog::seeded();
        let booking_id = catalog.create_booking(new_booking("1", "9")).id.clone();

        assert!(catalog.delete_property("1"));
        assert!(!catalog.delete_property("1"));
        assert!(catalog.filtered().iter().all(|p| p.id != "1"));

        catalog.set_filters(SearchFilters { guests: 5, ..Default::default() });
        assert!(catalog.filtered().is_empty());

        // No cascade onto bookings
        assert!(catalog.booking(&booking_id).is_some());
    }

    #[test]
    fn cancel_booking_only_touches_that_status() {
        let mut catalog = Catalog::seeded();
        let first = catalog.create_booking(new_booking("1", "9")).clone();
        let second = catalog.create_booking(new_booking("2", "9")).clone();

        assert!(catalog.cancel_booking(&first.id));

        let cancelled = catalog.booking(&first.id).unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(
            Booking { status: first.status, ..cancelled.clone() },
            first
        );
        assert_eq!(catalog.booking(&second.id).unwrap(), &second);
        assert!(!catalog.cancel_booking("missing"));
    }

    #[test]
    fn filtered_uses_current_filters() {
        let mut catalog = Catalog::seeded();
        catalog.set_filters(SearchFilters { location: "malibu".to_string(), ..Default::default() });
        let found: Vec<_> = catalog.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(found, vec!["1"]);
    }
}
