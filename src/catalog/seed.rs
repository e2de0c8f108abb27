use crate::models::{Coordinates, Location, Property, PropertyType};
use chrono::Utc;
use tracing::debug;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The listings the marketplace starts with
pub fn seed_properties() -> Vec<Property> {
    debug!("Loading seed listings");

    vec![
        Property {
            id: "1".to_string(),
            title: "Luxury Beachfront Villa".to_string(),
            description: "A stunning beachfront villa with panoramic ocean views, private beach access, and world-class amenities.".to_string(),
            location: Location {
                address: "123 Ocean Drive".to_string(),
                city: "Malibu".to_string(),
                country: "United States".to_string(),
                coordinates: Coordinates { lat: 34.0259, lng: -118.7798 },
            },
            price: 450,
            images: strings(&[
                "https://images.pexels.com/photos/1115804/pexels-photo-1115804.jpeg",
                "https://images.pexels.com/photos/2082087/pexels-photo-2082087.jpeg",
                "https://images.pexels.com/photos/2635038/pexels-photo-2635038.jpeg",
            ]),
            amenities: strings(&["WiFi", "Pool", "Beach Access", "Parking", "Kitchen", "Air Conditioning"]),
            property_type: PropertyType::Villa,
            bedrooms: 4,
            bathrooms: 3,
            max_guests: 8,
            host_id: "1".to_string(),
            rating: 4.9,
            review_count: 127,
            available_dates: vec![],
            created_at: Utc::now(),
        },
        Property {
            id: "2".to_string(),
            title: "Cozy Mountain Cabin".to_string(),
            description: "Perfect retreat in the mountains with fireplace, hot tub, and hiking trails right outside your door.".to_string(),
            location: Location {
                address: "456 Pine Ridge Road".to_string(),
                city: "Aspen".to_string(),
                country: "United States".to_string(),
                coordinates: Coordinates { lat: 39.1911, lng: -106.8175 },
            },
            price: 220,
            images: strings(&[
                "https://images.pexels.com/photos/338504/pexels-photo-338504.jpeg",
                "https://images.pexels.com/photos/2724748/pexels-photo-2724748.jpeg",
                "https://images.pexels.com/photos/2343468/pexels-photo-2343468.jpeg",
            ]),
            amenities: strings(&["WiFi", "Fireplace", "Hot Tub", "Parking", "Kitchen", "Heating"]),
            property_type: PropertyType::Cabin,
            bedrooms: 2,
            bathrooms: 2,
            max_guests: 4,
            host_id: "2".to_string(),
            rating: 4.7,
            review_count: 89,
            available_dates: vec![],
            created_at: Utc::now(),
        },
        Property {
            id: "3".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            description: "Stylish apartment in the heart of the city with spectacular skyline views and premium amenities.".to_string(),
            location: Location {
                address: "789 Urban Plaza".to_string(),
                city: "New York".to_string(),
                country: "United States".to_string(),
                coordinates: Coordinates { lat: 40.7128, lng: -74.0060 },
            },
            price: 180,
            images: strings(&[
                "https://images.pexels.com/photos/2121121/pexels-photo-2121121.jpeg",
                "https://images.pexels.com/photos/1743229/pexels-photo-1743229.jpeg",
                "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg",
            ]),
            amenities: strings(&["WiFi", "Gym", "Concierge", "Parking", "Kitchen", "Air Conditioning"]),
            property_type: PropertyType::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            max_guests: 2,
            host_id: "3".to_string(),
            rating: 4.6,
            review_count: 203,
            available_dates: vec![],
            created_at: Utc::now(),
        },
    ]
}
