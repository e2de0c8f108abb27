use crate::models::{Property, SearchFilters};

/// Returns true when `property` satisfies every active criterion in `filters`.
///
/// Check-in and check-out are not consulted.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    matches_location(property, &filters.location)
        && property.max_guests >= filters.guests
        && filters.min_price <= property.price
        && property.price <= filters.max_price
        && filters
            .property_type
            .map_or(true, |wanted| wanted == property.property_type)
        && filters
            .amenities
            .iter()
            .all(|amenity| property.amenities.contains(amenity))
}

fn matches_location(property: &Property, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    let needle = location.to_lowercase();
    property.location.city.to_lowercase().contains(&needle)
        || property.location.country.to_lowercase().contains(&needle)
}

/// Stable filter: matching properties in their original order.
pub fn filter_properties<'a>(properties: &'a [Property], filters: &SearchFilters) -> Vec<&'a Property> {
    properties.iter().filter(|p| matches(p, filters)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_properties;
    use crate::models::PropertyType;

    fn ids(found: &[&Property]) -> Vec<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn default_filters_return_everything_in_order() {
        let properties = seed_properties();
        let found = filter_properties(&properties, &SearchFilters::default());
        assert_eq!(ids(&found), vec!["1", "2", "3"]);
    }

    #[test]
    fn price_outside_range_is_excluded() {
        let properties = seed_properties();

        let filters = SearchFilters { min_price: 200, ..Default::default() };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["1", "2"]);

        let filters = SearchFilters { max_price: 220, ..Default::default() };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["2", "3"]);

        let filters = SearchFilters { min_price: 221, max_price: 449, ..Default::default() };
        assert!(filter_properties(&properties, &filters).is_empty());
    }

    #[test]
    fn amenities_are_a_subset_test() {
        let properties = seed_properties();

        let filters = SearchFilters {
            amenities: vec!["WiFi".to_string(), "Pool".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["1"]);

        let filters = SearchFilters {
            amenities: vec!["Parking".to_string(), "Kitchen".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["1", "2", "3"]);

        let filters = SearchFilters {
            amenities: vec!["wifi".to_string()],
            ..Default::default()
        };
        assert!(filter_properties(&properties, &filters).is_empty());
    }

    #[test]
    fn location_is_case_insensitive_substring_of_city_or_country() {
        let properties = seed_properties();

        let filters = SearchFilters { location: "asp".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["2"]);

        let filters = SearchFilters { location: "NEW YORK".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["3"]);

        let filters = SearchFilters { location: "states".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["1", "2", "3"]);

        let filters = SearchFilters { location: "Ocean Drive".to_string(), ..Default::default() };
        assert!(filter_properties(&properties, &filters).is_empty());
    }

    #[test]
    fn property_type_must_match_exactly() {
        let properties = seed_properties();
        let filters = SearchFilters {
            property_type: Some(PropertyType::Cabin),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&properties, &filters)), vec!["2"]);

        let filters = SearchFilters {
            property_type: Some(PropertyType::Condo),
            ..Default::default()
        };
        assert!(filter_properties(&properties, &filters).is_empty());
    }

    #[test]
    fn guest_capacity_scenario() {
        let properties = seed_properties();

        let filters = SearchFilters { guests: 5, ..Default::default() };
        let found = filter_properties(&properties, &filters);
        assert_eq!(ids(&found), vec!["1"]);
        assert_eq!(found[0].title, "Luxury Beachfront Villa");

        let filters = SearchFilters { guests: 5, max_price: 300, ..Default::default() };
        assert!(filter_properties(&properties, &filters).is_empty());
    }

    #[test]
    fn dates_do_not_narrow_results() {
        let properties = seed_properties();
        let filters = SearchFilters {
            check_in: chrono::NaiveDate::from_ymd_opt(2025, 1, 1),
            check_out: chrono::NaiveDate::from_ymd_opt(2025, 1, 5),
            ..Default::default()
        };
        assert_eq!(filter_properties(&properties, &filters).len(), 3);
    }
}
