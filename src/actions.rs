use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::forms::{BookingForm, PropertyForm, ValidationError};
use crate::models::{Booking, Property, User};
use tracing::{info, warn};

/// Validate and store a reservation, then wait out the simulated confirmation delay.
pub async fn submit_booking(
    catalog: &mut Catalog,
    guest: Option<&User>,
    property_id: &str,
    form: &BookingForm,
    config: &AppConfig,
) -> Result<Booking, ValidationError> {
    let property = catalog
        .property(property_id)
        .ok_or_else(|| ValidationError::UnknownProperty(property_id.to_string()))?;

    let booking = match form.validate(guest, property, catalog.bookings()) {
        Ok(booking) => booking,
        Err(e) => {
            warn!("Booking for {} rejected: {}", property_id, e);
            return Err(e);
        }
    };

    let booking = catalog.create_booking(booking).clone();
    tokio::time::sleep(config.booking_latency).await;
    info!("Booking confirmed: {} ({} total)", booking.id, booking.total_price);
    Ok(booking)
}

/// Validate and publish a listing for the signed-in host.
pub async fn submit_property(
    catalog: &mut Catalog,
    host: Option<&User>,
    form: PropertyForm,
    config: &AppConfig,
) -> Result<Property, ValidationError> {
    let host = host.ok_or(ValidationError::LoginRequired)?;
    let listing = form.validate(host).inspect_err(|e| warn!("Listing rejected: {}", e))?;

    let property = catalog.add_property(listing).clone();
    tokio::time::sleep(config.add_property_latency).await;
    Ok(property)
}
