use anyhow::Context;
use chrono::{Days, Utc};
use clap::Parser;
use easy_stay::actions::submit_booking;
use easy_stay::catalog::Catalog;
use easy_stay::cli::Cli;
use easy_stay::config::AppConfig;
use easy_stay::dashboard::{booked_property, featured, Dashboard};
use easy_stay::forms::BookingForm;
use easy_stay::routes::resolve;
use easy_stay::session::{FileStorage, Session, SessionStorage};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Easy Stay");

    let config = AppConfig::from_env();
    let storage = FileStorage::new(&config.session_dir);
    info!("Session slot: {} backend in {}", storage.backend_name(), storage.dir().display());

    let mut session = Session::restore(storage, &config).await;
    let mut catalog = Catalog::seeded();
    let picks: Vec<&str> = featured(&catalog).iter().map(|p| p.title.as_str()).collect();
    info!("Featured: {}", picks.join(", "));

    info!("/dashboard resolves to {}", resolve("/dashboard", session.is_authenticated()));
    if !session.is_authenticated() {
        session.login("guest@easystay.dev", "demo").await?;
    }
    let user = session.user().context("No signed-in user")?.clone();
    info!("/dashboard resolves to {}", resolve("/dashboard", session.is_authenticated()));

    catalog.set_filters(cli.filter_form().into_filters());

    let results: Vec<_> = catalog.filtered().into_iter().cloned().collect();
    info!("Found {} properties\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} (${}/night)", i + 1, property.title, property.price);
        println!("   {}, {}", property.location.city, property.location.country);
        println!(
            "   {} · {} bedrooms · up to {} guests",
            property.property_type, property.bedrooms, property.max_guests
        );
        println!("   ★ {} ({} reviews)", property.rating, property.review_count);
        println!("   Amenities: {}", property.amenities.join(", "));
        println!();
    }

    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved results to search_results.json");

    if let Some(first) = results.first() {
        let today = Utc::now().date_naive();
        let form = BookingForm {
            check_in: (today + Days::new(7)).to_string(),
            check_out: (today + Days::new(10)).to_string(),
            guests: catalog.filters().guests,
        };
        match submit_booking(&mut catalog, Some(&user), &first.id, &form, &config).await {
            Ok(booking) => info!("Booked {} for ${}", first.title, booking.total_price),
            Err(e) => warn!("Could not book {}: {}", first.title, e),
        }
    }

    let dashboard = Dashboard::for_user(&catalog, &user);
    println!("Dashboard for {}", user.full_name());
    println!("   My bookings: {}", dashboard.bookings.len());
    for booking in &dashboard.bookings {
        let title = booked_property(&catalog, booking)
            .map(|p| p.title.as_str())
            .unwrap_or("(removed listing)");
        println!(
            "   - {} · {} to {} · ${} · {:?}",
            title, booking.check_in, booking.check_out, booking.total_price, booking.status
        );
    }
    println!("   My properties: {}", dashboard.properties.len());
    println!("   Bookings on my properties: {}", dashboard.property_bookings.len());
    println!("   Average rating: {:.1}", dashboard.average_rating());

    Ok(())
}
