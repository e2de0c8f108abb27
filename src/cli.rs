use crate::forms::FilterForm;
use clap::Parser;

// Values stay raw text; the filter form decides what they fall back to.
#[derive(Debug, Parser)]
#[command(
    name = "easy-stay",
    version,
    about = "Search the Easy Stay listings, book the first match and show your dashboard"
)]
pub struct Cli {
    /// City or country to search in
    pub location: Option<String>,
    #[arg(long)]
    pub guests: Option<String>,
    /// Lowest nightly price
    #[arg(long)]
    pub min_price: Option<String>,
    /// Highest nightly price
    #[arg(long)]
    pub max_price: Option<String>,
    /// apartment, house, villa, condo, cabin or other
    #[arg(long = "type")]
    pub property_type: Option<String>,
    /// Required amenity, repeatable
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
    #[arg(long)]
    pub check_in: Option<String>,
    #[arg(long)]
    pub check_out: Option<String>,
}

impl Cli {
    pub fn filter_form(&self) -> FilterForm {
        FilterForm {
            location: self.location.clone().unwrap_or_default(),
            check_in: self.check_in.clone().unwrap_or_default(),
            check_out: self.check_out.clone().unwrap_or_default(),
            guests: self.guests.clone().unwrap_or_default(),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            property_type: self.property_type.clone().unwrap_or_default(),
            amenities: self.amenities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    #[test]
    fn flags_fill_the_filter_form() {
        let cli = Cli::try_parse_from([
            "easy-stay",
            "aspen",
            "--guests",
            "2",
            "--max-price",
            "300",
            "--type",
            "cabin",
            "--amenity",
            "WiFi",
            "--amenity",
            "Hot Tub",
        ])
        .unwrap();

        let filters = cli.filter_form().into_filters();
        assert_eq!(filters.location, "aspen");
        assert_eq!(filters.guests, 2);
        assert_eq!(filters.min_price, 0);
        assert_eq!(filters.max_price, 300);
        assert_eq!(filters.property_type, Some(PropertyType::Cabin));
        assert_eq!(filters.amenities, vec!["WiFi".to_string(), "Hot Tub".to_string()]);
    }

    #[test]
    fn no_arguments_means_default_filters() {
        let cli = Cli::try_parse_from(["easy-stay"]).unwrap();
        assert_eq!(cli.filter_form().into_filters(), crate::models::SearchFilters::default());
    }

    #[test]
    fn help_is_not_a_location() {
        let err = Cli::try_parse_from(["easy-stay", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
