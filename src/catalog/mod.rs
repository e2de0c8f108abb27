pub mod filter;
pub mod ids;
pub mod seed;
pub mod store;

pub use filter::{filter_properties, matches};
pub use store::Catalog;
