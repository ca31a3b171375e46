//! Loading and cleaning of the restaurant dataset.
//!
//! The raw dataset is a JSON array of string-typed rows as exported from
//! the upstream listing dump (ratings like `"4.1/5"`, costs like
//! `"1,200"`, comma-separated cuisine strings). This crate turns those
//! into clean [`dinerec_core::RestaurantRecord`] values and derives the
//! vocabularies the validation layer matches against.

mod clean;
mod error;
mod loader;
mod types;

pub use clean::{parse_cost, parse_rate, split_cuisines};
pub use error::DatasetError;
pub use loader::{load_table, price_stats, unique_cities, unique_cuisines, PriceStats};
pub use types::RawRestaurantRow;
