//! Core domain types, configuration, and user-input validation for dinerec.
//!
//! Everything downstream of this crate works with canonical values: the
//! validation entry point resolves free-text city/cuisine/price input
//! against the dataset vocabularies, and the engine only ever sees
//! [`ValidatedUserInput`].

mod app_config;
mod config;
mod error;
mod input;
mod normalize;
mod price;
mod tiers;
mod types;
mod vocab;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ValidationError};
pub use input::{validate_user_input, ValidatedUserInput};
pub use normalize::normalize_token;
pub use price::parse_price_preference;
pub use tiers::PriceTiers;
pub use types::{PriceCategory, PricePreference, RecommendedRestaurant, RestaurantRecord};
pub use vocab::resolve_vocab;
