//! Platelog Estimate: turns free-text meal descriptions into a calorie
//! estimate.
//!
//! Segments are normalized, a leading quantity is parsed, and the longest
//! dictionary key contained in the segment wins. Segments with no match are
//! collected so the caller can ask the user for their calories.

pub mod dictionary;
pub mod estimator;
pub mod foods;
pub mod matcher;
pub mod normalize;
pub mod quantity;
pub mod types;

pub use dictionary::{FoodDictionary, FoodTable};
pub use estimator::{split_segments, MealEstimator};
pub use matcher::match_food;
pub use normalize::normalize;
pub use quantity::parse_quantity;
pub use types::*;

pub use platelog_store::{MealSlot, MealTexts};
