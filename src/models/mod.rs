//! Data models
//!
//! The ingredient reference table, recipes and persisted settings.

mod ingredient;
mod nutrition;
mod recipe;
mod settings;

pub use ingredient::Ingredient;
pub use nutrition::Nutrition;
pub use recipe::Recipe;
pub use settings::{Settings, DEFAULT_WEIGHT_KG};
