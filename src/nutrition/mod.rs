//! Nutrition calculation module
//!
//! Weight-derived requirements and recipe summarization.

pub mod requirements;
pub mod summary;

pub use requirements::{
    daily_energy_requirement, resting_energy_requirement, BaseRequirements, GramRange,
};
pub use summary::{summarize, MacroRatios, RecipeSummary, SummaryRow};
