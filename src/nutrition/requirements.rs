//! Per-meal requirement calculation
//!
//! Derives daily and per-meal energy needs from body weight, plus the
//! recommended gram range per macronutrient for one meal.

use serde::{Deserialize, Serialize};

/// Coefficient of the resting energy requirement formula
pub const RER_COEFFICIENT: f64 = 70.0;
/// Exponent applied to body weight in the RER formula
pub const RER_EXPONENT: f64 = 0.75;
/// Fixed activity coefficient; no breed, age or neuter adjustment
pub const ACTIVITY_COEFFICIENT: f64 = 1.6;
/// Fixed two-meals-per-day assumption
pub const MEALS_PER_DAY: f64 = 2.0;

/// Energy density per gram of each macronutrient (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Target share of per-meal energy from each macronutrient (min, max)
pub const PROTEIN_ENERGY_SHARE: (f64, f64) = (0.25, 0.30);
pub const FAT_ENERGY_SHARE: (f64, f64) = (0.15, 0.20);
pub const CARB_ENERGY_SHARE: (f64, f64) = (0.50, 0.60);

/// Recommended gram range for one macronutrient in one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GramRange {
    pub min: f64,
    pub max: f64,
}

impl GramRange {
    /// Gram range covering a share of the meal's energy at the given density
    fn from_energy_share(energy_per_meal: f64, share: (f64, f64), kcal_per_g: f64) -> Self {
        Self {
            min: energy_per_meal * share.0 / kcal_per_g,
            max: energy_per_meal * share.1 / kcal_per_g,
        }
    }
}

/// Weight-derived nutritional requirements
///
/// Pure function of body weight; recomputed on every weight change, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRequirements {
    pub weight_kg: f64,
    pub energy_per_day: f64,
    pub energy_per_meal: f64,
    pub protein_per_meal: GramRange,
    pub fat_per_meal: GramRange,
    pub carb_per_meal: GramRange,
}

/// Resting energy requirement in kcal: 70 * weight^0.75
pub fn resting_energy_requirement(weight_kg: f64) -> f64 {
    RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT)
}

/// Daily energy requirement in kcal: RER scaled by the activity coefficient
pub fn daily_energy_requirement(weight_kg: f64) -> f64 {
    resting_energy_requirement(weight_kg) * ACTIVITY_COEFFICIENT
}

impl BaseRequirements {
    /// Compute the requirements for a body weight in kg
    ///
    /// The UI constrains input to 0.0..=5.0 but those bounds are advisory;
    /// any weight is accepted and computed as-is.
    pub fn for_weight(weight_kg: f64) -> Self {
        let energy_per_day = daily_energy_requirement(weight_kg);
        let energy_per_meal = energy_per_day / MEALS_PER_DAY;

        Self {
            weight_kg,
            energy_per_day,
            energy_per_meal,
            protein_per_meal: GramRange::from_energy_share(
                energy_per_meal,
                PROTEIN_ENERGY_SHARE,
                KCAL_PER_G_PROTEIN,
            ),
            fat_per_meal: GramRange::from_energy_share(
                energy_per_meal,
                FAT_ENERGY_SHARE,
                KCAL_PER_G_FAT,
            ),
            carb_per_meal: GramRange::from_energy_share(
                energy_per_meal,
                CARB_ENERGY_SHARE,
                KCAL_PER_G_CARB,
            ),
        }
    }
}
