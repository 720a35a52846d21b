//! Recipe summarization
//!
//! Aggregates a recipe over the ingredient reference table into absolute
//! totals and PFC energy-ratio percentages, and checks the ratios against
//! the recommended distribution.

use serde::Serialize;

use crate::models::{Nutrition, Recipe};
use super::requirements::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Recommended share of PFC-derived energy per macronutrient, in percent
/// (inclusive bounds)
pub const PROTEIN_RATIO_RANGE: (f64, f64) = (25.0, 30.0);
pub const FAT_RATIO_RANGE: (f64, f64) = (15.0, 20.0);
pub const CARB_RATIO_RANGE: (f64, f64) = (50.0, 60.0);

/// Share of PFC-derived energy per macronutrient, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

/// Aggregate nutrition of a recipe
///
/// `ratios` is `None` when the PFC-derived energy is not positive (for
/// example the all-zero recipe); display layers render that as "NaN".
/// Pure function of (recipe, reference table); recomputed on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub totals: Nutrition,
    pub pfc_energy: f64,
    pub ratios: Option<MacroRatios>,
}

/// One labeled value for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Sum a recipe's nutrition over the reference table
///
/// Each entry contributes its per-100g profile scaled by amount/100.
pub fn summarize(recipe: &Recipe) -> RecipeSummary {
    let totals: Nutrition = recipe
        .entries()
        .map(|(ingredient, grams)| ingredient.profile().scale(grams / 100.0))
        .sum();

    let pfc_energy = totals.protein * KCAL_PER_G_PROTEIN
        + totals.fat * KCAL_PER_G_FAT
        + totals.carb * KCAL_PER_G_CARB;

    let ratios = if pfc_energy > 0.0 {
        Some(MacroRatios {
            protein: totals.protein * KCAL_PER_G_PROTEIN / pfc_energy * 100.0,
            fat: totals.fat * KCAL_PER_G_FAT / pfc_energy * 100.0,
            carb: totals.carb * KCAL_PER_G_CARB / pfc_energy * 100.0,
        })
    } else {
        None
    };

    RecipeSummary {
        totals,
        pfc_energy,
        ratios,
    }
}

fn within(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}

impl RecipeSummary {
    /// True iff every ratio sits inside its recommended range
    ///
    /// Undefined ratios count as out of range.
    pub fn is_within_recommended_range(&self) -> bool {
        match self.ratios {
            Some(r) => {
                within(r.protein, PROTEIN_RATIO_RANGE)
                    && within(r.fat, FAT_RATIO_RANGE)
                    && within(r.carb, CARB_RATIO_RANGE)
            }
            None => false,
        }
    }

    /// The seven display values with labels and units
    ///
    /// Undefined ratios surface as NaN here so `{:.0}` formatting prints the
    /// literal "NaN"; the typed API stays on [`RecipeSummary::ratios`].
    pub fn rows(&self) -> [SummaryRow; 7] {
        let (protein_ratio, fat_ratio, carb_ratio) = match self.ratios {
            Some(r) => (r.protein, r.fat, r.carb),
            None => (f64::NAN, f64::NAN, f64::NAN),
        };

        [
            SummaryRow {
                label: "総エネルギー",
                value: self.totals.energy,
                unit: "kcal",
            },
            SummaryRow {
                label: "総タンパク質量",
                value: self.totals.protein,
                unit: "g",
            },
            SummaryRow {
                label: "総脂質量",
                value: self.totals.fat,
                unit: "g",
            },
            SummaryRow {
                label: "総炭水化物量",
                value: self.totals.carb,
                unit: "g",
            },
            SummaryRow {
                label: "タンパク質割合",
                value: protein_ratio,
                unit: "%",
            },
            SummaryRow {
                label: "脂質割合",
                value: fat_ratio,
                unit: "%",
            },
            SummaryRow {
                label: "炭水化物割合",
                value: carb_ratio,
                unit: "%",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    #[test]
    fn test_empty_recipe() {
        let summary = summarize(&Recipe::new());
        assert_eq!(summary.totals, Nutrition::zero());
        assert_eq!(summary.pfc_energy, 0.0);
        assert_eq!(summary.ratios, None);
        assert!(!summary.is_within_recommended_range());
    }

    #[test]
    fn test_single_ingredient_passthrough() {
        // 100g of chicken breast is the per-100g profile verbatim
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::ChickenBreast, 100.0);

        let summary = summarize(&recipe);
        assert_eq!(summary.totals.energy, 113.0);
        assert_eq!(summary.totals.protein, 24.4);
        assert_eq!(summary.totals.fat, 1.9);
        assert_eq!(summary.totals.carb, 0.0);
    }

    #[test]
    fn test_amount_scaling() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::Carrot, 50.0);

        let summary = summarize(&recipe);
        assert_eq!(summary.totals.energy, 32.0 * 0.5);
        assert_eq!(summary.totals.carb, 8.8 * 0.5);
    }

    #[test]
    fn test_ratios_sum_to_hundred() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::ChickenThigh, 60.0);
        recipe.set_amount(Ingredient::Pumpkin, 80.0);

        let ratios = summarize(&recipe).ratios.unwrap();
        let total = ratios.protein + ratios.fat + ratios.carb;
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_is_pure() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::PorkLeg, 70.0);
        recipe.set_amount(Ingredient::SweetPotato, 30.0);

        assert_eq!(summarize(&recipe), summarize(&recipe));
    }

    #[test]
    fn test_verdict_bounds() {
        let ok = RecipeSummary {
            totals: Nutrition::zero(),
            pfc_energy: 100.0,
            ratios: Some(MacroRatios {
                protein: 27.0,
                fat: 18.0,
                carb: 55.0,
            }),
        };
        assert!(ok.is_within_recommended_range());

        let low_protein = RecipeSummary {
            ratios: Some(MacroRatios {
                protein: 20.0,
                fat: 18.0,
                carb: 55.0,
            }),
            ..ok
        };
        assert!(!low_protein.is_within_recommended_range());

        // Bounds are inclusive
        let edges = RecipeSummary {
            ratios: Some(MacroRatios {
                protein: 25.0,
                fat: 20.0,
                carb: 60.0,
            }),
            ..ok
        };
        assert!(edges.is_within_recommended_range());
    }

    #[test]
    fn test_rows_render_nan_for_undefined_ratios() {
        let rows = summarize(&Recipe::new()).rows();
        assert_eq!(format!("{:.0}", rows[4].value), "NaN");
        assert_eq!(rows[4].unit, "%");
        // Totals stay zero, not NaN
        assert_eq!(format!("{:.0}", rows[0].value), "0");
    }
}
