//! Terminal report formatting
//!
//! Text tables for the requirements (1 decimal place) and the recipe summary
//! (0 decimal places, ratios as percentages). Undefined ratios print as the
//! literal "NaN".

use crate::models::Recipe;
use crate::nutrition::{BaseRequirements, RecipeSummary};

/// Format the weight-derived requirements table
pub fn format_requirements(base: &BaseRequirements) -> String {
    let mut out = String::new();
    out.push_str(&format!("現在の体重: {:.1} kg\n", base.weight_kg));
    out.push_str(&format!(
        "1日あたりの必要カロリー: {:.1} kcal\n",
        base.energy_per_day
    ));
    out.push_str(&format!(
        "1食あたりの必要カロリー: {:.1} kcal\n",
        base.energy_per_meal
    ));
    out.push_str(&format!(
        "1食あたりの必要タンパク質量: {:.1} 〜 {:.1} g\n",
        base.protein_per_meal.min, base.protein_per_meal.max
    ));
    out.push_str(&format!(
        "1食あたりの必要脂質量: {:.1} 〜 {:.1} g\n",
        base.fat_per_meal.min, base.fat_per_meal.max
    ));
    out.push_str(&format!(
        "1食あたりの必要炭水化物量: {:.1} 〜 {:.1} g\n",
        base.carb_per_meal.min, base.carb_per_meal.max
    ));
    out
}

/// Format the recipe ingredient list with amounts
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    for (ingredient, grams) in recipe.entries() {
        out.push_str(&format!(
            "{} {}: {} g\n",
            ingredient.symbol(),
            ingredient.name(),
            grams
        ));
    }
    out
}

/// Format the summary table (totals and ratios)
pub fn format_summary(summary: &RecipeSummary) -> String {
    let mut out = String::new();
    for row in summary.rows() {
        out.push_str(&format!("{}: {:.0} {}\n", row.label, row.value, row.unit));
    }
    out
}

/// One-line PFC balance verdict
pub fn format_verdict(summary: &RecipeSummary) -> &'static str {
    if summary.is_within_recommended_range() {
        "PFCバランス: OK 🟢"
    } else {
        "PFCバランス: 目標範囲外 🟡"
    }
}
