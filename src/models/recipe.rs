//! Recipe model
//!
//! A recipe is a mapping from ingredient to gram amount. New recipes carry
//! every ingredient in the reference table at zero grams and are edited one
//! entry at a time.

use std::collections::BTreeMap;

use super::Ingredient;

/// Ingredient amounts in grams
///
/// Amounts are whatever the user entered: zero and negative values are kept
/// as-is, the calculator does not validate sign. Persistence goes through
/// [`Recipe::to_named_map`] so stored payloads are keyed by display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    amounts: BTreeMap<Ingredient, f64>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe {
    /// Create a recipe with every known ingredient at zero grams
    pub fn new() -> Self {
        let amounts = Ingredient::ALL.iter().map(|&i| (i, 0.0)).collect();
        Self { amounts }
    }

    /// Gram amount for an ingredient (zero if never set)
    pub fn amount(&self, ingredient: Ingredient) -> f64 {
        self.amounts.get(&ingredient).copied().unwrap_or(0.0)
    }

    /// Set the gram amount for one ingredient
    pub fn set_amount(&mut self, ingredient: Ingredient, grams: f64) {
        self.amounts.insert(ingredient, grams);
    }

    /// Iterate over (ingredient, grams) in display order
    pub fn entries(&self) -> impl Iterator<Item = (Ingredient, f64)> + '_ {
        self.amounts.iter().map(|(&i, &g)| (i, g))
    }

    /// Convert to a name-keyed map for persistence
    pub fn to_named_map(&self) -> BTreeMap<String, f64> {
        self.amounts
            .iter()
            .map(|(i, &g)| (i.name().to_string(), g))
            .collect()
    }

    /// Rebuild a recipe from a persisted name-keyed map
    ///
    /// Names not in the reference table are dropped; ingredients missing from
    /// the map come back at zero grams.
    pub fn from_named_map(map: &BTreeMap<String, f64>) -> Self {
        let mut recipe = Self::new();
        for (name, &grams) in map {
            if let Some(ingredient) = Ingredient::from_name(name) {
                recipe.set_amount(ingredient, grams);
            }
        }
        recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        let recipe = Recipe::new();
        let entries: Vec<_> = recipe.entries().collect();
        assert_eq!(entries.len(), Ingredient::ALL.len());
        for (_, grams) in entries {
            assert_eq!(grams, 0.0);
        }
    }

    #[test]
    fn test_set_and_get_amount() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::ChickenBreast, 100.0);
        assert_eq!(recipe.amount(Ingredient::ChickenBreast), 100.0);
        assert_eq!(recipe.amount(Ingredient::Carrot), 0.0);
    }

    #[test]
    fn test_named_map_roundtrip() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::PorkLeg, 80.0);
        recipe.set_amount(Ingredient::Pumpkin, 45.5);

        let map = recipe.to_named_map();
        assert_eq!(map.get("ぶたもも肉"), Some(&80.0));

        let restored = Recipe::from_named_map(&map);
        assert_eq!(restored, recipe);
    }

    #[test]
    fn test_from_named_map_drops_unknown_names() {
        let mut map = BTreeMap::new();
        map.insert("とうふ".to_string(), 500.0);
        map.insert("とりむね肉".to_string(), 100.0);

        let recipe = Recipe::from_named_map(&map);
        assert_eq!(recipe.amount(Ingredient::ChickenBreast), 100.0);
        // Unknown name contributes nothing; every other amount stays zero
        let total: f64 = recipe.entries().map(|(_, g)| g).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_from_named_map_missing_names_are_zero() {
        let map = BTreeMap::new();
        let recipe = Recipe::from_named_map(&map);
        assert_eq!(recipe, Recipe::new());
    }

    #[test]
    fn test_negative_amounts_are_kept() {
        let mut recipe = Recipe::new();
        recipe.set_amount(Ingredient::Potato, -30.0);
        assert_eq!(recipe.amount(Ingredient::Potato), -30.0);
    }
}
