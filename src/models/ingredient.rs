//! Ingredient reference table
//!
//! Embedded per-100g nutritional profiles for every ingredient the planner
//! knows about. Values are taken from the MEXT food composition database
//! (https://fooddb.mext.go.jp) and never change at runtime.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// An ingredient in the reference table
///
/// Declaration order is the display order; the Japanese name returned by
/// [`Ingredient::name`] is the stable identifier used in persisted recipes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Ingredient {
    ChickenTenderloin,
    ChickenBreast,
    ChickenThigh,
    PorkLeg,
    Mozzarella,
    Broccoli,
    Carrot,
    Pumpkin,
    Potato,
    SweetPotato,
}

impl Ingredient {
    /// All ingredients, in display order
    pub const ALL: [Ingredient; 10] = [
        Ingredient::ChickenTenderloin,
        Ingredient::ChickenBreast,
        Ingredient::ChickenThigh,
        Ingredient::PorkLeg,
        Ingredient::Mozzarella,
        Ingredient::Broccoli,
        Ingredient::Carrot,
        Ingredient::Pumpkin,
        Ingredient::Potato,
        Ingredient::SweetPotato,
    ];

    /// Display name; also the key used for persisted recipes
    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::ChickenTenderloin => "とりささみ肉",
            Ingredient::ChickenBreast => "とりむね肉",
            Ingredient::ChickenThigh => "とりもも肉",
            Ingredient::PorkLeg => "ぶたもも肉",
            Ingredient::Mozzarella => "モッツアレラチーズ",
            Ingredient::Broccoli => "ブロッコリー",
            Ingredient::Carrot => "にんじん",
            Ingredient::Pumpkin => "かぼちゃ",
            Ingredient::Potato => "じゃがいも",
            Ingredient::SweetPotato => "さつまいも",
        }
    }

    /// Emoji shown next to the ingredient in lists
    pub fn symbol(&self) -> &'static str {
        match self {
            Ingredient::ChickenTenderloin
            | Ingredient::ChickenBreast
            | Ingredient::ChickenThigh => "🐔",
            Ingredient::PorkLeg => "🐷",
            Ingredient::Mozzarella => "🧀",
            Ingredient::Broccoli => "🥦",
            Ingredient::Carrot => "🥕",
            Ingredient::Pumpkin => "🫑",
            Ingredient::Potato => "🥔",
            Ingredient::SweetPotato => "🍠",
        }
    }

    /// Look up an ingredient by its display name
    ///
    /// Returns `None` for names not in the table; callers decide whether that
    /// means "skip" (recipe loading) or "report" (user input).
    pub fn from_name(s: &str) -> Option<Ingredient> {
        Self::ALL.iter().copied().find(|i| i.name() == s)
    }

    /// Nutritional profile per 100g
    pub fn profile(&self) -> Nutrition {
        match self {
            Ingredient::ChickenTenderloin => Nutrition {
                energy: 98.0,
                protein: 23.9,
                fat: 0.8,
                carb: 0.1,
            },
            Ingredient::ChickenBreast => Nutrition {
                energy: 113.0,
                protein: 24.4,
                fat: 1.9,
                carb: 0.0,
            },
            Ingredient::ChickenThigh => Nutrition {
                energy: 128.0,
                protein: 22.0,
                fat: 4.8,
                carb: 0.0,
            },
            Ingredient::PorkLeg => Nutrition {
                energy: 171.0,
                protein: 20.5,
                fat: 10.2,
                carb: 0.2,
            },
            Ingredient::Mozzarella => Nutrition {
                energy: 269.0,
                protein: 18.4,
                fat: 19.9,
                carb: 4.2,
            },
            Ingredient::Broccoli => Nutrition {
                energy: 37.0,
                protein: 5.4,
                fat: 0.6,
                carb: 6.6,
            },
            Ingredient::Carrot => Nutrition {
                energy: 32.0,
                protein: 0.7,
                fat: 0.2,
                carb: 8.8,
            },
            Ingredient::Pumpkin => Nutrition {
                energy: 41.0,
                protein: 1.6,
                fat: 0.1,
                carb: 10.9,
            },
            Ingredient::Potato => Nutrition {
                energy: 59.0,
                protein: 1.8,
                fat: 0.1,
                carb: 17.3,
            },
            Ingredient::SweetPotato => Nutrition {
                energy: 126.0,
                protein: 1.2,
                fat: 0.2,
                carb: 31.9,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for ingredient in Ingredient::ALL {
            assert_eq!(Ingredient::from_name(ingredient.name()), Some(ingredient));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Ingredient::from_name("とうふ"), None);
        assert_eq!(Ingredient::from_name(""), None);
    }

    #[test]
    fn test_profile_chicken_breast() {
        let p = Ingredient::ChickenBreast.profile();
        assert_eq!(p.energy, 113.0);
        assert_eq!(p.protein, 24.4);
        assert_eq!(p.fat, 1.9);
        assert_eq!(p.carb, 0.0);
    }

    #[test]
    fn test_profiles_non_negative() {
        for ingredient in Ingredient::ALL {
            let p = ingredient.profile();
            assert!(p.energy >= 0.0);
            assert!(p.protein >= 0.0);
            assert!(p.fat >= 0.0);
            assert!(p.carb >= 0.0);
        }
    }

    #[test]
    fn test_display_order() {
        assert_eq!(Ingredient::ALL[0].name(), "とりささみ肉");
        assert_eq!(Ingredient::ALL[9].name(), "さつまいも");
        // Enum ordering matches display order so ordered maps iterate correctly
        let mut sorted = Ingredient::ALL;
        sorted.sort();
        assert_eq!(sorted, Ingredient::ALL);
    }
}
