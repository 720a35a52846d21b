//! Shared nutrition data structure
//!
//! Used for per-100g ingredient profiles and for recipe totals.

use serde::{Deserialize, Serialize};

/// Nutritional values: energy in kcal, macronutrients in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            energy: self.energy * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carb: self.carb * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            energy: self.energy + other.energy,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carb: self.carb + other.carb,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let n = Nutrition::zero();
        assert_eq!(n.energy, 0.0);
        assert_eq!(n.protein, 0.0);
        assert_eq!(n.fat, 0.0);
        assert_eq!(n.carb, 0.0);
    }

    #[test]
    fn test_scale() {
        let n = Nutrition {
            energy: 100.0,
            protein: 20.0,
            fat: 5.0,
            carb: 2.0,
        };
        let half = n.scale(0.5);
        assert_eq!(half.energy, 50.0);
        assert_eq!(half.protein, 10.0);
        assert_eq!(half.fat, 2.5);
        assert_eq!(half.carb, 1.0);
    }

    #[test]
    fn test_sum() {
        let a = Nutrition {
            energy: 100.0,
            protein: 10.0,
            fat: 1.0,
            carb: 0.5,
        };
        let b = Nutrition {
            energy: 50.0,
            protein: 2.0,
            fat: 0.5,
            carb: 10.0,
        };
        let total: Nutrition = vec![a, b].into_iter().sum();
        assert_eq!(total.energy, 150.0);
        assert_eq!(total.protein, 12.0);
        assert_eq!(total.fat, 1.5);
        assert_eq!(total.carb, 10.5);
    }
}
