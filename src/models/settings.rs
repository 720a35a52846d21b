//! Persisted calculator state
//!
//! Two independent entries in the settings key/value table: the last entered
//! body weight and the last entered recipe. Reads never fail on a bad
//! payload; they fall back to the documented defaults instead.

use std::collections::BTreeMap;

use rusqlite::{params, Connection};

use crate::db::DbResult;
use super::Recipe;

/// Default body weight in kg when nothing valid is stored
pub const DEFAULT_WEIGHT_KG: f64 = 4.0;

const WEIGHT_KEY: &str = "weight";
const RECIPE_KEY: &str = "recipe";

/// Typed access to the persisted weight and recipe
pub struct Settings;

impl Settings {
    /// Read a raw value from the settings table
    fn get_raw(conn: &Connection, key: &str) -> DbResult<Option<String>> {
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;

        let result = stmt.query_row([key], |row| row.get(0));
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a raw value into the settings table (upsert)
    fn set_raw(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
        conn.execute(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Last entered body weight in kg
    ///
    /// Falls back to [`DEFAULT_WEIGHT_KG`] when the entry is absent,
    /// unparsable, non-finite or zero. Negative weights are kept as entered;
    /// the calculator never validates sign.
    pub fn weight(conn: &Connection) -> DbResult<f64> {
        match Self::get_raw(conn, WEIGHT_KEY)? {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(w) if w.is_finite() && w != 0.0 => Ok(w),
                _ => {
                    tracing::warn!(
                        "stored weight {:?} is unusable, falling back to {} kg",
                        raw,
                        DEFAULT_WEIGHT_KG
                    );
                    Ok(DEFAULT_WEIGHT_KG)
                }
            },
            None => Ok(DEFAULT_WEIGHT_KG),
        }
    }

    /// Persist the body weight
    pub fn set_weight(conn: &Connection, weight_kg: f64) -> DbResult<()> {
        Self::set_raw(conn, WEIGHT_KEY, &weight_kg.to_string())
    }

    /// Last entered recipe
    ///
    /// Falls back to the all-zero recipe when the entry is absent, unparsable
    /// or an empty mapping.
    pub fn recipe(conn: &Connection) -> DbResult<Recipe> {
        match Self::get_raw(conn, RECIPE_KEY)? {
            Some(raw) => match serde_json::from_str::<BTreeMap<String, f64>>(&raw) {
                Ok(map) if !map.is_empty() => Ok(Recipe::from_named_map(&map)),
                Ok(_) => Ok(Recipe::new()),
                Err(e) => {
                    tracing::warn!("stored recipe is unreadable ({}), starting fresh", e);
                    Ok(Recipe::new())
                }
            },
            None => Ok(Recipe::new()),
        }
    }

    /// Persist the recipe as a name-keyed JSON mapping
    pub fn set_recipe(conn: &Connection, recipe: &Recipe) -> DbResult<()> {
        let payload = serde_json::to_string(&recipe.to_named_map())?;
        Self::set_raw(conn, RECIPE_KEY, &payload)
    }
}
