//! inugohan
//!
//! Dog meal nutrition calculator CLI. Stands in for the UI layer: loads the
//! persisted weight and recipe, applies one edit per invocation, recomputes
//! and prints the result.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use inugohan::chart;
use inugohan::db::{self, Database};
use inugohan::models::{Ingredient, Recipe, Settings};
use inugohan::nutrition::{summarize, BaseRequirements};
use inugohan::report;

/// Get the database path from environment or use default
fn get_database_path() -> PathBuf {
    std::env::var("INUGOHAN_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("inugohan.db");
            path
        })
}

fn print_usage() {
    eprintln!("Usage: inugohan [COMMAND]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  show                     Print requirements, recipe and summary (default)");
    eprintln!("  weight <kg>              Set the body weight and recompute");
    eprintln!("  set <ingredient> <g>     Set one ingredient amount and recompute");
    eprintln!("  reset                    Reset the recipe to all-zero amounts");
    eprintln!("  chart [path]             Write the PFC radar chart PNG (default recipe.png)");
    eprintln!("  help                     Show this message");
    eprintln!();
    eprintln!("Ingredients:");
    for ingredient in Ingredient::ALL {
        eprintln!("  {} {}", ingredient.symbol(), ingredient.name());
    }
}

/// Load state, recompute everything and print the full view
fn show(database: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let (weight, recipe) = database.with_conn(|conn| {
        Ok((Settings::weight(conn)?, Settings::recipe(conn)?))
    })?;

    let base = BaseRequirements::for_weight(weight);
    let summary = summarize(&recipe);

    println!("🐶 こてグルメ 🍖");
    println!();
    println!("📝 必要栄養素");
    print!("{}", report::format_requirements(&base));
    println!();
    println!("🍽️ レシピ");
    print!("{}", report::format_recipe(&recipe));
    println!();
    println!("栄養素");
    print!("{}", report::format_summary(&summary));
    println!("{}", report::format_verdict(&summary));

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("inugohan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let db_path = get_database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = Database::new(&db_path)?;
    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        tracing::debug!("database schema version {}", version);
        Ok(())
    })?;
    tracing::info!("using database at {}", db_path.display());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("show") => show(&database)?,
        Some("weight") => {
            let raw = args
                .get(1)
                .ok_or_else(|| "weight requires a value in kg".to_string())?;
            let kg: f64 = raw
                .parse()
                .map_err(|_| format!("weight must be a number, got {:?}", raw))?;
            database.with_conn(|conn| Settings::set_weight(conn, kg))?;
            show(&database)?;
        }
        Some("set") => {
            let name = args
                .get(1)
                .ok_or_else(|| "set requires an ingredient name and grams".to_string())?;
            let raw = args
                .get(2)
                .ok_or_else(|| "set requires a gram amount".to_string())?;
            let grams: f64 = raw
                .parse()
                .map_err(|_| format!("amount must be a number, got {:?}", raw))?;

            match Ingredient::from_name(name) {
                Some(ingredient) => {
                    database.with_conn(|conn| {
                        let mut recipe = Settings::recipe(conn)?;
                        recipe.set_amount(ingredient, grams);
                        Settings::set_recipe(conn, &recipe)
                    })?;
                    show(&database)?;
                }
                None => {
                    eprintln!("Unknown ingredient: {}", name);
                    print_usage();
                    std::process::exit(2);
                }
            }
        }
        Some("reset") => {
            database.with_conn(|conn| Settings::set_recipe(conn, &Recipe::new()))?;
            show(&database)?;
        }
        Some("chart") => {
            let path = args.get(1).map(String::as_str).unwrap_or("recipe.png");
            let recipe = database.with_conn(|conn| Settings::recipe(conn))?;
            let summary = summarize(&recipe);
            chart::write_radar_png(Path::new(path), &summary, 400, 250)?;
            println!("Wrote {}", path);
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
