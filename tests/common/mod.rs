#![allow(dead_code)]

use calorie_tracker::db::Database;
use calorie_tracker::models::food::{EnergySource, NutrientProfile};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Create an in-memory database for tests that never reopen it.
pub fn memory_db() -> Database {
    Database::open_in_memory().unwrap()
}

pub fn apple() -> NutrientProfile {
    NutrientProfile::new(
        "apple_raw",
        "Apple (raw, without skin)",
        EnergySource::Explicit(52.0),
        0.3,
        14.0,
        0.2,
    )
}

/// Chicken breast without a stored calorie figure.
pub fn chicken_derived() -> NutrientProfile {
    NutrientProfile::new(
        "chicken_breast",
        "Chicken breast",
        EnergySource::DerivedFromMacros,
        31.0,
        0.0,
        3.6,
    )
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
