use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged quantity of food with its absolute nutrient contribution.
///
/// Name and figures are copied out of the food at logging time, so later
/// edits to the food never change an entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedEntry {
    pub id: String,
    pub food_id: String,
    pub name: String,
    pub grams: f64,
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub logged_at: DateTime<Utc>,
}

impl LoggedEntry {
    pub fn new(
        food_id: impl Into<String>,
        name: impl Into<String>,
        grams: f64,
        kcal: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            food_id: food_id.into(),
            name: name.into(),
            grams,
            kcal,
            protein_g,
            carbs_g,
            fat_g,
            logged_at: Utc::now(),
        }
    }
}
