use uuid::Uuid;

use crate::core::scaling::{kcal_from_macros, round1};
use crate::models::food::{CUSTOM_ID_PREFIX, EnergySource, NutrientProfile};

/// Foods whose name contains `query`, ignoring case and surrounding
/// whitespace. A blank query matches everything.
pub fn search<'a>(foods: &'a [NutrientProfile], query: &str) -> Vec<&'a NutrientProfile> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return foods.iter().collect();
    }
    foods
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&q))
        .collect()
}

/// Define a food from per-100g macros. Energy is always computed with the
/// 4/4/9 rule; a label calorie figure is never taken for user foods.
///
/// Returns `None` when the name is blank or a macro is not finite.
pub fn custom_food(name: &str, protein: f64, carbs: f64, fat: f64) -> Option<NutrientProfile> {
    let name = name.trim();
    if name.is_empty() || ![protein, carbs, fat].iter().all(|v| v.is_finite()) {
        return None;
    }
    let id = format!("{}{}", CUSTOM_ID_PREFIX, Uuid::new_v4().simple());
    let kcal = round1(kcal_from_macros(protein, carbs, fat));
    Some(NutrientProfile::new(
        id,
        name,
        EnergySource::Explicit(kcal),
        protein,
        carbs,
        fat,
    ))
}
