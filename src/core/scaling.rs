//! Per-100g scaling and macro-to-energy conversion.
//!
//! Everything here is pure. Non-finite input is not rejected; it simply
//! propagates to the output.

use crate::models::entry::LoggedEntry;
use crate::models::food::NutrientProfile;

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of alcohol.
pub const KCAL_PER_G_ALCOHOL: f64 = 7.0;

/// Absolute amount in `grams` of a food carrying `value_per_100g`.
pub fn scale(value_per_100g: f64, grams: f64) -> f64 {
    value_per_100g * grams / 100.0
}

/// Energy of a macro composition by the Atwater 4/4/9 rule.
pub fn kcal_from_macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    kcal_from_macros_with_alcohol(protein_g, carbs_g, fat_g, 0.0)
}

/// [`kcal_from_macros`] plus 7 kcal per gram of alcohol.
pub fn kcal_from_macros_with_alcohol(
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    alcohol_g: f64,
) -> f64 {
    protein_g * KCAL_PER_G_PROTEIN
        + carbs_g * KCAL_PER_G_CARBS
        + fat_g * KCAL_PER_G_FAT
        + alcohol_g * KCAL_PER_G_ALCOHOL
}

/// Round to one decimal place, halves away from zero.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to a whole number, halves away from zero.
pub fn round0(v: f64) -> f64 {
    v.round()
}

/// Scale a food to `grams` and freeze the result into a new entry.
///
/// All figures, grams included, are rounded to one decimal place here;
/// totals are later summed from these rounded values.
pub fn build_logged_entry(profile: &NutrientProfile, grams: f64) -> LoggedEntry {
    LoggedEntry::new(
        profile.id.clone(),
        profile.name.clone(),
        round1(grams),
        round1(scale(profile.kcal_per_100g(), grams)),
        round1(scale(profile.protein_per_100g, grams)),
        round1(scale(profile.carbs_per_100g, grams)),
        round1(scale(profile.fat_per_100g, grams)),
    )
}
