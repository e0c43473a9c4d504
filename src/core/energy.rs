use serde::Serialize;

use crate::models::body::{BodyMetrics, Sex};

/// Mifflin-St Jeor offsets.
const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Unrounded energy figures in kcal/day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
    pub goal: f64,
}

/// Basal metabolic rate by the Mifflin-St Jeor equation.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let offset = match sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + offset
}

/// Estimate BMR, TDEE and the deficit-adjusted goal.
///
/// Returns `None` unless age, height, weight and activity are all finite.
pub fn estimate(m: &BodyMetrics) -> Option<EnergyEstimate> {
    let inputs = [m.age_years, m.height_cm, m.weight_kg, m.activity];
    if !inputs.iter().all(|v| v.is_finite()) {
        return None;
    }
    let bmr = bmr(m.sex, m.weight_kg, m.height_cm, m.age_years);
    let tdee = bmr * m.activity;
    let goal = tdee * (1.0 - m.deficit);
    Some(EnergyEstimate { bmr, tdee, goal })
}
