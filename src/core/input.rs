//! Lenient number parsing for user-typed values.

use regex::Regex;

use crate::models::body::{ActivityLevel, BodyMetrics, Sex};

/// Parse the leading number of `raw`, accepting a comma as decimal point.
///
/// `"12,5"` and `"12.5 g"` both give 12.5; `"abc"`, `""` and values out of
/// f64 range such as `"1e999"` give `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    let re = Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").ok()?;
    let m = re.find(&normalized)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`parse_number`], with 0 substituted on failure.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Activity is given either as a level name or as a multiplier.
fn parse_activity(raw: &str) -> f64 {
    match raw.trim().parse::<ActivityLevel>() {
        Ok(level) => level.multiplier(),
        Err(_) => parse_number(raw).unwrap_or(f64::NAN),
    }
}

/// Build body metrics from raw form values.
///
/// Unparsable age, height, weight or activity become NaN so that the
/// estimate is withheld; an unparsable deficit counts as no deficit.
pub fn body_metrics_from_input(
    sex: Sex,
    age: &str,
    height: &str,
    weight: &str,
    activity: &str,
    deficit: &str,
) -> BodyMetrics {
    BodyMetrics {
        sex,
        age_years: parse_number(age).unwrap_or(f64::NAN),
        height_cm: parse_number(height).unwrap_or(f64::NAN),
        weight_kg: parse_number(weight).unwrap_or(f64::NAN),
        activity: parse_activity(activity),
        deficit: parse_or_zero(deficit),
    }
}
