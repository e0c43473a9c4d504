use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => anyhow::bail!("invalid sex: {} (expected male/female)", s),
        }
    }
}

/// Activity multipliers applied to BMR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// The level whose multiplier equals `value`, if any.
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| (l.multiplier() - value).abs() < 1e-9)
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => other
                .parse::<f64>()
                .ok()
                .and_then(Self::from_multiplier)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "invalid activity level: {} (expected sedentary/light/moderate/active/very_active or 1.2/1.375/1.55/1.725/1.9)",
                        s
                    )
                }),
        }
    }
}

/// Inputs to the energy estimate. Numeric fields may be NaN when the
/// user typed something unparsable; the estimator reports no result then.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyMetrics {
    pub sex: Sex,
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Raw multiplier, normally one of [`ActivityLevel::multiplier`].
    pub activity: f64,
    /// Fraction of TDEE to cut, e.g. 0.15 for 15%.
    pub deficit: f64,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age_years: 28.0,
            height_cm: 170.0,
            weight_kg: 70.0,
            activity: ActivityLevel::Moderate.multiplier(),
            deficit: 0.15,
        }
    }
}
