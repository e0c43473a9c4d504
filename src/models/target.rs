use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Kcal,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [Self::Kcal, Self::Protein, Self::Carbs, Self::Fat];

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            _ => "g",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kcal => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fat => "Fat",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kcal => write!(f, "kcal"),
            Self::Protein => write!(f, "protein"),
            Self::Carbs => write!(f, "carbs"),
            Self::Fat => write!(f, "fat"),
        }
    }
}

impl FromStr for Nutrient {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "kcal" | "calories" => Ok(Self::Kcal),
            "protein" | "p" => Ok(Self::Protein),
            "carbs" | "carb" | "c" => Ok(Self::Carbs),
            "fat" | "f" => Ok(Self::Fat),
            _ => anyhow::bail!("invalid nutrient: {} (expected kcal/protein/carbs/fat)", s),
        }
    }
}

/// Daily intake targets. Any number is accepted, including zero and
/// negatives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTarget {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Default for DailyTarget {
    fn default() -> Self {
        Self {
            kcal: 2000.0,
            protein_g: 120.0,
            carbs_g: 220.0,
            fat_g: 60.0,
        }
    }
}

impl DailyTarget {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Kcal => self.kcal,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Kcal => self.kcal = value,
            Nutrient::Protein => self.protein_g = value,
            Nutrient::Carbs => self.carbs_g = value,
            Nutrient::Fat => self.fat_g = value,
        }
    }
}
