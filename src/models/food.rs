use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::scaling::kcal_from_macros;

/// Where a food's energy density comes from.
///
/// Serialized as the optional `kcal_per_100g` field: a number for
/// `Explicit`, absent (or `null`) for `DerivedFromMacros`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EnergySource {
    /// kcal per 100 g as printed on a label or taken from a database.
    Explicit(f64),
    /// No figure stored; computed with the 4/4/9 rule on demand.
    #[default]
    DerivedFromMacros,
}

impl EnergySource {
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::DerivedFromMacros)
    }
}

impl Serialize for EnergySource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Explicit(kcal) => serializer.serialize_some(kcal),
            Self::DerivedFromMacros => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for EnergySource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kcal = Option::<f64>::deserialize(deserializer)?;
        Ok(kcal.map_or(Self::DerivedFromMacros, Self::Explicit))
    }
}

/// Nutrient density of a food, normalized to 100 g.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientProfile {
    pub id: String,
    pub name: String,
    #[serde(
        rename = "kcal_per_100g",
        default,
        skip_serializing_if = "EnergySource::is_derived"
    )]
    pub energy: EnergySource,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
}

impl NutrientProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        energy: EnergySource,
        protein_per_100g: f64,
        carbs_per_100g: f64,
        fat_per_100g: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            energy,
            protein_per_100g,
            carbs_per_100g,
            fat_per_100g,
        }
    }

    /// Energy density in kcal per 100 g, derived from macros when no
    /// explicit figure is stored.
    pub fn kcal_per_100g(&self) -> f64 {
        match self.energy {
            EnergySource::Explicit(kcal) => kcal,
            EnergySource::DerivedFromMacros => kcal_from_macros(
                self.protein_per_100g,
                self.carbs_per_100g,
                self.fat_per_100g,
            ),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_ID_PREFIX)
    }
}

/// Id prefix of foods entered by the user.
pub const CUSTOM_ID_PREFIX: &str = "user_";

fn seed(id: &str, name: &str, kcal: f64, protein: f64, carbs: f64, fat: f64) -> NutrientProfile {
    NutrientProfile::new(id, name, EnergySource::Explicit(kcal), protein, carbs, fat)
}

/// The food list a fresh installation starts with.
pub fn starter_foods() -> Vec<NutrientProfile> {
    vec![
        seed("apple_raw", "Apple (raw, without skin)", 52.0, 0.3, 14.0, 0.2),
        seed("rice_white_cooked", "White rice (cooked)", 130.0, 2.4, 28.2, 0.3),
        seed("chicken_breast", "Chicken breast (cooked, skinless)", 165.0, 31.0, 0.0, 3.6),
        seed("egg_whole", "Egg (whole, cooked)", 155.0, 13.0, 1.1, 11.0),
        seed("salmon", "Salmon (cooked)", 208.0, 20.0, 0.0, 13.0),
        seed("banana", "Banana", 89.0, 1.1, 23.0, 0.3),
        seed("milk_3_25", "Cow's milk 3.25% fat", 60.0, 3.2, 4.7, 3.3),
        seed("oats_dry", "Oats (dry)", 389.0, 16.9, 66.3, 6.9),
        seed("olive_oil", "Olive oil", 884.0, 0.0, 0.0, 100.0),
        seed("tofu_firm", "Tofu (firm)", 144.0, 17.3, 3.3, 8.7),
    ]
}
