use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::body::{BodyMetrics, Sex};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(default)]
    pub display: Display,
}

/// Stored body metrics, used as defaults for `estimate`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Option<Sex>,
    pub age_years: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity: Option<f64>,
    pub deficit: Option<f64>,
}

impl Profile {
    /// Body metrics from the profile, with unset fields taken from
    /// [`BodyMetrics::default`].
    pub fn body_metrics(&self) -> BodyMetrics {
        let d = BodyMetrics::default();
        BodyMetrics {
            sex: self.sex.unwrap_or(d.sex),
            age_years: self.age_years.unwrap_or(d.age_years),
            height_cm: self.height_cm.unwrap_or(d.height_cm),
            weight_kg: self.weight_kg.unwrap_or(d.weight_kg),
            activity: self.activity.unwrap_or(d.activity),
            deficit: self.deficit.unwrap_or(d.deficit),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Display {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_bar_width() -> usize {
    20
}

impl Default for Display {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Resolve a food alias to a food id, or return the input unchanged.
    pub fn resolve_alias(&self, input: &str) -> String {
        self.aliases
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    /// Short names for the starter foods.
    pub fn default_aliases() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("apple".into(), "apple_raw".into());
        m.insert("rice".into(), "rice_white_cooked".into());
        m.insert("chicken".into(), "chicken_breast".into());
        m.insert("egg".into(), "egg_whole".into());
        m.insert("milk".into(), "milk_3_25".into());
        m.insert("oats".into(), "oats_dry".into());
        m.insert("oil".into(), "olive_oil".into());
        m.insert("tofu".into(), "tofu_firm".into());
        m
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("CALORIE_TRACKER_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".calorie-tracker")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
