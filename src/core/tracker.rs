use serde::{Deserialize, Serialize};

use crate::models::entry::LoggedEntry;
use crate::models::target::{DailyTarget, Nutrient};

/// Logged entries, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<LoggedEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head.
    pub fn add(&mut self, entry: LoggedEntry) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry with `id`. Returns false when there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LoggedEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&LoggedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn totals(&self) -> Totals {
        self.entries.iter().fold(Totals::default(), |mut acc, e| {
            acc.kcal += e.kcal;
            acc.protein_g += e.protein_g;
            acc.carbs_g += e.carbs_g;
            acc.fat_g += e.fat_g;
            acc.grams += e.grams;
            acc
        })
    }
}

impl From<Vec<LoggedEntry>> for EntryLog {
    fn from(entries: Vec<LoggedEntry>) -> Self {
        Self { entries }
    }
}

/// Sums over an [`EntryLog`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub grams: f64,
}

impl Totals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Kcal => self.kcal,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
        }
    }

    pub fn progress(&self, nutrient: Nutrient, target: &DailyTarget) -> f64 {
        progress(self.get(nutrient), target.get(nutrient))
    }
}

/// Fraction of `target` reached by `total`, capped at 1.0.
///
/// A zero target divides by 1 instead, so the raw total is shown capped.
pub fn progress(total: f64, target: f64) -> f64 {
    let divisor = if target == 0.0 || target.is_nan() {
        1.0
    } else {
        target
    };
    (total / divisor).min(1.0)
}
