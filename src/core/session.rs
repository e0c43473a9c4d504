use anyhow::Result;
use tracing::debug;

use crate::core::energy::EnergyEstimate;
use crate::core::foods;
use crate::core::scaling::{build_logged_entry, round0};
use crate::core::store::{ENTRIES_KEY, FOODS_KEY, KeyValueStorage, Store, TARGET_KEY};
use crate::core::summary::{self, DailySummary};
use crate::core::tracker::{EntryLog, Totals};
use crate::models::entry::LoggedEntry;
use crate::models::food::{NutrientProfile, starter_foods};
use crate::models::target::{DailyTarget, Nutrient};

/// The three persisted records and the user actions over them.
#[derive(Debug)]
pub struct Session<'a> {
    foods: Store<'a, Vec<NutrientProfile>>,
    entries: Store<'a, EntryLog>,
    target: Store<'a, DailyTarget>,
}

impl<'a> Session<'a> {
    /// Load all records, seeding the starter foods, an empty log and the
    /// default target where nothing usable is stored.
    pub fn open(storage: &'a dyn KeyValueStorage) -> Self {
        Self {
            foods: Store::load(storage, FOODS_KEY, starter_foods),
            entries: Store::load(storage, ENTRIES_KEY, EntryLog::new),
            target: Store::load(storage, TARGET_KEY, DailyTarget::default),
        }
    }

    pub fn foods(&self) -> &[NutrientProfile] {
        self.foods.get()
    }

    pub fn entries(&self) -> &EntryLog {
        self.entries.get()
    }

    pub fn target(&self) -> &DailyTarget {
        self.target.get()
    }

    pub fn on_foods_change(&mut self, f: impl Fn(&Vec<NutrientProfile>) + 'a) {
        self.foods.subscribe(f);
    }

    pub fn on_entries_change(&mut self, f: impl Fn(&EntryLog) + 'a) {
        self.entries.subscribe(f);
    }

    pub fn on_target_change(&mut self, f: impl Fn(&DailyTarget) + 'a) {
        self.target.subscribe(f);
    }

    pub fn search_foods(&self, query: &str) -> Vec<&NutrientProfile> {
        foods::search(self.foods.get(), query)
    }

    pub fn find_food(&self, id: &str) -> Option<&NutrientProfile> {
        self.foods.get().iter().find(|f| f.id == id)
    }

    /// Add a user food at the head of the list. Blank names and non-finite
    /// macros are ignored.
    pub fn add_custom_food(
        &mut self,
        name: &str,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Option<NutrientProfile> {
        let food = foods::custom_food(name, protein, carbs, fat)?;
        debug!(id = %food.id, name = %food.name, "adding custom food");
        self.foods.update(|list| list.insert(0, food.clone()));
        Some(food)
    }

    /// Log `grams` of the food with `food_id`. Non-finite amounts are
    /// rejected since they cannot be stored.
    pub fn log_food(&mut self, food_id: &str, grams: f64) -> Result<LoggedEntry> {
        anyhow::ensure!(grams.is_finite(), "grams must be a finite number");
        let food = self
            .find_food(food_id)
            .ok_or_else(|| anyhow::anyhow!("unknown food: {}", food_id))?;
        let entry = build_logged_entry(food, grams);
        debug!(id = %entry.id, food_id, grams, kcal = entry.kcal, "logging entry");
        self.entries.update(|log| log.add(entry.clone()));
        Ok(entry)
    }

    /// Remove an entry. An unknown id changes nothing and returns false.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        if self.entries.get().get(id).is_none() {
            return false;
        }
        self.entries.update(|log| log.remove(id))
    }

    pub fn clear_entries(&mut self) {
        debug!(count = self.entries.get().len(), "clearing entry log");
        self.entries.update(EntryLog::clear);
    }

    pub fn totals(&self) -> Totals {
        self.entries.get().totals()
    }

    pub fn progress(&self, nutrient: Nutrient) -> f64 {
        self.totals().progress(nutrient, self.target.get())
    }

    pub fn summary(&self) -> DailySummary {
        summary::compute(self.entries.get(), self.target.get())
    }

    /// Non-finite values are ignored.
    pub fn set_target(&mut self, nutrient: Nutrient, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.target.update(|t| t.set(nutrient, value));
    }

    pub fn set_targets(&mut self, target: DailyTarget) {
        self.target.set(target);
    }

    /// Use the rounded goal of an estimate as the calorie target. Macro
    /// targets are left alone. Returns the new kcal target.
    pub fn apply_energy_goal(&mut self, estimate: &EnergyEstimate) -> f64 {
        let kcal = round0(estimate.goal);
        self.set_target(Nutrient::Kcal, kcal);
        kcal
    }
}
