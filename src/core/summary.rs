use serde::Serialize;

use crate::core::tracker::{EntryLog, Totals};
use crate::models::target::{DailyTarget, Nutrient};

#[derive(Debug, Clone, Serialize)]
pub struct NutrientProgress {
    pub nutrient: Nutrient,
    pub consumed: f64,
    pub target: f64,
    /// Capped at 1.0.
    pub fraction: f64,
    /// Negative once over target.
    pub remaining: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub entry_count: usize,
    pub totals: Totals,
    pub target: DailyTarget,
    pub progress: Vec<NutrientProgress>,
}

impl DailySummary {
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<&NutrientProgress> {
        self.progress.iter().find(|p| p.nutrient == nutrient)
    }
}

/// Totals of `log` against `target`, one progress row per nutrient.
pub fn compute(log: &EntryLog, target: &DailyTarget) -> DailySummary {
    let totals = log.totals();
    let progress = Nutrient::ALL
        .iter()
        .map(|&n| {
            let consumed = totals.get(n);
            let goal = target.get(n);
            NutrientProgress {
                nutrient: n,
                consumed,
                target: goal,
                fraction: totals.progress(n, target),
                remaining: goal - consumed,
            }
        })
        .collect();

    DailySummary {
        entry_count: log.len(),
        totals,
        target: *target,
        progress,
    }
}
