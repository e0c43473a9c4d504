use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::energy::EnergyEstimate;
use crate::core::scaling::{round0, round1};
use crate::core::summary::{DailySummary, NutrientProgress};
use crate::models::entry::LoggedEntry;
use crate::models::food::{EnergySource, NutrientProfile};
use crate::models::target::{DailyTarget, Nutrient};

/// One line per logged entry.
pub fn format_entry(e: &LoggedEntry) -> String {
    let ts = e.logged_at.format("%Y-%m-%d %H:%M");
    format!(
        "{} | {} ({} g) = {} kcal | P {}g C {}g F {}g  [{}]",
        ts, e.name, e.grams, e.kcal, e.protein_g, e.carbs_g, e.fat_g, e.id
    )
}

pub fn format_food(f: &NutrientProfile) -> String {
    let kcal = match f.energy {
        EnergySource::Explicit(k) => format!("{}", k),
        EnergySource::DerivedFromMacros => format!("~{}", round1(f.kcal_per_100g())),
    };
    format!(
        "{} ({}): {} kcal / 100g | P {}g C {}g F {}g",
        f.name, f.id, kcal, f.protein_per_100g, f.carbs_per_100g, f.fat_per_100g
    )
}

/// Food list as a table.
pub fn foods_table(foods: &[&NutrientProfile]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["id", "name", "kcal/100g", "P", "C", "F"]);
    for f in foods {
        table.add_row(vec![
            f.id.clone(),
            f.name.clone(),
            format!("{}", round1(f.kcal_per_100g())),
            format!("{}", f.protein_per_100g),
            format!("{}", f.carbs_per_100g),
            format!("{}", f.fat_per_100g),
        ]);
    }
    table.to_string()
}

pub fn format_target(t: &DailyTarget) -> String {
    Nutrient::ALL
        .iter()
        .map(|&n| format!("{}: {} {}", n.label(), t.get(n), n.unit()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Horizontal bar filled to `fraction` of `width`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled).as_str().green(),
        "-".repeat(width - filled)
    )
}

fn format_progress_line(p: &NutrientProgress, bar_width: usize) -> String {
    let over = p.remaining < 0.0 && p.target > 0.0;
    let state = if over { " over".red().to_string() } else { String::new() };
    format!(
        "{:<9}{} {} / {} {} ({}%){}",
        p.nutrient.label(),
        progress_bar(p.fraction, bar_width),
        round0(p.consumed),
        round0(p.target),
        p.nutrient.unit(),
        round0(p.fraction * 100.0),
        state
    )
}

/// Totals and one progress bar per nutrient.
pub fn format_summary(s: &DailySummary, bar_width: usize) -> String {
    let mut out = format!(
        "=== Today: {} entries ===\nTotal: {} kcal | {}P / {}C / {}F ({} g eaten)\n",
        s.entry_count,
        round0(s.totals.kcal),
        round1(s.totals.protein_g),
        round1(s.totals.carbs_g),
        round1(s.totals.fat_g),
        round1(s.totals.grams)
    );
    for p in &s.progress {
        out.push('\n');
        out.push_str(&format_progress_line(p, bar_width));
    }
    out
}

pub fn format_estimate(e: &EnergyEstimate) -> String {
    format!(
        "BMR: {} kcal\nTDEE: {} kcal\nGoal (with deficit): {} kcal/day",
        round0(e.bmr),
        round0(e.tdee),
        round0(e.goal)
    )
}
