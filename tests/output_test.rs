mod common;

use calorie_tracker::core::energy::EnergyEstimate;
use calorie_tracker::core::scaling::build_logged_entry;
use calorie_tracker::core::summary;
use calorie_tracker::core::tracker::EntryLog;
use calorie_tracker::models::target::DailyTarget;
use calorie_tracker::output::{self, human};
use common::{apple, chicken_derived};
use serde_json::json;

#[test]
fn test_success_envelope() {
    let v = output::success("log", json!({ "x": 1 }));
    assert_eq!(v["status"], "ok");
    assert_eq!(v["command"], "log");
    assert_eq!(v["data"]["x"], 1);
    assert!(v["error"].is_null());
}

#[test]
fn test_error_envelope() {
    let v = output::error("log", "general_error", "unknown food: x");
    assert_eq!(v["status"], "error");
    assert!(v["data"].is_null());
    assert_eq!(v["error"]["code"], "general_error");
    assert_eq!(v["error"]["message"], "unknown food: x");
}

#[test]
fn test_format_entry() {
    let e = build_logged_entry(&apple(), 150.0);
    let line = human::format_entry(&e);
    assert!(line.contains("Apple (raw, without skin) (150 g) = 78 kcal"));
    assert!(line.contains("P 0.5g C 21g F 0.3g"));
    assert!(line.contains(&e.id));
}

#[test]
fn test_format_food_marks_derived_energy() {
    assert!(human::format_food(&apple()).contains(": 52 kcal / 100g"));
    assert!(human::format_food(&chicken_derived()).contains("~156.4 kcal"));
}

#[test]
fn test_foods_table_lists_every_food() {
    let a = apple();
    let c = chicken_derived();
    let table = human::foods_table(&[&a, &c]);
    assert!(table.contains("apple_raw"));
    assert!(table.contains("chicken_breast"));
    assert!(table.contains("156.4"));
}

#[test]
fn test_progress_bar_width() {
    colored::control::set_override(false);
    assert_eq!(human::progress_bar(0.5, 10), "[#####-----]");
    assert_eq!(human::progress_bar(1.0, 4), "[####]");
    assert_eq!(human::progress_bar(0.0, 4), "[----]");
    assert_eq!(human::progress_bar(f64::NAN, 4), "[----]");
}

#[test]
fn test_format_summary() {
    colored::control::set_override(false);
    let mut log = EntryLog::new();
    log.add(build_logged_entry(&apple(), 150.0));
    let s = summary::compute(&log, &DailyTarget::default());
    let text = human::format_summary(&s, 10);
    assert!(text.contains("Total: 78 kcal | 0.5P / 21C / 0.3F"));
    assert!(text.contains("78 / 2000 kcal (4%)"));
    assert!(text.contains("Fat"));
}

#[test]
fn test_format_estimate_rounds_to_whole_kcal() {
    let e = EnergyEstimate {
        bmr: 1627.5,
        tdee: 2522.625,
        goal: 2144.23125,
    };
    let text = human::format_estimate(&e);
    assert!(text.contains("BMR: 1628 kcal"));
    assert!(text.contains("TDEE: 2523 kcal"));
    assert!(text.contains("2144 kcal/day"));
}

#[test]
fn test_format_target() {
    let text = human::format_target(&DailyTarget::default());
    assert_eq!(
        text,
        "Calories: 2000 kcal | Protein: 120 g | Carbs: 220 g | Fat: 60 g"
    );
}
