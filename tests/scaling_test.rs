mod common;

use calorie_tracker::core::scaling::{
    build_logged_entry, kcal_from_macros, kcal_from_macros_with_alcohol, round0, round1, scale,
};
use common::{apple, assert_close, chicken_derived};

// ── scale ───────────────────────────────────────────────────────────────────

#[test]
fn test_scale_is_linear_in_grams() {
    for &(v, g) in &[(52.0, 150.0), (0.3, 150.0), (884.0, 12.5), (0.0, 300.0), (13.0, 0.0)] {
        assert_close(scale(v, g), v * g / 100.0);
    }
}

#[test]
fn test_scale_100g_is_identity() {
    assert_close(scale(165.0, 100.0), 165.0);
}

#[test]
fn test_scale_allows_negative_correction() {
    assert_close(scale(130.0, -50.0), -65.0);
}

#[test]
fn test_scale_propagates_nan() {
    assert!(scale(52.0, f64::NAN).is_nan());
}

// ── kcal_from_macros ────────────────────────────────────────────────────────

#[test]
fn test_kcal_from_macros_chicken_breast() {
    assert_close(kcal_from_macros(31.0, 0.0, 3.6), 156.4);
}

#[test]
fn test_kcal_from_macros_uses_4_4_9() {
    assert_close(kcal_from_macros(1.0, 0.0, 0.0), 4.0);
    assert_close(kcal_from_macros(0.0, 1.0, 0.0), 4.0);
    assert_close(kcal_from_macros(0.0, 0.0, 1.0), 9.0);
}

#[test]
fn test_kcal_from_macros_alcohol_term() {
    assert_close(kcal_from_macros_with_alcohol(0.0, 0.0, 0.0, 10.0), 70.0);
    assert_close(
        kcal_from_macros_with_alcohol(2.0, 3.0, 1.0, 0.0),
        kcal_from_macros(2.0, 3.0, 1.0),
    );
}

// ── rounding ────────────────────────────────────────────────────────────────

#[test]
fn test_round1_half_away_from_zero() {
    assert_eq!(round1(0.45), 0.5);
    assert_eq!(round1(2.25), 2.3);
    assert_eq!(round1(-2.25), -2.3);
    assert_eq!(round1(1.04), 1.0);
}

#[test]
fn test_round0() {
    assert_eq!(round0(2144.5), 2145.0);
    assert_eq!(round0(2144.23125), 2144.0);
}

// ── build_logged_entry ──────────────────────────────────────────────────────

#[test]
fn test_build_logged_entry_apple_150g() {
    let e = build_logged_entry(&apple(), 150.0);
    assert_close(e.kcal, 78.0);
    assert_close(e.protein_g, 0.5);
    assert_close(e.carbs_g, 21.0);
    assert_close(e.fat_g, 0.3);
    assert_close(e.grams, 150.0);
    assert_eq!(e.food_id, "apple_raw");
    assert_eq!(e.name, "Apple (raw, without skin)");
}

#[test]
fn test_build_logged_entry_derives_kcal_when_absent() {
    let e = build_logged_entry(&chicken_derived(), 200.0);
    // 156.4 kcal/100g derived from macros
    assert_close(e.kcal, 312.8);
    assert_close(e.protein_g, 62.0);
    assert_close(e.fat_g, 7.2);
}

#[test]
fn test_build_logged_entry_rounds_grams() {
    let e = build_logged_entry(&apple(), 33.33);
    assert_close(e.grams, 33.3);
}

#[test]
fn test_build_logged_entry_fresh_ids() {
    let a = build_logged_entry(&apple(), 100.0);
    let b = build_logged_entry(&apple(), 100.0);
    assert_ne!(a.id, b.id);
    assert!(b.logged_at >= a.logged_at);
}

#[test]
fn test_entry_is_snapshot_of_profile() {
    let mut food = apple();
    let e = build_logged_entry(&food, 100.0);
    food.name = "Green apple".into();
    food.protein_per_100g = 10.0;
    assert_eq!(e.name, "Apple (raw, without skin)");
    assert_close(e.protein_g, 0.3);
}
