//! Nitrox mix arithmetic: oxygen exposure limits, equivalent air depth,
//! best mix selection, and partial-pressure top-up blending.
//!
//! Oxygen content is handled on the 0-100 percent scale throughout, the way
//! it is printed on an analyzed tank.

use libm::floorf;

use crate::{ambient_pressure_ata, FN2_AIR};

// mod = ((po2 / fo2) - 1) * 10
// the depth where the mix reaches the chosen oxygen partial pressure ceiling
pub fn calculate_mod(o2_percent: f32, po2_bar: f32) -> Option<f32> {
    if !(o2_percent > 0.0 && po2_bar > 0.0) {
        return None;
    }
    let fo2 = o2_percent / 100.0;
    Some((po2_bar / fo2 - 1.0) * 10.0)
}

// ead = (fn2 / 0.79 * ata - 1) * 10
// depth on air with the same nitrogen partial pressure as the mix at depth
pub fn calculate_ead(depth_m: f32, o2_percent: f32) -> Option<f32> {
    if !(depth_m >= 0.0) {
        return None;
    }
    if !(21.0..=100.0).contains(&o2_percent) {
        return None;
    }
    let fn2 = 1.0 - o2_percent / 100.0;
    let ead = (fn2 / FN2_AIR * ambient_pressure_ata(depth_m) - 1.0) * 10.0;
    Some(ead.max(0.0))
}

/// Richest mix usable at the target depth without exceeding the PPO2 limit,
/// floored to a whole percent the way a blender fills.
pub fn calculate_best_mix(depth_m: f32, po2_bar: f32) -> Option<f32> {
    if !(depth_m >= 0.0 && po2_bar > 0.0) {
        return None;
    }
    let best = po2_bar / ambient_pressure_ata(depth_m) * 100.0;
    Some(floorf(best).min(100.0))
}

pub fn calculate_ppo2(depth_m: f32, o2_percent: f32) -> Option<f32> {
    if !(depth_m >= 0.0) {
        return None;
    }
    if !(21.0..=100.0).contains(&o2_percent) {
        return None;
    }
    Some(ambient_pressure_ata(depth_m) * o2_percent / 100.0)
}

/// Final oxygen percentage after topping up a partially filled tank with a
/// richer (or leaner) fill gas. Weighted average of the two gas fractions by
/// the partial pressure each contributes.
pub fn calculate_nitrox_blend(
    initial_pressure_bar: f32,
    initial_o2_percent: f32,
    final_pressure_bar: f32,
    top_up_o2_percent: f32,
) -> Option<f32> {
    if !(initial_pressure_bar >= 0.0
        && initial_o2_percent >= 0.0
        && final_pressure_bar >= 0.0
        && top_up_o2_percent >= 0.0)
    {
        return None;
    }
    if !(final_pressure_bar > initial_pressure_bar) {
        return None;
    }
    let top_up_pressure = final_pressure_bar - initial_pressure_bar;
    let blended = (initial_pressure_bar * initial_o2_percent + top_up_pressure * top_up_o2_percent)
        / final_pressure_bar;
    Some(blended)
}

#[test]
fn test_mod_known_value() {
    // EAN32 at PPO2 1.4 bar
    let result = calculate_mod(32.0, 1.4).unwrap();
    assert!((result - 33.75).abs() < 0.01);
}

#[test]
fn test_mod_invalid_inputs() {
    assert_eq!(calculate_mod(0.0, 1.4), None);
    assert_eq!(calculate_mod(32.0, 0.0), None);
    assert_eq!(calculate_mod(-32.0, 1.4), None);
}

#[test]
fn test_ead_shallower_than_actual_for_nitrox() {
    let ead = calculate_ead(30.0, 32.0).unwrap();
    assert!(ead < 30.0);
    assert!((ead - 24.43).abs() < 0.01);
}

#[test]
fn test_ead_on_air_matches_depth() {
    let ead = calculate_ead(30.0, 21.0).unwrap();
    assert!((ead - 30.0).abs() < 0.01);
}

#[test]
fn test_ead_floors_at_surface() {
    assert_eq!(calculate_ead(0.0, 100.0), Some(0.0));
}

#[test]
fn test_ead_rejects_out_of_range_mix() {
    assert_eq!(calculate_ead(30.0, 20.9), None);
    assert_eq!(calculate_ead(30.0, 100.1), None);
    assert_eq!(calculate_ead(-1.0, 32.0), None);
}

#[test]
fn test_best_mix_whole_percent() {
    // 1.4 bar at 33 m: 1.4 / 4.3 = 32.55% -> 32%
    assert_eq!(calculate_best_mix(33.0, 1.4), Some(32.0));
}

#[test]
fn test_best_mix_caps_at_pure_oxygen() {
    assert_eq!(calculate_best_mix(0.0, 1.4), Some(100.0));
}

#[test]
fn test_ppo2_at_depth() {
    let ppo2 = calculate_ppo2(33.75, 32.0).unwrap();
    assert!((ppo2 - 1.4).abs() < 0.01);
}

#[test]
fn test_mod_and_ead_fall_with_richer_mix() {
    let mut last_mod = f32::INFINITY;
    let mut last_ead = f32::INFINITY;
    for o2 in [21.0f32, 25.0, 28.0, 32.0, 36.0, 40.0] {
        let m = calculate_mod(o2, 1.4).unwrap();
        let e = calculate_ead(30.0, o2).unwrap();
        assert!(m < last_mod, "MOD should fall as the mix gets richer");
        assert!(e < last_ead, "EAD should fall as the mix gets richer");
        last_mod = m;
        last_ead = e;
    }
}

#[test]
fn test_nitrox_blend_air_topped_with_oxygen() {
    // 100 bar of air topped to 200 bar with pure oxygen
    let result = calculate_nitrox_blend(100.0, 21.0, 200.0, 100.0).unwrap();
    assert!((result - 60.5).abs() < 0.01);
}

#[test]
fn test_nitrox_blend_from_empty_is_top_up_gas() {
    let result = calculate_nitrox_blend(0.0, 0.0, 200.0, 32.0).unwrap();
    assert!((result - 32.0).abs() < 0.01);
}

#[test]
fn test_nitrox_blend_requires_pressure_increase() {
    assert_eq!(calculate_nitrox_blend(200.0, 21.0, 200.0, 100.0), None);
    assert_eq!(calculate_nitrox_blend(200.0, 21.0, 150.0, 100.0), None);
    assert_eq!(calculate_nitrox_blend(-10.0, 21.0, 200.0, 100.0), None);
}
