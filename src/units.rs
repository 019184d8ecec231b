//! Linear unit conversions between metric and imperial.

pub const FEET_PER_METER: f32 = 3.28084;
pub const PSI_PER_BAR: f32 = 14.5038;
pub const LBS_PER_KG: f32 = 2.20462;

pub fn meters_to_feet(meters: f32) -> f32 {
    meters * FEET_PER_METER
}

pub fn feet_to_meters(feet: f32) -> f32 {
    feet / FEET_PER_METER
}

pub fn bar_to_psi(bar: f32) -> f32 {
    bar * PSI_PER_BAR
}

pub fn psi_to_bar(psi: f32) -> f32 {
    psi / PSI_PER_BAR
}

pub fn kg_to_lbs(kg: f32) -> f32 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f32) -> f32 {
    lbs / LBS_PER_KG
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[test]
fn test_known_conversions() {
    assert!((meters_to_feet(10.0) - 32.8084).abs() < 1e-3);
    assert!((bar_to_psi(1.0) - 14.5038).abs() < 1e-3);
    assert!((kg_to_lbs(1.0) - 2.20462).abs() < 1e-4);
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
}

#[test]
fn test_round_trips() {
    for x in [0.0f32, 0.5, 1.0, 18.0, 42.0, 300.0] {
        assert!((feet_to_meters(meters_to_feet(x)) - x).abs() < 1e-3);
        assert!((psi_to_bar(bar_to_psi(x)) - x).abs() < 1e-3);
        assert!((lbs_to_kg(kg_to_lbs(x)) - x).abs() < 1e-3);
        assert!((fahrenheit_to_celsius(celsius_to_fahrenheit(x)) - x).abs() < 1e-3);
    }
}
