//! Rule-of-thumb weighting estimate for recreational kit.
//!
//! These are the percentages taught in buoyancy clinics, not a physical
//! derivation. They are kept verbatim so the estimate matches what divers
//! already expect from the worksheet version.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::Format;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq, Eq)]
pub enum SuitType {
    None,
    Wetsuit3,
    Wetsuit5,
    Wetsuit7,
    Drysuit,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq, Eq)]
pub enum WaterType {
    Salt,
    Fresh,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq)]
pub struct WeightRange {
    pub min_kg: f32,
    pub max_kg: f32,
}

/// Estimated lead for the given body weight and exposure suit, as a
/// plus-or-minus one kilogram band around the worksheet figure.
pub fn calculate_weighting(
    body_weight_kg: f32,
    suit: SuitType,
    water: WaterType,
) -> Option<WeightRange> {
    if !(body_weight_kg > 0.0) {
        return None;
    }

    // base fraction of body weight per suit, fixed offsets for no suit
    // (a little lead to sink at all) and drysuit undergarment buoyancy
    let mut estimate = match suit {
        SuitType::None => body_weight_kg * 0.01 + 1.0,
        SuitType::Wetsuit3 => body_weight_kg * 0.05,
        SuitType::Wetsuit5 => body_weight_kg * 0.08,
        SuitType::Wetsuit7 => body_weight_kg * 0.10,
        SuitType::Drysuit => body_weight_kg * 0.10 + 4.0,
    };

    if water == WaterType::Fresh {
        estimate -= 2.5;
    }

    Some(WeightRange {
        min_kg: estimate - 1.0,
        max_kg: estimate + 1.0,
    })
}

#[test]
fn test_weighting_seven_mm_salt() {
    // 80 kg diver in a 7 mm suit: 8 kg +/- 1
    let range = calculate_weighting(80.0, SuitType::Wetsuit7, WaterType::Salt).unwrap();
    assert!((range.min_kg - 7.0).abs() < 0.01);
    assert!((range.max_kg - 9.0).abs() < 0.01);
}

#[test]
fn test_weighting_fresh_takes_off_lead() {
    let salt = calculate_weighting(80.0, SuitType::Wetsuit5, WaterType::Salt).unwrap();
    let fresh = calculate_weighting(80.0, SuitType::Wetsuit5, WaterType::Fresh).unwrap();
    assert!((salt.min_kg - fresh.min_kg - 2.5).abs() < 0.01);
}

#[test]
fn test_weighting_drysuit_carries_undergarment_offset() {
    let wet = calculate_weighting(90.0, SuitType::Wetsuit7, WaterType::Salt).unwrap();
    let dry = calculate_weighting(90.0, SuitType::Drysuit, WaterType::Salt).unwrap();
    assert!((dry.min_kg - wet.min_kg - 4.0).abs() < 0.01);
}

#[test]
fn test_weighting_rejects_non_positive_body_weight() {
    assert_eq!(calculate_weighting(0.0, SuitType::Wetsuit5, WaterType::Salt), None);
    assert_eq!(calculate_weighting(-70.0, SuitType::None, WaterType::Fresh), None);
}
