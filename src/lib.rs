#![no_std]

use defmt::{Format, Formatter};

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod gas;
pub mod mix;
pub mod ndl;
pub mod plan;
pub mod rdp;
pub mod repetitive;
pub mod surface;
pub mod units;
pub mod weighting;

/// Nitrogen fraction of air, used by the equivalent-air-depth conversion.
pub const FN2_AIR: f32 = 0.79;

/// Density of salt water relative to fresh. Depth gauges are calibrated for
/// salt water, so a gauge reading taken in fresh water overstates the depth
/// by this ratio.
pub const FRESHWATER_DENSITY_RATIO: f32 = 1.03;

/// Pressure group letter from the recreational planner tables, A (least
/// residual nitrogen) through Z (most). Ordered so that a later letter means
/// a heavier nitrogen load.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum PressureGroup {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
}

#[rustfmt::skip]
const GROUPS: [PressureGroup; 26] = [
    PressureGroup::A, PressureGroup::B, PressureGroup::C, PressureGroup::D,
    PressureGroup::E, PressureGroup::F, PressureGroup::G, PressureGroup::H,
    PressureGroup::I, PressureGroup::J, PressureGroup::K, PressureGroup::L,
    PressureGroup::M, PressureGroup::N, PressureGroup::O, PressureGroup::P,
    PressureGroup::Q, PressureGroup::R, PressureGroup::S, PressureGroup::T,
    PressureGroup::U, PressureGroup::V, PressureGroup::W, PressureGroup::X,
    PressureGroup::Y, PressureGroup::Z,
];

impl PressureGroup {
    pub fn from_letter(letter: char) -> Option<Self> {
        let index = (letter as u32).checked_sub('A' as u32)?;
        Self::from_index(index as u8)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        GROUPS.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl Format for PressureGroup {
    fn format(&self, f: Formatter) {
        defmt::write!(f, "{}", self.letter());
    }
}

impl core::fmt::Display for PressureGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Format, PartialEq, Eq)]
pub enum PlanError {
    TooDeep,
    ExceedsNoDecoLimit,
    RepetitiveNotPermitted,
}

/// Ambient pressure at depth in atmospheres absolute: 1 ATA of air column
/// plus 1 ATA per 10 m of sea water.
pub fn ambient_pressure_ata(depth: f32) -> f32 {
    depth / 10.0 + 1.0
}

/// Gauge depth corrected for fresh water. Gauges assume salt water density,
/// so the true fresh-water depth is shallower than the reading.
pub fn correct_depth_for_freshwater(gauge_reading_m: f32) -> f32 {
    gauge_reading_m / FRESHWATER_DENSITY_RATIO
}

// p1 * v1 = p2 * v2
// v2 = v1 * (p1 / p2)
// pressures in ATA, volumes in litres
pub fn calculate_boyle_volume(
    initial_volume: f32,
    initial_depth: f32,
    final_depth: f32,
) -> Option<f32> {
    if !(initial_volume >= 0.0 && initial_depth >= 0.0 && final_depth >= 0.0) {
        return None;
    }
    let p1 = ambient_pressure_ata(initial_depth);
    let p2 = ambient_pressure_ata(final_depth);
    Some(initial_volume * (p1 / p2))
}

#[test]
fn test_ambient_pressure() {
    assert_eq!(ambient_pressure_ata(0.0), 1.0);
    assert_eq!(ambient_pressure_ata(10.0), 2.0);
    assert_eq!(ambient_pressure_ata(30.0), 4.0);
}

#[test]
fn test_boyle_halves_volume_over_first_ten_meters() {
    assert_eq!(calculate_boyle_volume(10.0, 0.0, 10.0), Some(5.0));
}

#[test]
fn test_boyle_no_depth_change_keeps_volume() {
    assert_eq!(calculate_boyle_volume(12.0, 18.0, 18.0), Some(12.0));
}

#[test]
fn test_boyle_rejects_negative_inputs() {
    assert_eq!(calculate_boyle_volume(-1.0, 0.0, 10.0), None);
    assert_eq!(calculate_boyle_volume(10.0, -0.1, 10.0), None);
    assert_eq!(calculate_boyle_volume(10.0, 0.0, -10.0), None);
}

#[test]
fn test_freshwater_correction() {
    let corrected = correct_depth_for_freshwater(20.6);
    assert!((corrected - 20.0).abs() < 0.01);
}

#[test]
fn test_pressure_group_letters() {
    assert_eq!(PressureGroup::from_letter('A'), Some(PressureGroup::A));
    assert_eq!(PressureGroup::from_letter('Z'), Some(PressureGroup::Z));
    assert_eq!(PressureGroup::from_letter('a'), None);
    assert_eq!(PressureGroup::K.letter(), 'K');
    assert!(PressureGroup::A < PressureGroup::B);
    assert!(PressureGroup::Y < PressureGroup::Z);
}
