//! Gas consumption arithmetic: surface air consumption, consumption
//! projection for a planned dive, and gas-time remaining on a tank.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::Format;

use crate::ambient_pressure_ata;

/// Surface-normalized breathing rate. For a single-tank calculation the
/// pressure-based SAC and the volume-based RMV come out identical, so both
/// fields carry the same L/min figure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq)]
pub struct SacRate {
    pub sac: f32,
    pub rmv: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq)]
pub struct GasConsumption {
    pub gas_needed_liters: f32,
    pub pressure_used_bar: f32,
    pub end_pressure_bar: f32,
}

// sac = litres breathed per minute, normalized to 1 ATA:
//   (start - end) * tank_volume / duration / ambient_pressure
pub fn calculate_sac(
    start_pressure_bar: f32,
    end_pressure_bar: f32,
    tank_liters: f32,
    duration_min: f32,
    avg_depth_m: f32,
) -> Option<SacRate> {
    if !(duration_min > 0.0 && tank_liters > 0.0) {
        return None;
    }
    if !(start_pressure_bar >= end_pressure_bar) {
        return None;
    }
    let liters_used = (start_pressure_bar - end_pressure_bar) * tank_liters;
    let rate_at_depth = liters_used / duration_min;
    let sac = rate_at_depth / ambient_pressure_ata(avg_depth_m);
    Some(SacRate { sac, rmv: sac })
}

/// Projects how much gas a dive leg will take at a given SAC rate, and what
/// that costs in tank pressure.
pub fn calculate_gas_consumption(
    sac: f32,
    tank_liters: f32,
    duration_min: f32,
    depth_m: f32,
    start_pressure_bar: f32,
) -> Option<GasConsumption> {
    if !(sac > 0.0 && tank_liters > 0.0 && duration_min > 0.0 && start_pressure_bar > 0.0) {
        return None;
    }
    if !(depth_m >= 0.0) {
        return None;
    }
    let gas_needed_liters = sac * ambient_pressure_ata(depth_m) * duration_min;
    let pressure_used_bar = gas_needed_liters / tank_liters;
    Some(GasConsumption {
        gas_needed_liters,
        pressure_used_bar,
        end_pressure_bar: start_pressure_bar - pressure_used_bar,
    })
}

/// Minutes of gas left above the reserve at the current depth and breathing
/// rate. Already into the reserve means 0; a zero consumption rate means the
/// supply never runs down and the result is infinite.
pub fn calculate_time_remaining(
    sac: f32,
    tank_liters: f32,
    current_pressure_bar: f32,
    reserve_pressure_bar: f32,
    depth_m: f32,
) -> Option<f32> {
    if !(sac >= 0.0
        && tank_liters >= 0.0
        && current_pressure_bar >= 0.0
        && reserve_pressure_bar >= 0.0
        && depth_m >= 0.0)
    {
        return None;
    }
    if current_pressure_bar < reserve_pressure_bar {
        return Some(0.0);
    }
    let rate_bar_per_min = sac * ambient_pressure_ata(depth_m) / tank_liters;
    if !(rate_bar_per_min > 0.0) {
        return Some(f32::INFINITY);
    }
    Some((current_pressure_bar - reserve_pressure_bar) / rate_bar_per_min)
}

#[test]
fn test_sac_known_value() {
    // 50 bar out of a 12 L tank over 10 min at 10 m averages 30 L/min at the surface
    let result = calculate_sac(200.0, 150.0, 12.0, 10.0, 10.0).unwrap();
    assert_eq!(result.sac, 30.0);
    assert_eq!(result.rmv, result.sac);
}

#[test]
fn test_sac_invalid_inputs() {
    assert_eq!(calculate_sac(200.0, 150.0, 12.0, 0.0, 10.0), None);
    assert_eq!(calculate_sac(200.0, 150.0, 0.0, 10.0, 10.0), None);
    assert_eq!(calculate_sac(150.0, 200.0, 12.0, 10.0, 10.0), None);
}

#[test]
fn test_gas_consumption_round_numbers() {
    // 20 L/min surface rate at 20 m for 30 min: 20 * 3 * 30 = 1800 L
    let result = calculate_gas_consumption(20.0, 12.0, 30.0, 20.0, 200.0).unwrap();
    assert_eq!(result.gas_needed_liters, 1800.0);
    assert_eq!(result.pressure_used_bar, 150.0);
    assert_eq!(result.end_pressure_bar, 50.0);
}

#[test]
fn test_gas_consumption_invalid_inputs() {
    assert_eq!(calculate_gas_consumption(0.0, 12.0, 30.0, 20.0, 200.0), None);
    assert_eq!(calculate_gas_consumption(20.0, 12.0, 30.0, -1.0, 200.0), None);
    assert_eq!(calculate_gas_consumption(20.0, 12.0, 30.0, 20.0, 0.0), None);
}

#[test]
fn test_time_remaining() {
    // 150 bar above a 50 bar reserve, 20 L/min at 10 m in a 12 L tank
    // burns 40/12 bar per minute
    let minutes = calculate_time_remaining(20.0, 12.0, 200.0, 50.0, 10.0).unwrap();
    assert!((minutes - 45.0).abs() < 0.01);
}

#[test]
fn test_time_remaining_inside_reserve_is_zero() {
    assert_eq!(
        calculate_time_remaining(20.0, 12.0, 40.0, 50.0, 10.0),
        Some(0.0)
    );
}

#[test]
fn test_time_remaining_zero_rate_is_infinite() {
    let minutes = calculate_time_remaining(0.0, 12.0, 200.0, 50.0, 10.0).unwrap();
    assert!(minutes.is_infinite());
}

#[test]
fn test_time_remaining_rejects_negative() {
    assert_eq!(calculate_time_remaining(-1.0, 12.0, 200.0, 50.0, 10.0), None);
    assert_eq!(calculate_time_remaining(20.0, 12.0, 200.0, 50.0, -5.0), None);
}
