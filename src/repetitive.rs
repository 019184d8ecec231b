#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::Format;

use crate::ndl::depth_row;
use crate::rdp::RdpTable;
use crate::PressureGroup;

/// Residual nitrogen time and adjusted no-decompression limit for a
/// repetitive dive. The adjusted limit is already net of the residual time:
/// the two always sum to the depth's full no-decompression limit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq, Eq)]
pub struct RepetitiveTimes {
    pub rnt: u16,
    pub andl: u16,
}

/// Repetitive-dive times for a diver entering the water in the given group.
/// Depth rounds up to the canonical bracket. `None` means the combination is
/// not in the table: the repetitive dive is not recommended at this depth
/// for this group without decompression. That is a normal planning outcome
/// for the caller to surface as a warning, not a failure.
pub fn repetitive_dive_times(group: PressureGroup, depth_m: f32) -> Option<RepetitiveTimes> {
    let row = depth_row(depth_m)?;
    RdpTable::REPETITIVE_TIMES[row]
        .iter()
        .find(|&&(entry_group, _, _)| entry_group == group)
        .map(|&(_, rnt, andl)| RepetitiveTimes { rnt, andl })
}

#[test]
fn test_light_group_shallow_repeat() {
    let times = repetitive_dive_times(PressureGroup::A, 10.0).unwrap();
    assert_eq!(times, RepetitiveTimes { rnt: 10, andl: 209 });
}

#[test]
fn test_depth_rounds_up_before_lookup() {
    // 27 m plans as 30 m
    let times = repetitive_dive_times(PressureGroup::C, 27.0).unwrap();
    assert_eq!(times, RepetitiveTimes { rnt: 8, andl: 12 });
}

#[test]
fn test_heavy_group_deep_repeat_is_not_recommended() {
    assert_eq!(repetitive_dive_times(PressureGroup::Z, 40.0), None);
    assert_eq!(repetitive_dive_times(PressureGroup::W, 18.0), None);
}

#[test]
fn test_too_deep_is_out_of_scope() {
    assert_eq!(repetitive_dive_times(PressureGroup::A, 43.0), None);
}

#[test]
fn test_times_sum_to_the_full_limit() {
    for &depth in RdpTable::DEPTHS_M.iter() {
        let ndl = crate::ndl::ndl_for_depth(depth).unwrap();
        for index in 0..26 {
            let group = PressureGroup::from_index(index).unwrap();
            if let Some(times) = repetitive_dive_times(group, depth) {
                assert_eq!(times.rnt + times.andl, ndl);
            }
        }
    }
}
