use crate::rdp::RdpTable;
use crate::PressureGroup;

/// Row index of the canonical table depth the requested depth plans as.
/// Dive planning always rounds the actual depth up to the next tabulated
/// bracket, never down. `None` past the deepest tabulated entry.
pub(crate) fn depth_row(depth_m: f32) -> Option<usize> {
    if !(depth_m >= 0.0) {
        return None;
    }
    RdpTable::DEPTHS_M.iter().position(|&d| depth_m <= d)
}

/// Canonical depth in meters the requested depth is planned at.
pub fn canonical_depth(depth_m: f32) -> Option<f32> {
    depth_row(depth_m).map(|row| RdpTable::DEPTHS_M[row])
}

/// No-decompression limit in minutes for a dive to the given depth.
/// `None` means the depth is beyond this planner.
pub fn ndl_for_depth(depth_m: f32) -> Option<u16> {
    depth_row(depth_m).map(|row| RdpTable::NDL_MIN[row])
}

/// Pressure group after a single no-stop dive. Bottom time rounds up to the
/// next listed bucket. `None` when the depth is beyond the table or the
/// bottom time exceeds the depth's no-decompression limit, which puts the
/// dive outside no-stop planning altogether.
pub fn group_after_dive(depth_m: f32, bottom_time_min: f32) -> Option<PressureGroup> {
    let row = depth_row(depth_m)?;
    if !(bottom_time_min >= 0.0) {
        return None;
    }
    RdpTable::TIMES_TO_GROUP[row]
        .iter()
        .find(|&&(minutes, _)| bottom_time_min <= minutes as f32)
        .map(|&(_, group)| group)
}

#[test]
fn test_depth_rounds_up_to_next_bracket() {
    assert_eq!(canonical_depth(9.0), Some(10.0));
    assert_eq!(canonical_depth(10.0), Some(10.0));
    assert_eq!(canonical_depth(10.1), Some(12.0));
    assert_eq!(canonical_depth(23.0), Some(25.0));
    assert_eq!(canonical_depth(42.0), Some(42.0));
    assert_eq!(canonical_depth(42.1), None);
}

#[test]
fn test_ndl_boundaries() {
    assert_eq!(ndl_for_depth(18.0), Some(56));
    assert_eq!(ndl_for_depth(42.0), Some(8));
    assert_eq!(ndl_for_depth(43.0), None);
}

#[test]
fn test_ndl_rejects_nonsense_depths() {
    assert_eq!(ndl_for_depth(-3.0), None);
    assert_eq!(ndl_for_depth(f32::NAN), None);
}

#[test]
fn test_group_at_exact_limit_is_last_bucket() {
    assert_eq!(group_after_dive(10.0, 219.0), Some(PressureGroup::Z));
    assert_eq!(group_after_dive(10.0, 220.0), None);
}

#[test]
fn test_group_time_rounds_up_within_row() {
    // 18 m row: 50 min is past the 48 min bucket, so it books as 51 min
    assert_eq!(group_after_dive(18.0, 48.0), Some(PressureGroup::S));
    assert_eq!(group_after_dive(18.0, 50.0), Some(PressureGroup::T));
    assert_eq!(group_after_dive(18.0, 51.0), Some(PressureGroup::T));
}

#[test]
fn test_group_never_lightens_with_more_time() {
    for &depth in RdpTable::DEPTHS_M.iter() {
        let ndl = ndl_for_depth(depth).unwrap();
        let mut last = PressureGroup::A;
        for minutes in 1..=ndl {
            let group = group_after_dive(depth, minutes as f32).unwrap();
            assert!(group >= last, "group fell at {} m / {} min", depth, minutes);
            last = group;
        }
    }
}

#[test]
fn test_group_too_deep_is_out_of_scope() {
    assert_eq!(group_after_dive(45.0, 5.0), None);
    assert_eq!(group_after_dive(18.0, -1.0), None);
}
