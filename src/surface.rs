use crate::rdp::RdpTable;
use crate::PressureGroup;

/// Pressure group after off-gassing at the surface for the given interval.
///
/// Always returns a group. A starting group without a credit row keeps its
/// group until the full-clear threshold rather than guessing credit the
/// table does not list. Fractional minutes take the credit of the whole
/// minute they fall in.
pub fn group_after_surface_interval(group: PressureGroup, interval_min: f32) -> PressureGroup {
    if !(interval_min >= 0.0) {
        return group;
    }

    let row = RdpTable::SURFACE_INTERVALS
        .iter()
        .find(|&&(start, _)| start == group);

    match row {
        Some(&(_, ranges)) => {
            for &(from, to, new_group) in ranges.iter() {
                if interval_min >= from as f32 && interval_min < (to + 1) as f32 {
                    return new_group;
                }
            }
            // past the longest listed range: fully cleared
            PressureGroup::A
        }
        None => {
            if interval_min > RdpTable::FULL_CLEAR_MIN as f32 {
                PressureGroup::A
            } else {
                group
            }
        }
    }
}

#[test]
fn test_zero_interval_keeps_group() {
    assert_eq!(
        group_after_surface_interval(PressureGroup::D, 0.0),
        PressureGroup::D
    );
}

#[test]
fn test_credit_steps_down_through_ranges() {
    assert_eq!(
        group_after_surface_interval(PressureGroup::D, 8.0),
        PressureGroup::D
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::D, 9.0),
        PressureGroup::C
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::D, 60.0),
        PressureGroup::B
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::D, 100.0),
        PressureGroup::A
    );
}

#[test]
fn test_past_the_table_is_fully_clear() {
    assert_eq!(
        group_after_surface_interval(PressureGroup::L, 181.0),
        PressureGroup::A
    );
}

#[test]
fn test_unlisted_group_holds_until_full_clear() {
    assert_eq!(
        group_after_surface_interval(PressureGroup::T, 60.0),
        PressureGroup::T
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::T, 1441.0),
        PressureGroup::A
    );
}

#[test]
fn test_fractional_minutes_use_the_containing_minute() {
    // B clears to A at 48 min; 47.5 still counts as minute 47
    assert_eq!(
        group_after_surface_interval(PressureGroup::B, 47.5),
        PressureGroup::B
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::B, 48.0),
        PressureGroup::A
    );
}

#[test]
fn test_negative_interval_is_a_no_op() {
    assert_eq!(
        group_after_surface_interval(PressureGroup::C, -5.0),
        PressureGroup::C
    );
}

#[test]
fn test_credit_never_raises_any_group() {
    for index in 0..26 {
        let group = PressureGroup::from_index(index).unwrap();
        for interval in [0.0f32, 10.0, 45.0, 90.0, 179.0, 181.0, 1441.0] {
            assert!(group_after_surface_interval(group, interval) <= group);
        }
    }
}
