use dive_rdp_planner::ndl::ndl_for_depth;
use dive_rdp_planner::rdp::RdpTable;
use dive_rdp_planner::repetitive::repetitive_dive_times;
use dive_rdp_planner::PressureGroup;

#[test]
fn test_heavier_groups_get_less_time_at_every_depth() {
    for &depth in RdpTable::DEPTHS_M.iter() {
        let mut last_rnt = 0;
        let mut last_andl = u16::MAX;
        for index in 0..26 {
            let group = PressureGroup::from_index(index).unwrap();
            if let Some(times) = repetitive_dive_times(group, depth) {
                assert!(times.rnt > last_rnt, "residual time must grow at {} m", depth);
                assert!(times.andl < last_andl, "adjusted limit must shrink at {} m", depth);
                last_rnt = times.rnt;
                last_andl = times.andl;
            }
        }
    }
}

#[test]
fn test_absent_combinations_are_the_heavy_tail() {
    // once a group is too heavy for a depth, every heavier group is too
    for &depth in RdpTable::DEPTHS_M.iter() {
        let mut supported_ended = false;
        for index in 0..26 {
            let group = PressureGroup::from_index(index).unwrap();
            match repetitive_dive_times(group, depth) {
                Some(_) => assert!(
                    !supported_ended,
                    "support gap at {} m group {}",
                    depth, group
                ),
                None => supported_ended = true,
            }
        }
    }
}

#[test]
fn test_group_a_can_always_go_back_in() {
    for &depth in RdpTable::DEPTHS_M.iter() {
        let times = repetitive_dive_times(PressureGroup::A, depth).unwrap();
        assert!(times.andl > 0);
        assert_eq!(times.rnt + times.andl, ndl_for_depth(depth).unwrap());
    }
}

#[test]
fn test_depth_rounding_matches_the_single_dive_lookup() {
    for depth in [9.5f32, 11.0, 15.0, 18.5, 23.0, 27.5, 33.0, 41.5] {
        let a = repetitive_dive_times(PressureGroup::B, depth).unwrap();
        let canonical = dive_rdp_planner::ndl::canonical_depth(depth).unwrap();
        let b = repetitive_dive_times(PressureGroup::B, canonical).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_out_of_table_inputs_resolve_to_none() {
    assert_eq!(repetitive_dive_times(PressureGroup::A, 43.0), None);
    assert_eq!(repetitive_dive_times(PressureGroup::A, -1.0), None);
    assert_eq!(repetitive_dive_times(PressureGroup::A, f32::NAN), None);
}
