use dive_rdp_planner::surface::group_after_surface_interval;
use dive_rdp_planner::PressureGroup;

#[test]
fn test_longer_intervals_never_cost_credit() {
    use rand::Rng;

    for index in 0..26 {
        let group = PressureGroup::from_index(index).unwrap();
        for _ in 0..50 {
            let short = rand::rng().random_range(0.0..1500.0);
            let long = rand::rng().random_range(short..=1500.0);
            let after_short = group_after_surface_interval(group, short);
            let after_long = group_after_surface_interval(group, long);
            assert!(
                after_long <= after_short,
                "group {} lost credit going from {} to {} min",
                group,
                short,
                long
            );
        }
    }
}

#[test]
fn test_listed_groups_walk_down_to_clear() {
    // group L steps through every lighter group on its way to A
    let mut seen_clear = false;
    let mut last = PressureGroup::L;
    for minutes in 0..200 {
        let now = group_after_surface_interval(PressureGroup::L, minutes as f32);
        assert!(now <= last);
        last = now;
        if now == PressureGroup::A {
            seen_clear = true;
        }
    }
    assert!(seen_clear, "three hours on the surface must clear group L");
}

#[test]
fn test_unlisted_groups_hold_conservatively() {
    // no credit row: the group sticks until a full day has passed
    assert_eq!(
        group_after_surface_interval(PressureGroup::Z, 179.0),
        PressureGroup::Z
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::Z, 1440.0),
        PressureGroup::Z
    );
    assert_eq!(
        group_after_surface_interval(PressureGroup::Z, 1441.0),
        PressureGroup::A
    );
}

#[test]
fn test_never_panics_on_odd_inputs() {
    for index in 0..26 {
        let group = PressureGroup::from_index(index).unwrap();
        let _ = group_after_surface_interval(group, f32::NAN);
        let _ = group_after_surface_interval(group, f32::INFINITY);
        let _ = group_after_surface_interval(group, -60.0);
    }
}
