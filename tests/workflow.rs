use dive_rdp_planner::ndl::{group_after_dive, ndl_for_depth};
use dive_rdp_planner::plan::plan_repetitive_dive;
use dive_rdp_planner::repetitive::repetitive_dive_times;
use dive_rdp_planner::surface::group_after_surface_interval;
use dive_rdp_planner::{PlanError, PressureGroup};

#[test]
fn test_textbook_two_dive_day() {
    // dive 1: 18 m for 50 min, inside the 56 min limit
    let first = group_after_dive(18.0, 50.0).unwrap();
    assert!(ndl_for_depth(18.0).unwrap() >= 50);

    // an hour on the boat never makes the group heavier
    let surfaced = group_after_surface_interval(first, 60.0);
    assert!(surfaced <= first);

    // dive 2 to 10 m: either times come back or the combination is
    // unsupported, both are legitimate answers
    match repetitive_dive_times(surfaced, 10.0) {
        Some(times) => {
            assert!(times.andl > 0);
            assert_eq!(times.rnt + times.andl, ndl_for_depth(10.0).unwrap());
        }
        None => {}
    }
}

#[test]
fn test_plan_matches_the_three_individual_lookups() {
    let plan = plan_repetitive_dive(16.0, 40.0, 45.0, 14.0).unwrap();

    let first = group_after_dive(16.0, 40.0).unwrap();
    let surfaced = group_after_surface_interval(first, 45.0);
    let times = repetitive_dive_times(surfaced, 14.0).unwrap();

    assert_eq!(plan.first_group, first);
    assert_eq!(plan.surfaced_group, surfaced);
    assert_eq!(plan.residual_nitrogen_min, times.rnt);
    assert_eq!(plan.adjusted_ndl_min, times.andl);
    assert_eq!(plan.allowable_bottom_time_min(), times.andl);
}

#[test]
fn test_longer_interval_never_shrinks_the_second_dive() {
    let short = plan_repetitive_dive(18.0, 30.0, 30.0, 12.0).unwrap();
    let long = plan_repetitive_dive(18.0, 30.0, 120.0, 12.0).unwrap();
    assert!(long.surfaced_group <= short.surfaced_group);
    assert!(long.allowable_bottom_time_min() >= short.allowable_bottom_time_min());
}

#[test]
fn test_workflow_error_taxonomy() {
    assert_eq!(
        plan_repetitive_dive(50.0, 10.0, 60.0, 12.0),
        Err(PlanError::TooDeep)
    );
    assert_eq!(
        plan_repetitive_dive(30.0, 21.0, 60.0, 12.0),
        Err(PlanError::ExceedsNoDecoLimit)
    );
    assert_eq!(
        plan_repetitive_dive(10.0, 219.0, 5.0, 42.0),
        Err(PlanError::RepetitiveNotPermitted)
    );
}

#[test]
fn test_workflow_never_panics_across_a_sweep() {
    use rand::Rng;

    for _ in 0..500 {
        let d1 = rand::rng().random_range(-5.0..60.0);
        let t1 = rand::rng().random_range(-5.0..250.0);
        let si = rand::rng().random_range(-5.0..2000.0);
        let d2 = rand::rng().random_range(-5.0..60.0);
        let _ = plan_repetitive_dive(d1, t1, si, d2);
    }
}

#[test]
fn test_fully_cleared_diver_plans_like_a_first_dive() {
    // after a day out of the water the second dive carries residual time
    // for group A only
    let plan = plan_repetitive_dive(30.0, 15.0, 1441.0, 18.0).unwrap();
    assert_eq!(plan.surfaced_group, PressureGroup::A);
    assert_eq!(plan.residual_nitrogen_min, 6);
    assert_eq!(plan.adjusted_ndl_min, 50);
}
