use dive_rdp_planner::ndl::{canonical_depth, group_after_dive, ndl_for_depth};
use dive_rdp_planner::rdp::RdpTable;
use dive_rdp_planner::PressureGroup;

#[test]
fn test_every_canonical_depth_reports_its_own_limit() {
    let expected = [219u16, 147, 98, 72, 56, 45, 37, 29, 20, 14, 9, 8];
    for (depth, ndl) in RdpTable::DEPTHS_M.iter().zip(expected.iter()) {
        assert_eq!(ndl_for_depth(*depth), Some(*ndl));
    }
}

#[test]
fn test_depths_between_brackets_plan_deeper() {
    // 18.5 m plans as a 20 m dive, with the 20 m limit
    assert_eq!(canonical_depth(18.5), Some(20.0));
    assert_eq!(ndl_for_depth(18.5), Some(45));
    // never the other way around
    assert!(ndl_for_depth(18.5).unwrap() < ndl_for_depth(18.0).unwrap());
}

#[test]
fn test_beyond_the_deepest_bracket_is_refused() {
    assert_eq!(ndl_for_depth(42.01), None);
    assert_eq!(group_after_dive(50.0, 5.0), None);
    assert_eq!(canonical_depth(60.0), None);
}

#[test]
fn test_group_at_the_limit_and_one_past_it() {
    assert_eq!(group_after_dive(10.0, 219.0), Some(PressureGroup::Z));
    assert_eq!(group_after_dive(10.0, 220.0), None);
    assert_eq!(group_after_dive(42.0, 8.0), Some(PressureGroup::G));
    assert_eq!(group_after_dive(42.0, 9.0), None);
}

#[test]
fn test_more_bottom_time_never_lightens_the_group() {
    use rand::Rng;

    for _ in 0..200 {
        let depth = rand::rng().random_range(1.0..42.0);
        let ndl = ndl_for_depth(depth).unwrap() as f32;
        let t1 = rand::rng().random_range(1.0..ndl);
        let t2 = rand::rng().random_range(t1..=ndl);
        let g1 = group_after_dive(depth, t1).unwrap();
        let g2 = group_after_dive(depth, t2).unwrap();
        assert!(
            g1 <= g2,
            "{} min -> {} but {} min -> {} at {} m",
            t1,
            g1,
            t2,
            g2,
            depth
        );
    }
}

#[test]
fn test_deeper_never_lightens_the_group_at_fixed_time() {
    use rand::Rng;

    for _ in 0..200 {
        let d1 = rand::rng().random_range(1.0..42.0);
        let d2 = rand::rng().random_range(d1..=42.0);
        // stay within the deeper dive's limit so both lookups resolve
        let limit = ndl_for_depth(d2).unwrap() as f32;
        let minutes = rand::rng().random_range(1.0..=limit);
        let shallow = group_after_dive(d1, minutes).unwrap();
        let deep = group_after_dive(d2, minutes).unwrap();
        assert!(
            shallow <= deep,
            "{} m -> {} but {} m -> {} at {} min",
            d1,
            shallow,
            d2,
            deep,
            minutes
        );
    }
}

#[cfg(feature = "std")]
#[test]
fn test_groups_against_recorded_plans() {
    use csv::Reader;

    let mut rdr = Reader::from_path("plans.csv").unwrap();
    let mut checked = 0;
    for result in rdr.records() {
        let record = result.unwrap();
        let depth: f32 = record[0].parse().unwrap();
        let minutes: f32 = record[1].parse().unwrap();
        let letter: char = record[2].parse().unwrap();
        let expected = PressureGroup::from_letter(letter).unwrap();
        assert_eq!(
            group_after_dive(depth, minutes),
            Some(expected),
            "{} m for {} min should book as {}",
            depth,
            minutes,
            letter
        );
        checked += 1;
    }
    assert!(checked > 10, "fixture file looks truncated");
}
