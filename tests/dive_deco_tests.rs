//! Sanity band against a real decompression model: the planner's table
//! limits come from a fixed recreational table, so they should sit at or
//! conservatively below what a Bühlmann implementation allows, never wildly
//! above it.

#[cfg(feature = "std")]
#[test]
fn test_table_ndl_against_dive_deco() {
    use dive_deco::{BuehlmannModel, DecoModel, Depth, Gas, Time};
    use dive_rdp_planner::ndl::ndl_for_depth;
    use dive_rdp_planner::rdp::RdpTable;

    fn reference_ndl(target_depth: f32) -> f32 {
        let mut model = BuehlmannModel::default();
        let air = Gas::new(0.21, 0.);
        model.record(
            Depth::from_meters(target_depth),
            Time::from_minutes(0.),
            &air,
        );
        model.ndl().as_minutes() as f32
    }

    let mut results = Vec::new();
    for &depth in RdpTable::DEPTHS_M.iter() {
        let table_ndl = ndl_for_depth(depth).unwrap() as f32;
        let model_ndl = reference_ndl(depth);
        results.push((depth, table_ndl, model_ndl));
    }

    for (depth, table_ndl, model_ndl) in results.iter() {
        println!(
            "Depth: {}m - Table NDL: {}min - Reference NDL: {}min",
            depth, table_ndl, model_ndl
        );
    }

    // the model is instantaneous-descent, the table assumes it too; allow a
    // little slack for the model's shorter deep limits
    for (depth, table_ndl, model_ndl) in results.iter() {
        if *depth >= 18.0 {
            assert!(
                *table_ndl <= model_ndl + 10.0,
                "table allows {}min at {}m but the reference model only {}min",
                table_ndl,
                depth,
                model_ndl
            );
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_repetitive_credit_against_dive_deco_direction() {
    use dive_rdp_planner::plan::plan_repetitive_dive;

    // a repetitive dive must never be granted more no-stop time than a
    // clean first dive to the same depth
    use dive_rdp_planner::ndl::ndl_for_depth;

    for (first_depth, first_time, interval, second_depth) in [
        (18.0, 40.0, 30.0, 12.0),
        (22.0, 20.0, 60.0, 14.0),
        (30.0, 12.0, 45.0, 16.0),
        (25.0, 25.0, 90.0, 10.0),
    ] {
        let plan = plan_repetitive_dive(first_depth, first_time, interval, second_depth).unwrap();
        let clean_ndl = ndl_for_depth(second_depth).unwrap();
        println!(
            "{}m/{}min + {}min surface -> {} with {}min at {}m (clean {}min)",
            first_depth,
            first_time,
            interval,
            plan.surfaced_group,
            plan.allowable_bottom_time_min(),
            second_depth,
            clean_ndl
        );
        assert!(plan.allowable_bottom_time_min() < clean_ndl);
    }
}
