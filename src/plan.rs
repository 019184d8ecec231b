//! Three-step repetitive-dive planning: first dive to a pressure group,
//! surface-interval credit, then the repetitive-dive times for the second
//! depth. The caller owns the inputs between steps; this module only
//! sequences the table lookups and names the two ways a plan can leave
//! no-stop territory.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use defmt::Format;

use crate::ndl::{group_after_dive, ndl_for_depth};
use crate::repetitive::repetitive_dive_times;
use crate::surface::group_after_surface_interval;
use crate::{PlanError, PressureGroup};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Format, Clone, Copy, PartialEq, Eq)]
pub struct RepetitivePlan {
    /// Group after the first dive.
    pub first_group: PressureGroup,
    /// Group after the surface interval, entering the second dive.
    pub surfaced_group: PressureGroup,
    pub residual_nitrogen_min: u16,
    pub adjusted_ndl_min: u16,
}

impl RepetitivePlan {
    /// Longest no-stop bottom time for the repetitive dive. The adjusted
    /// limit is already net of residual nitrogen, so it is the answer
    /// directly.
    pub fn allowable_bottom_time_min(&self) -> u16 {
        self.adjusted_ndl_min
    }
}

pub fn plan_repetitive_dive(
    first_depth_m: f32,
    first_bottom_time_min: f32,
    surface_interval_min: f32,
    second_depth_m: f32,
) -> Result<RepetitivePlan, PlanError> {
    ndl_for_depth(first_depth_m).ok_or(PlanError::TooDeep)?;
    let first_group = group_after_dive(first_depth_m, first_bottom_time_min)
        .ok_or(PlanError::ExceedsNoDecoLimit)?;

    let surfaced_group = group_after_surface_interval(first_group, surface_interval_min);

    ndl_for_depth(second_depth_m).ok_or(PlanError::TooDeep)?;
    let times = repetitive_dive_times(surfaced_group, second_depth_m)
        .ok_or(PlanError::RepetitiveNotPermitted)?;

    defmt::info!(
        "plan: first {} -> surfaced {}, rnt {} andl {}",
        first_group,
        surfaced_group,
        times.rnt,
        times.andl
    );

    Ok(RepetitivePlan {
        first_group,
        surfaced_group,
        residual_nitrogen_min: times.rnt,
        adjusted_ndl_min: times.andl,
    })
}

#[test]
fn test_plan_two_easy_dives() {
    // 18 m for 30 min books as K; an hour on the boat; back to 12 m
    let plan = plan_repetitive_dive(18.0, 30.0, 60.0, 12.0).unwrap();
    assert_eq!(plan.first_group, PressureGroup::K);
    assert!(plan.surfaced_group <= plan.first_group);
    assert!(plan.allowable_bottom_time_min() > 0);
    assert_eq!(
        plan.residual_nitrogen_min + plan.adjusted_ndl_min,
        ndl_for_depth(12.0).unwrap()
    );
}

#[test]
fn test_plan_first_dive_too_deep() {
    assert_eq!(
        plan_repetitive_dive(45.0, 5.0, 60.0, 12.0),
        Err(PlanError::TooDeep)
    );
}

#[test]
fn test_plan_first_dive_over_the_limit() {
    assert_eq!(
        plan_repetitive_dive(18.0, 57.0, 60.0, 12.0),
        Err(PlanError::ExceedsNoDecoLimit)
    );
}

#[test]
fn test_plan_second_dive_too_deep() {
    assert_eq!(
        plan_repetitive_dive(18.0, 30.0, 60.0, 43.0),
        Err(PlanError::TooDeep)
    );
}

#[test]
fn test_plan_repeat_not_recommended() {
    // straight back in deep with a heavy group on the shoulder
    assert_eq!(
        plan_repetitive_dive(10.0, 219.0, 0.0, 40.0),
        Err(PlanError::RepetitiveNotPermitted)
    );
}
