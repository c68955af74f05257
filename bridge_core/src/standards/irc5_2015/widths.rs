//! Design life (Cl. 104.1.3.4), carriageway width (Cl. 104.3.1) and
//! footpath width (Cl. 104.3.6).

use tracing::debug;

use crate::constants::irc5_2015::{
    ADDITIONAL_LANE_WIDTH, DESIGN_LIFE_YEARS, FOOTPATH_MIN_CLEAR_WIDTH, SINGLE_LANE_WIDTH,
    TWO_LANE_WIDTH,
};
use crate::errors::{CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::standards::ClauseResult;
use crate::units::{Meters, Unit};

use super::FootpathProvision;

pub const DESIGN_LIFE: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "104.1.3.4");
pub const CARRIAGEWAY_WIDTH: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "104.3.1");
pub const FOOTPATH_WIDTH: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "104.3.6");

/// Design life of a bridge structure in years (Cl. 104.1.3.4)
pub fn design_life() -> u32 {
    DESIGN_LIFE_YEARS
}

/// Minimum carriageway width for `lanes` traffic lanes.
///
/// One lane 4.25 m, two lanes 7.5 m, then 3.5 m per additional lane.
pub fn required_carriageway_width(lanes: u32) -> CalcResult<f64> {
    match lanes {
        0 => Err(CalcError::invalid_input(
            "num_lanes",
            "0",
            "A carriageway has at least one lane",
        )),
        1 => Ok(SINGLE_LANE_WIDTH),
        n => Ok(TWO_LANE_WIDTH + ADDITIONAL_LANE_WIDTH * f64::from(n - 2)),
    }
}

/// Carriageway width check (Cl. 104.3.1).
///
/// A provided width strictly less than the minimum is non-compliant; equal
/// width complies.
pub fn carriageway_width(width: Meters, lanes: u32) -> CalcResult<ClauseResult> {
    debug!(clause = %CARRIAGEWAY_WIDTH, width = width.0, lanes, "evaluating");
    let required = required_carriageway_width(lanes)?;
    let compliant = width.0 >= required;
    let remarks = if compliant {
        format!(
            "Carriageway width {:.3} m meets the minimum {:.3} m for {} lane(s).",
            width.0, required, lanes
        )
    } else {
        format!(
            "Carriageway width {:.3} m is less than the minimum {:.3} m for {} lane(s).",
            width.0, required, lanes
        )
    };
    Ok(ClauseResult::checked(
        CARRIAGEWAY_WIDTH,
        required,
        width.0,
        Unit::Meter,
        compliant,
        remarks,
    ))
}

/// Footpath clear width check (Cl. 104.3.6).
///
/// Not applicable without a footpath. With one, the width is required.
pub fn footpath_width(footpath: FootpathProvision, width: Option<Meters>) -> CalcResult<ClauseResult> {
    debug!(clause = %FOOTPATH_WIDTH, ?footpath, width = ?width.map(|w| w.0), "evaluating");

    if !footpath.is_provided() {
        return Ok(ClauseResult::not_applicable(
            FOOTPATH_WIDTH,
            width.map(|w| w.0),
            Unit::Meter,
            "Clause 104.3.6 not applicable as no footpath is provided.",
        ));
    }

    let width = width.ok_or_else(|| CalcError::missing_parameter("footpath_width"))?;
    let compliant = width.0 >= FOOTPATH_MIN_CLEAR_WIDTH;
    let remarks = if compliant {
        format!(
            "Footpath clear width {:.3} m meets the minimum {:.3} m.",
            width.0, FOOTPATH_MIN_CLEAR_WIDTH
        )
    } else {
        format!(
            "Footpath clear width {:.3} m is less than the minimum {:.3} m.",
            width.0, FOOTPATH_MIN_CLEAR_WIDTH
        )
    };
    Ok(ClauseResult::checked(
        FOOTPATH_WIDTH,
        FOOTPATH_MIN_CLEAR_WIDTH,
        width.0,
        Unit::Meter,
        compliant,
        remarks,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_life() {
        assert_eq!(design_life(), 100);
    }

    #[test]
    fn test_required_widths() {
        assert_eq!(required_carriageway_width(1).unwrap(), 4.25);
        assert_eq!(required_carriageway_width(2).unwrap(), 7.5);
        assert_eq!(required_carriageway_width(3).unwrap(), 11.0);
        assert_eq!(required_carriageway_width(4).unwrap(), 14.5);
        assert!(required_carriageway_width(0).is_err());
    }

    #[test]
    fn test_carriageway_equal_width_complies() {
        let r = carriageway_width(Meters(7.5), 2).unwrap();
        assert!(r.is_compliant);
        assert_eq!(r.provided, Some(7.5));
    }

    #[test]
    fn test_carriageway_narrow_fails() {
        let r = carriageway_width(Meters(4.0), 1).unwrap();
        assert!(r.fails());
        assert_eq!(r.required, Some(4.25));
    }

    #[test]
    fn test_footpath_not_provided() {
        let r = footpath_width(FootpathProvision::None, Some(Meters(0.5))).unwrap();
        assert!(!r.applicable);
        assert!(r.is_compliant);
    }

    #[test]
    fn test_footpath_width_missing() {
        let err = footpath_width(FootpathProvision::SingleSide, None).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PARAMETER");
    }

    #[test]
    fn test_footpath_width_checks() {
        assert!(footpath_width(FootpathProvision::BothSides, Some(Meters(1.5)))
            .unwrap()
            .is_compliant);
        assert!(footpath_width(FootpathProvision::BothSides, Some(Meters(1.2)))
            .unwrap()
            .fails());
    }
}
