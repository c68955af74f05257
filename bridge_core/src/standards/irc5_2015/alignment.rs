//! Alignment limits: skew (Cl. 105.3.3), longitudinal gradient (Cl. 105.3.6)
//! and bridge length on a single curve (Cl. 105.3.10).

use tracing::debug;

use crate::constants::irc5_2015::{
    MAX_BRIDGE_LENGTH_SINGLE_CURVE, MIN_LONGITUDINAL_GRADIENT, SKEW_ANGLE_LIMIT,
};
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::standards::ClauseResult;
use crate::units::{Degrees, Meters, Percent, Unit};

pub const SKEW_ANGLE: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "105.3.3");
pub const LONGITUDINAL_GRADIENT: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "105.3.6");
pub const SINGLE_CURVE_LENGTH: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "105.3.10");

/// Skew angle check. Angles above 30° need special investigation and are
/// reported non-compliant.
pub fn skew_angle(angle: Degrees) -> CalcResult<ClauseResult> {
    let angle = ensure_non_negative("skew_angle", angle.0.abs())?;
    debug!(clause = %SKEW_ANGLE, angle, "evaluating");
    let compliant = angle <= SKEW_ANGLE_LIMIT;
    let remarks = if compliant {
        format!("Skew angle {:.1}° is within the {:.0}° limit.", angle, SKEW_ANGLE_LIMIT)
    } else {
        format!(
            "Skew angle {:.1}° exceeds {:.0}°; special investigation of the structure is required.",
            angle, SKEW_ANGLE_LIMIT
        )
    };
    Ok(ClauseResult::checked(
        SKEW_ANGLE,
        SKEW_ANGLE_LIMIT,
        angle,
        Unit::Degree,
        compliant,
        remarks,
    ))
}

/// Longitudinal gradient check, gradient in percent (minimum 0.3 %)
pub fn longitudinal_gradient(gradient: Percent) -> CalcResult<ClauseResult> {
    let gradient = ensure_non_negative("longitudinal_gradient", gradient.0)?;
    debug!(clause = %LONGITUDINAL_GRADIENT, gradient, "evaluating");
    let compliant = gradient >= MIN_LONGITUDINAL_GRADIENT;
    let remarks = if compliant {
        format!("Longitudinal gradient {:.2} % meets the minimum.", gradient)
    } else {
        format!(
            "Longitudinal gradient {:.2} % is less than the minimum requirement of {} %.",
            gradient, MIN_LONGITUDINAL_GRADIENT
        )
    };
    Ok(ClauseResult::checked(
        LONGITUDINAL_GRADIENT,
        MIN_LONGITUDINAL_GRADIENT,
        gradient,
        Unit::Percent,
        compliant,
        remarks,
    ))
}

/// Bridge length on a single horizontal curve (maximum 30 m)
pub fn bridge_length_single_curve(length: Meters) -> CalcResult<ClauseResult> {
    let length = ensure_positive("bridge_length", length.0)?;
    debug!(clause = %SINGLE_CURVE_LENGTH, length, "evaluating");
    let compliant = length <= MAX_BRIDGE_LENGTH_SINGLE_CURVE;
    let remarks = if compliant {
        format!("Bridge length {:.3} m is within the single-curve limit.", length)
    } else {
        format!(
            "Bridge length {:.3} m exceeds the maximum limit of {:.0} m for single curve alignment.",
            length, MAX_BRIDGE_LENGTH_SINGLE_CURVE
        )
    };
    Ok(ClauseResult::checked(
        SINGLE_CURVE_LENGTH,
        MAX_BRIDGE_LENGTH_SINGLE_CURVE,
        length,
        Unit::Meter,
        compliant,
        remarks,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_limit_inclusive() {
        assert!(skew_angle(Degrees(30.0)).unwrap().is_compliant);
        assert!(skew_angle(Degrees(0.0)).unwrap().is_compliant);
        let r = skew_angle(Degrees(35.0)).unwrap();
        assert!(r.fails());
        assert!(r.remarks.contains("special investigation"));
    }

    #[test]
    fn test_negative_skew_uses_magnitude() {
        let r = skew_angle(Degrees(-20.0)).unwrap();
        assert_eq!(r.provided, Some(20.0));
        assert!(r.is_compliant);
    }

    #[test]
    fn test_gradient() {
        assert!(longitudinal_gradient(Percent(0.3)).unwrap().is_compliant);
        assert!(longitudinal_gradient(Percent(0.2)).unwrap().fails());
        assert!(longitudinal_gradient(Percent(-1.0)).is_err());
    }

    #[test]
    fn test_single_curve_length() {
        assert!(bridge_length_single_curve(Meters(30.0)).unwrap().is_compliant);
        assert!(bridge_length_single_curve(Meters(30.5)).unwrap().fails());
        assert!(bridge_length_single_curve(Meters(0.0)).is_err());
    }
}
