//! Kerbs: Cl. 101.41 (safety kerb width), 109.8.1 (road kerb outline) and
//! 109.8.3 (safety kerb outline).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::irc5_2015::SAFETY_KERB_MIN_WIDTH;
use crate::errors::{ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::standards::ClauseResult;
use crate::units::{Meters, Millimeters, Unit};

use super::FootpathProvision;

pub const SAFETY_KERB_WIDTH: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "101.41");
pub const ROAD_KERB_OUTLINE: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.8.1");
pub const SAFETY_KERB_OUTLINE: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.8.3");

fn mm(value: f64) -> f64 {
    Meters::from(Millimeters(value)).0
}

/// Safety kerb width when no footpath is provided (Cl. 101.41).
///
/// Applies only when the bridge has no footpath; the kerb then serves
/// occasional pedestrians and must be at least 750 mm wide.
pub fn safety_kerb_width(kerb_width: Meters, footpath: FootpathProvision) -> ClauseResult {
    debug!(clause = %SAFETY_KERB_WIDTH, kerb_width = kerb_width.0, ?footpath, "evaluating");

    if footpath.is_provided() {
        return ClauseResult::not_applicable(
            SAFETY_KERB_WIDTH,
            Some(kerb_width.0),
            Unit::Meter,
            "Clause 101.41 not applicable as footpath is provided.",
        );
    }

    let compliant = kerb_width.0 >= SAFETY_KERB_MIN_WIDTH;
    let remarks = if compliant {
        format!(
            "Kerb width {:.3} m satisfies the minimum {:.3} m for occasional pedestrian use.",
            kerb_width.0, SAFETY_KERB_MIN_WIDTH
        )
    } else {
        format!(
            "Kerb width {:.3} m is less than the minimum {:.3} m required when no footpath is provided.",
            kerb_width.0, SAFETY_KERB_MIN_WIDTH
        )
    };
    ClauseResult::checked(
        SAFETY_KERB_WIDTH,
        SAFETY_KERB_MIN_WIDTH,
        kerb_width.0,
        Unit::Meter,
        compliant,
        remarks,
    )
}

/// Kerb cross-section outline (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerbOutline {
    pub width: f64,
    /// Minimum effective top width
    pub effective_width: f64,
    pub height: f64,
    pub effective_height: f64,
    pub edge_radius: f64,
}

impl KerbOutline {
    /// Cross-sectional area (m²): rectangle, rounded edge quadrant, edge strip
    /// and the sloping face triangle.
    pub fn area_m2(&self) -> f64 {
        let r = self.edge_radius;
        let b = self.effective_width;
        let h = self.height;
        let he = self.effective_height;
        b * h + PI * r * r / 4.0 + b * r + 0.5 * r * he
    }
}

/// Standard road kerb outline (Cl. 109.8.1)
pub fn road_kerb_outline() -> KerbOutline {
    KerbOutline {
        width: mm(225.0),
        effective_width: mm(175.0),
        height: mm(225.0),
        effective_height: mm(200.0),
        edge_radius: mm(25.0),
    }
}

/// Safety kerb outline with its top-width check (Cl. 109.8.3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyKerbOutline {
    pub clause: ClauseRef,
    pub outline: KerbOutline,
    pub min_required_top_width: f64,
    pub is_width_compliant: bool,
    /// Cross-sectional area (m²)
    pub area_m2: f64,
}

/// Safety kerb outline (Cl. 109.8.3).
///
/// Same outline as the road kerb except that the top width, here
/// `top_width`, shall not be less than 750 mm. The effective width keeps the
/// road kerb's edge allowance.
pub fn safety_kerb_outline(top_width: Meters) -> CalcResult<SafetyKerbOutline> {
    ensure_positive("top_width", top_width.0)?;
    let road = road_kerb_outline();
    let edge_allowance = road.width - road.effective_width;
    let outline = KerbOutline {
        width: top_width.0,
        effective_width: (top_width.0 - edge_allowance).max(0.0),
        ..road
    };
    Ok(SafetyKerbOutline {
        clause: SAFETY_KERB_OUTLINE,
        outline,
        min_required_top_width: SAFETY_KERB_MIN_WIDTH,
        is_width_compliant: top_width.0 >= SAFETY_KERB_MIN_WIDTH,
        area_m2: outline.area_m2(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kerb_not_applicable_with_footpath() {
        let r = safety_kerb_width(Meters(0.3), FootpathProvision::BothSides);
        assert!(!r.applicable);
        assert!(r.is_compliant);
        assert_eq!(r.required, None);
    }

    #[test]
    fn test_kerb_boundary_inclusive() {
        let r = safety_kerb_width(Meters(0.75), FootpathProvision::None);
        assert!(r.applicable);
        assert!(r.is_compliant);

        let r = safety_kerb_width(Meters(0.749), FootpathProvision::None);
        assert!(!r.is_compliant);
        assert_eq!(r.required, Some(0.75));
        assert!(r.remarks.contains("less than"));
    }

    #[test]
    fn test_road_kerb_dimensions() {
        let kerb = road_kerb_outline();
        assert_eq!(kerb.width, 0.225);
        assert_eq!(kerb.effective_width, 0.175);
        assert_eq!(kerb.height, 0.225);
        assert_eq!(kerb.effective_height, 0.2);
        assert_eq!(kerb.edge_radius, 0.025);
    }

    #[test]
    fn test_road_kerb_area() {
        // 0.175*0.225 + pi*0.025^2/4 + 0.175*0.025 + 0.5*0.025*0.2
        let expected = 0.039375 + PI * 0.000625 / 4.0 + 0.004375 + 0.0025;
        assert!((road_kerb_outline().area_m2() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_safety_kerb_outline() {
        let ok = safety_kerb_outline(Meters(0.75)).unwrap();
        assert!(ok.is_width_compliant);
        assert!((ok.outline.effective_width - 0.70).abs() < 1e-12);
        assert_eq!(ok.outline.height, 0.225);

        let narrow = safety_kerb_outline(Meters(0.6)).unwrap();
        assert!(!narrow.is_width_compliant);
        assert!(narrow.area_m2 < ok.area_m2);

        assert!(safety_kerb_outline(Meters(0.0)).is_err());
    }
}
