//! Wind forces on the superstructure (Cl. 209.3.3 to 209.3.6).
//!
//! Pressures come from [`wind_at_height`](super::wind_at_height) in Pa; areas
//! are in m² and forces are returned in kN.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::irc6_2017::{
    GUST_FACTOR, LIFT_COEFFICIENT, LIVE_LOAD_DRAG_COEFFICIENT, LIVE_LOAD_EXPOSED_HEIGHT,
    LONGITUDINAL_SHARE_GIRDER, LONGITUDINAL_SHARE_TRUSS,
};
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, DEFAULT_PRECISION};
use crate::units::{KiloNewtons, Meters, Newtons, Pascals};

use super::drag::{drag_coefficient, GirderGeometry, GirderSection};

pub const TRANSVERSE_FORCE: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "209.3.3");
pub const LONGITUDINAL_FORCE: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "209.3.4");
pub const VERTICAL_FORCE: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "209.3.5");
pub const LIVE_LOAD_FORCE: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "209.3.6");

/// `P * A * G * C` in kN, rounded
fn gust_force(pressure: Pascals, area_m2: f64, coefficient: f64) -> KiloNewtons {
    let force = KiloNewtons::from(Newtons(pressure.0 * area_m2 * GUST_FACTOR * coefficient));
    KiloNewtons(round_to(force.0, DEFAULT_PRECISION))
}

/// Transverse force `F_T = P_z * A_1 * G * C_D` on the solid area in
/// elevation `A_1`.
pub fn transverse_wind_force(pressure: Pascals, solid_area_m2: f64, drag: f64) -> CalcResult<KiloNewtons> {
    ensure_non_negative("pressure", pressure.0)?;
    ensure_non_negative("solid_area_m2", solid_area_m2)?;
    ensure_positive("drag_coefficient", drag)?;
    let force = gust_force(pressure, solid_area_m2, drag);
    debug!(clause = %TRANSVERSE_FORCE, pz = pressure.0, a1 = solid_area_m2, cd = drag, force = force.0, "evaluated");
    Ok(force)
}

/// Longitudinal force: 25 % of the transverse force for beam and box decks,
/// 50 % for trusses.
pub fn longitudinal_wind_force(transverse: KiloNewtons, section: GirderSection) -> CalcResult<KiloNewtons> {
    ensure_non_negative("transverse_force", transverse.0)?;
    let share = match section {
        GirderSection::Truss => LONGITUDINAL_SHARE_TRUSS,
        GirderSection::Beam | GirderSection::BoxGirder => LONGITUDINAL_SHARE_GIRDER,
    };
    let force = KiloNewtons(round_to(transverse.0 * share, DEFAULT_PRECISION));
    debug!(clause = %LONGITUDINAL_FORCE, %section, force = force.0, "evaluated");
    Ok(force)
}

/// Upward or downward force `F_V = P_z * A_3 * G * C_L` on the plan area
/// `A_3`, with `C_L` = 0.75.
pub fn vertical_wind_force(pressure: Pascals, plan_area_m2: f64) -> CalcResult<KiloNewtons> {
    ensure_non_negative("pressure", pressure.0)?;
    ensure_non_negative("plan_area_m2", plan_area_m2)?;
    let force = gust_force(pressure, plan_area_m2, LIFT_COEFFICIENT);
    debug!(clause = %VERTICAL_FORCE, pz = pressure.0, a3 = plan_area_m2, force = force.0, "evaluated");
    Ok(force)
}

/// Transverse wind on vehicles over `loaded_length`: a frontal area 3 m
/// high with `C_D` = 1.2.
pub fn live_load_wind_force(pressure: Pascals, loaded_length: Meters) -> CalcResult<KiloNewtons> {
    ensure_non_negative("pressure", pressure.0)?;
    let length = ensure_positive("loaded_length", loaded_length.0)?;
    let area = LIVE_LOAD_EXPOSED_HEIGHT * length;
    let force = gust_force(pressure, area, LIVE_LOAD_DRAG_COEFFICIENT);
    debug!(clause = %LIVE_LOAD_FORCE, pz = pressure.0, length, force = force.0, "evaluated");
    Ok(force)
}

/// Superstructure wind forces in one place (kN)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindForces {
    pub drag_coefficient: f64,
    pub transverse_kn: f64,
    pub longitudinal_kn: f64,
    pub vertical_kn: f64,
}

impl WindForces {
    /// Drag, then transverse, then longitudinal from transverse, plus vertical
    pub fn compute(
        pressure: Pascals,
        geometry: &GirderGeometry,
        solid_area_m2: f64,
        plan_area_m2: f64,
    ) -> CalcResult<Self> {
        let drag = drag_coefficient(geometry)?;
        let transverse = transverse_wind_force(pressure, solid_area_m2, drag)?;
        let longitudinal = longitudinal_wind_force(transverse, geometry.section)?;
        let vertical = vertical_wind_force(pressure, plan_area_m2)?;
        Ok(Self {
            drag_coefficient: drag,
            transverse_kn: transverse.0,
            longitudinal_kn: longitudinal.0,
            vertical_kn: vertical.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transverse() {
        // 500 * 20 * 2 * 1.5 = 30000 N
        let f = transverse_wind_force(Pascals(500.0), 20.0, 1.5).unwrap();
        assert_eq!(f.0, 30.0);
        assert!(transverse_wind_force(Pascals(500.0), 20.0, 0.0).is_err());
    }

    #[test]
    fn test_longitudinal_share() {
        let t = KiloNewtons(30.0);
        assert_eq!(longitudinal_wind_force(t, GirderSection::Beam).unwrap().0, 7.5);
        assert_eq!(longitudinal_wind_force(t, GirderSection::Truss).unwrap().0, 15.0);
    }

    #[test]
    fn test_vertical() {
        // 500 * 100 * 2 * 0.75 = 75000 N
        assert_eq!(vertical_wind_force(Pascals(500.0), 100.0).unwrap().0, 75.0);
    }

    #[test]
    fn test_live_load() {
        // 500 * (3 * 10) * 2 * 1.2 = 36000 N
        assert_eq!(live_load_wind_force(Pascals(500.0), Meters(10.0)).unwrap().0, 36.0);
        assert!(live_load_wind_force(Pascals(500.0), Meters(0.0)).is_err());
    }

    #[test]
    fn test_compute_all() {
        let geometry = GirderGeometry::new(GirderSection::Beam, 1).with_deck(8.0, 2.0);
        let forces = WindForces::compute(Pascals(500.0), &geometry, 20.0, 100.0).unwrap();
        assert_eq!(forces.drag_coefficient, 1.4);
        assert_eq!(forces.transverse_kn, 28.0);
        assert_eq!(forces.longitudinal_kn, 7.0);
        assert_eq!(forces.vertical_kn, 75.0);
    }
}
