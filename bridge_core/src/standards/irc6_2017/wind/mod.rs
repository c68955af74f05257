//! # Wind Load (Cl. 209)
//!
//! - [`wind_at_height`] - hourly mean wind speed and pressure by height and
//!   terrain (Table 12), rescaled from 33 m/s to the site basic wind speed
//! - [`drag_coefficient`] - `C_D` by girder section and count
//! - [`transverse_wind_force`], [`longitudinal_wind_force`],
//!   [`vertical_wind_force`], [`live_load_wind_force`] - forces in kN
//!
//! Table 12 is tabulated for a basic wind speed of 33 m/s. Speeds scale
//! linearly and pressures with the square of `V_b / 33`. Heights outside the
//! table take the nearest row.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc6_2017::{wind_at_height, Terrain};
//! use bridge_core::units::Meters;
//!
//! let wind = wind_at_height(Meters(10.0), Terrain::Plain, 33.0).unwrap();
//! assert_eq!(wind.speed_m_s, 30.8);
//! assert_eq!(wind.pressure_pa, 569.2);
//! ```

pub mod drag;
pub mod forces;

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::irc6_2017::REFERENCE_WIND_SPEED;
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, BoundaryPolicy, InterpolationTable, PowerLawScaling, DEFAULT_PRECISION};
use crate::units::Meters;

use super::loaded;

pub use drag::{drag_coefficient, GirderGeometry, GirderSection};
pub use forces::{
    live_load_wind_force, longitudinal_wind_force, transverse_wind_force, vertical_wind_force, WindForces,
};

pub const WIND_BY_HEIGHT: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "Table 12");

/// Speed scales linearly, pressure quadratically with the basic wind speed
pub const BASIC_WIND_SPEED_SCALING: PowerLawScaling<2> = PowerLawScaling::new(REFERENCE_WIND_SPEED, [1.0, 2.0]);

/// Terrain around the bridge site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// Plain terrain
    #[default]
    Plain,
    /// Terrain with obstructions
    Obstructed,
}

impl Terrain {
    pub const ALL: [Terrain; 2] = [Terrain::Plain, Terrain::Obstructed];

    pub fn display_name(&self) -> &'static str {
        match self {
            Terrain::Plain => "Plain Terrain",
            Terrain::Obstructed => "Terrain with Obstructions",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// Height (m) -> [speed (m/s), pressure (Pa)] at 33 m/s basic wind speed
static TABLE_12_PLAIN: Lazy<CalcResult<InterpolationTable<2>>> = Lazy::new(|| {
    InterpolationTable::new(
        WIND_BY_HEIGHT,
        [
            (5.0, [27.8, 463.7]),
            (10.0, [30.8, 569.2]),
            (15.0, [32.6, 637.5]),
            (20.0, [33.9, 691.2]),
            (30.0, [35.7, 765.5]),
            (50.0, [37.8, 856.7]),
            (60.0, [38.5, 888.3]),
            (70.0, [39.1, 917.1]),
            (80.0, [39.7, 945.8]),
            (90.0, [40.2, 969.3]),
            (100.0, [40.6, 988.5]),
        ],
        BoundaryPolicy::Clamp,
    )
});

static TABLE_12_OBSTRUCTED: Lazy<CalcResult<InterpolationTable<2>>> = Lazy::new(|| {
    InterpolationTable::new(
        WIND_BY_HEIGHT,
        [
            (5.0, [17.8, 190.5]),
            (10.0, [19.6, 230.5]),
            (15.0, [21.0, 265.3]),
            (20.0, [22.8, 312.2]),
            (30.0, [24.9, 372.1]),
            (50.0, [27.9, 467.1]),
            (60.0, [29.1, 508.2]),
            (70.0, [30.2, 546.5]),
            (80.0, [31.1, 580.5]),
            (90.0, [32.0, 613.2]),
            (100.0, [32.7, 641.4]),
        ],
        BoundaryPolicy::Clamp,
    )
});

/// Wind table for `terrain`
pub fn wind_table(terrain: Terrain) -> CalcResult<&'static InterpolationTable<2>> {
    match terrain {
        Terrain::Plain => loaded(&TABLE_12_PLAIN),
        Terrain::Obstructed => loaded(&TABLE_12_OBSTRUCTED),
    }
}

/// Hourly mean wind at one height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindAtHeight {
    pub height_m: f64,
    pub terrain: Terrain,
    pub basic_wind_speed_m_s: f64,
    /// Hourly mean wind speed `V_z` (m/s)
    pub speed_m_s: f64,
    /// Hourly mean wind pressure `P_z` (Pa)
    pub pressure_pa: f64,
}

/// Wind speed and pressure at `height` above the lowest ground or bed level
/// for a site with basic wind speed `basic_wind_speed_m_s`.
pub fn wind_at_height(height: Meters, terrain: Terrain, basic_wind_speed_m_s: f64) -> CalcResult<WindAtHeight> {
    let height_m = ensure_non_negative("height", height.0)?;
    let basic = ensure_positive("basic_wind_speed", basic_wind_speed_m_s)?;

    let [speed, pressure] = wind_table(terrain)?.lookup_scaled(height_m, &BASIC_WIND_SPEED_SCALING, basic)?;
    let wind = WindAtHeight {
        height_m,
        terrain,
        basic_wind_speed_m_s: basic,
        speed_m_s: round_to(speed, DEFAULT_PRECISION),
        pressure_pa: round_to(pressure, DEFAULT_PRECISION),
    };
    debug!(
        clause = %WIND_BY_HEIGHT,
        height_m,
        %terrain,
        speed = wind.speed_m_s,
        pressure = wind.pressure_pa,
        "evaluated"
    );
    Ok(wind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_speed_returns_table_rows() {
        let wind = wind_at_height(Meters(100.0), Terrain::Obstructed, 33.0).unwrap();
        assert_eq!(wind.speed_m_s, 32.7);
        assert_eq!(wind.pressure_pa, 641.4);
    }

    #[test]
    fn test_interpolated_height() {
        // Halfway between 10 m and 15 m
        let wind = wind_at_height(Meters(12.5), Terrain::Plain, 33.0).unwrap();
        assert_eq!(wind.speed_m_s, 31.7);
        assert_eq!(wind.pressure_pa, 603.35);
    }

    #[test]
    fn test_heights_outside_table_clamp() {
        let low = wind_at_height(Meters(2.0), Terrain::Plain, 33.0).unwrap();
        assert_eq!(low.speed_m_s, 27.8);
        let high = wind_at_height(Meters(150.0), Terrain::Plain, 33.0).unwrap();
        assert_eq!(high.pressure_pa, 988.5);
    }

    #[test]
    fn test_scaling_to_basic_wind_speed() {
        // 44/33 = 4/3: speed x 4/3, pressure x 16/9
        let wind = wind_at_height(Meters(10.0), Terrain::Plain, 44.0).unwrap();
        assert_eq!(wind.speed_m_s, 41.067);
        assert_eq!(wind.pressure_pa, 1011.911);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(wind_at_height(Meters(-1.0), Terrain::Plain, 33.0).is_err());
        assert!(wind_at_height(Meters(10.0), Terrain::Plain, 0.0).is_err());
    }
}
