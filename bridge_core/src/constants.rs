//! # Standard Constants
//!
//! Named minima, limits and fixed coefficients quoted by the clauses, in
//! canonical units. Constants are grouped by the edition that defines them so
//! IRC 5 and IRC 6 values are never mixed.

/// IRC 5:2015 - Standard specifications and code of practice for road bridges,
/// Section I: General features of design.
pub mod irc5_2015 {
    /// Cl. 101.41 - minimum safety kerb width when no footpath is provided (m)
    pub const SAFETY_KERB_MIN_WIDTH: f64 = 0.75;

    /// Cl. 104.1.3.4 - assumed design life of the bridge (years)
    pub const DESIGN_LIFE_YEARS: u32 = 100;

    /// Cl. 104.3.1 - carriageway width for a single-lane bridge (m)
    pub const SINGLE_LANE_WIDTH: f64 = 4.25;
    /// Cl. 104.3.1 - carriageway width for a two-lane bridge (m)
    pub const TWO_LANE_WIDTH: f64 = 7.5;
    /// Cl. 104.3.1 - additional width per lane beyond two (m)
    pub const ADDITIONAL_LANE_WIDTH: f64 = 3.5;

    /// Cl. 104.3.6 - minimum clear width of footpath (m)
    pub const FOOTPATH_MIN_CLEAR_WIDTH: f64 = 1.5;

    /// Cl. 105.3.3 - skew angle beyond which special investigation is needed (degrees)
    pub const SKEW_ANGLE_LIMIT: f64 = 30.0;

    /// Cl. 105.3.6 - minimum longitudinal gradient for drainage (%)
    pub const MIN_LONGITUDINAL_GRADIENT: f64 = 0.3;

    /// Cl. 105.3.10 - maximum bridge length on a single curve (m)
    pub const MAX_BRIDGE_LENGTH_SINGLE_CURVE: f64 = 30.0;

    /// Cl. 109.7.2.3 - minimum railing height above roadway or footway kerb (m)
    pub const RAILING_MIN_HEIGHT: f64 = 1.1;
    /// Cl. 109.7.2.4 - minimum railing height adjacent to a cycle track (m)
    pub const RAILING_MIN_HEIGHT_CYCLE_TRACK: f64 = 1.4;
}

/// IRC 6:2017 - Standard specifications and code of practice for road bridges,
/// Section II: Loads and load combinations.
pub mod irc6_2017 {
    /// Cl. 209.3.3 - reference basic wind speed of Table 12 (m/s)
    pub const REFERENCE_WIND_SPEED: f64 = 33.0;

    /// Cl. 209.3.3 - gust factor for spans up to 150 m
    pub const GUST_FACTOR: f64 = 2.0;

    /// Cl. 209.3.3 - drag coefficient on multiple girders relative to a single girder
    pub const MULTIPLE_GIRDER_DRAG_MULTIPLIER: f64 = 1.5;

    /// Cl. 209.3.3 - limit of clear girder spacing to depth for multiple girders
    pub const MAX_GIRDER_SPACING_RATIO: f64 = 7.0;

    /// Cl. 209.3.4 - longitudinal share of transverse wind force, beam/box/plate girders
    pub const LONGITUDINAL_SHARE_GIRDER: f64 = 0.25;
    /// Cl. 209.3.4 - longitudinal share of transverse wind force, trusses
    pub const LONGITUDINAL_SHARE_TRUSS: f64 = 0.5;

    /// Cl. 209.3.5 - lift coefficient for vertical wind force
    pub const LIFT_COEFFICIENT: f64 = 0.75;

    /// Cl. 209.3.6 - drag coefficient on moving live load
    pub const LIVE_LOAD_DRAG_COEFFICIENT: f64 = 1.2;
    /// Cl. 209.3.6 - height of live load frontal area (m)
    pub const LIVE_LOAD_EXPOSED_HEIGHT: f64 = 3.0;

    /// Cl. 211.2 - braking share of the first train on the first two lanes
    pub const BRAKING_FIRST_TRAIN: f64 = 0.20;
    /// Cl. 211.2 - braking share of succeeding trains on the first two lanes
    pub const BRAKING_SUCCEEDING_TRAINS: f64 = 0.10;
    /// Cl. 211.2 - braking share of loads on lanes in excess of two
    pub const BRAKING_ADDITIONAL_LANES: f64 = 0.05;

    /// Cl. 206.3 - footway live load for spans up to 7.5 m (kg/m²)
    pub const FOOTWAY_BASE_INTENSITY_KG_M2: f64 = 400.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_widths_consistent() {
        // Three lanes: 7.5 + 3.5 = 11.0 m
        let three = irc5_2015::TWO_LANE_WIDTH + irc5_2015::ADDITIONAL_LANE_WIDTH;
        assert_eq!(three, 11.0);
        assert!(irc5_2015::SINGLE_LANE_WIDTH < irc5_2015::TWO_LANE_WIDTH);
    }

    #[test]
    fn test_braking_shares() {
        assert!(irc6_2017::BRAKING_FIRST_TRAIN > irc6_2017::BRAKING_SUCCEEDING_TRAINS);
        assert!(irc6_2017::BRAKING_SUCCEEDING_TRAINS > irc6_2017::BRAKING_ADDITIONAL_LANES);
    }
}
