//! # IRC 6:2017 - Loads and Load Combinations
//!
//! Calculators for the loads a road bridge is designed for. Vehicle axle
//! layouts (Cl. 204.1, 204.5, 204.6) are generated by [`crate::vehicles`] and
//! exposed here through [`vehicle_load_model`].
//!
//! | Clause | Function |
//! |---|---|
//! | 203 | [`Material::unit_weight`], [`dead_weight`] |
//! | 204.3, Table 6 | [`design_lanes`] |
//! | 204.4, Table 3 | [`congestion_factor`] |
//! | 206.3 | [`footway_live_load`] |
//! | 208 | [`impact_factor`] |
//! | 209.3.3 to 209.3.6 | [`wind_at_height`], [`drag_coefficient`], wind forces |
//! | 211.2 | [`braking_force`] |
//! | 219 | [`spectral_acceleration`], [`horizontal_seismic_coefficient`] |

pub mod braking;
pub mod congestion;
pub mod dead_load;
pub mod footway;
pub mod impact;
pub mod lanes;
pub mod seismic;
pub mod wind;

pub use braking::{braking_force, braking_force_for_class, uniform_braking_force};
pub use congestion::congestion_factor;
pub use dead_load::{dead_weight, Material};
pub use footway::{footway_live_load, FootwayLoad};
pub use impact::{impact_factor, DeckMaterial};
pub use lanes::design_lanes;
pub use seismic::{horizontal_seismic_coefficient, spectral_acceleration, Importance, SeismicZone, SoilType};
pub use wind::{
    drag_coefficient, live_load_wind_force, longitudinal_wind_force, transverse_wind_force,
    vertical_wind_force, wind_at_height, GirderGeometry, GirderSection, Terrain, WindAtHeight,
    WindForces,
};

use tracing::debug;

use crate::errors::CalcResult;
use crate::vehicles::{VehicleClass, VehicleLoadModel};

/// Borrow a lazily built constant table, surfacing a construction failure
pub(crate) fn loaded<T>(table: &'static CalcResult<T>) -> CalcResult<&'static T> {
    table.as_ref().map_err(Clone::clone)
}

/// Axle layout of `class` (Cl. 204.1, 204.5, 204.6)
pub fn vehicle_load_model(class: VehicleClass) -> CalcResult<VehicleLoadModel> {
    let model = class.load_model()?;
    debug!(clause = %class.source(), ?class, axles = model.axle_count(), "load model built");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Standard;

    #[test]
    fn test_vehicle_load_model() {
        let model = vehicle_load_model(VehicleClass::Class70RWheeled).unwrap();
        assert_eq!(model.axle_count(), 7);
        assert_eq!(VehicleClass::Class70RWheeled.source().standard, Standard::Irc6_2017);
    }
}
