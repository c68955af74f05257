//! # Clause Evaluators
//!
//! Each standard edition is its own module of pure functions. The capability
//! traits below let a caller pick an edition explicitly and evaluate through
//! it without naming the module:
//!
//! - [`GeneralFeatures`] - general features of design, implemented by [`Irc5_2015`]
//! - [`LoadsAndForces`] - loads and forces, implemented by [`Irc6_2017`]
//!
//! Editions never shadow each other; a new edition is a new implementor.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::{GeneralFeaturesEdition, LoadsEdition};
//! use bridge_core::units::Meters;
//!
//! let irc5 = GeneralFeaturesEdition::Irc5_2015.resolve();
//! let irc6 = LoadsEdition::Irc6_2017.resolve();
//!
//! let lanes = irc6.design_lanes(Meters(7.5)).unwrap();
//! let check = irc5.carriageway_width(Meters(7.5), lanes).unwrap();
//! assert!(check.is_compliant);
//! ```

pub mod irc5_2015;
pub mod irc6_2017;
pub mod result;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::layout::CrossSectionLayout;
use crate::reference::Standard;
use crate::units::{Degrees, KiloNewtons, Meters, Pascals, Percent};
use crate::vehicles::{LaneTrainLoad, VehicleClass, VehicleLoadModel};

pub use result::ClauseResult;

use irc5_2015::{
    BarrierGeometry, BarrierRequest, FootpathProvision, KerbOutline, RailingHeightCheck, SafetyKerbOutline,
    WearingCoat,
};
use irc6_2017::{
    DeckMaterial, FootwayLoad, GirderGeometry, GirderSection, Importance, Material, SeismicZone, SoilType,
    Terrain, WindAtHeight,
};

/// General features of design (IRC 5)
pub trait GeneralFeatures: Send + Sync {
    fn edition(&self) -> Standard;

    fn safety_kerb_width(&self, kerb_width: Meters, footpath: FootpathProvision) -> ClauseResult;
    fn design_life(&self) -> u32;
    fn carriageway_width(&self, width: Meters, lanes: u32) -> CalcResult<ClauseResult>;
    fn footpath_width(&self, footpath: FootpathProvision, width: Option<Meters>) -> CalcResult<ClauseResult>;
    /// Protection to users: crash barriers between carriageway and footways
    fn protect_users(&self, layout: &CrossSectionLayout) -> CrossSectionLayout;
    fn skew_angle(&self, angle: Degrees) -> CalcResult<ClauseResult>;
    fn longitudinal_gradient(&self, gradient: Percent) -> CalcResult<ClauseResult>;
    fn bridge_length_single_curve(&self, length: Meters) -> CalcResult<ClauseResult>;
    fn wearing_coat(&self, coat: WearingCoat) -> ClauseResult;
    fn barrier_geometry(&self, request: &BarrierRequest) -> CalcResult<BarrierGeometry>;
    fn railing_height(&self, height: Meters, adjacent_cycle_track: bool) -> CalcResult<RailingHeightCheck>;
    fn road_kerb_outline(&self) -> KerbOutline;
    fn safety_kerb_outline(&self, top_width: Meters) -> CalcResult<SafetyKerbOutline>;
}

/// Loads and forces (IRC 6)
pub trait LoadsAndForces: Send + Sync {
    fn edition(&self) -> Standard;

    fn vehicle_load_model(&self, class: VehicleClass) -> CalcResult<VehicleLoadModel>;
    fn design_lanes(&self, carriageway_width: Meters) -> CalcResult<u32>;
    fn congestion_factor(&self, span: Meters) -> CalcResult<f64>;
    fn footway_live_load(&self, span: Meters, footway_width: Meters) -> CalcResult<FootwayLoad>;
    fn impact_factor(&self, class: VehicleClass, span: Meters, material: DeckMaterial) -> CalcResult<f64>;
    fn wind_at_height(&self, height: Meters, terrain: Terrain, basic_wind_speed_m_s: f64) -> CalcResult<WindAtHeight>;
    fn drag_coefficient(&self, geometry: &GirderGeometry) -> CalcResult<f64>;
    fn transverse_wind_force(&self, pressure: Pascals, solid_area_m2: f64, drag: f64) -> CalcResult<KiloNewtons>;
    fn longitudinal_wind_force(&self, transverse: KiloNewtons, section: GirderSection) -> CalcResult<KiloNewtons>;
    fn vertical_wind_force(&self, pressure: Pascals, plan_area_m2: f64) -> CalcResult<KiloNewtons>;
    fn live_load_wind_force(&self, pressure: Pascals, loaded_length: Meters) -> CalcResult<KiloNewtons>;
    fn braking_force(&self, lanes: &[LaneTrainLoad]) -> CalcResult<KiloNewtons>;
    /// Braking force with `lane_count` identical lanes
    fn uniform_braking_force(&self, lane: LaneTrainLoad, lane_count: u32) -> CalcResult<KiloNewtons>;
    /// Unit weight (kN/m³)
    fn unit_weight(&self, material: Material) -> f64;
    fn dead_weight(&self, material: Material, volume_m3: f64) -> CalcResult<f64>;
    fn zone_factor(&self, zone: SeismicZone) -> f64;
    fn spectral_acceleration(&self, soil: SoilType, period_s: f64) -> CalcResult<f64>;
    fn horizontal_seismic_coefficient(
        &self,
        zone: SeismicZone,
        soil: SoilType,
        period_s: f64,
        importance: Importance,
        response_reduction: f64,
    ) -> CalcResult<f64>;
}

/// IRC 5:2015
#[derive(Debug, Clone, Copy, Default)]
pub struct Irc5_2015;

impl GeneralFeatures for Irc5_2015 {
    fn edition(&self) -> Standard {
        Standard::Irc5_2015
    }

    fn safety_kerb_width(&self, kerb_width: Meters, footpath: FootpathProvision) -> ClauseResult {
        irc5_2015::safety_kerb_width(kerb_width, footpath)
    }

    fn design_life(&self) -> u32 {
        irc5_2015::design_life()
    }

    fn carriageway_width(&self, width: Meters, lanes: u32) -> CalcResult<ClauseResult> {
        irc5_2015::carriageway_width(width, lanes)
    }

    fn footpath_width(&self, footpath: FootpathProvision, width: Option<Meters>) -> CalcResult<ClauseResult> {
        irc5_2015::footpath_width(footpath, width)
    }

    fn protect_users(&self, layout: &CrossSectionLayout) -> CrossSectionLayout {
        layout.with_protection()
    }

    fn skew_angle(&self, angle: Degrees) -> CalcResult<ClauseResult> {
        irc5_2015::skew_angle(angle)
    }

    fn longitudinal_gradient(&self, gradient: Percent) -> CalcResult<ClauseResult> {
        irc5_2015::longitudinal_gradient(gradient)
    }

    fn bridge_length_single_curve(&self, length: Meters) -> CalcResult<ClauseResult> {
        irc5_2015::bridge_length_single_curve(length)
    }

    fn wearing_coat(&self, coat: WearingCoat) -> ClauseResult {
        irc5_2015::wearing_coat(coat)
    }

    fn barrier_geometry(&self, request: &BarrierRequest) -> CalcResult<BarrierGeometry> {
        irc5_2015::barrier_geometry(request)
    }

    fn railing_height(&self, height: Meters, adjacent_cycle_track: bool) -> CalcResult<RailingHeightCheck> {
        irc5_2015::railing_height(height, adjacent_cycle_track)
    }

    fn road_kerb_outline(&self) -> KerbOutline {
        irc5_2015::road_kerb_outline()
    }

    fn safety_kerb_outline(&self, top_width: Meters) -> CalcResult<SafetyKerbOutline> {
        irc5_2015::safety_kerb_outline(top_width)
    }
}

/// IRC 6:2017
#[derive(Debug, Clone, Copy, Default)]
pub struct Irc6_2017;

impl LoadsAndForces for Irc6_2017 {
    fn edition(&self) -> Standard {
        Standard::Irc6_2017
    }

    fn vehicle_load_model(&self, class: VehicleClass) -> CalcResult<VehicleLoadModel> {
        irc6_2017::vehicle_load_model(class)
    }

    fn design_lanes(&self, carriageway_width: Meters) -> CalcResult<u32> {
        irc6_2017::design_lanes(carriageway_width)
    }

    fn congestion_factor(&self, span: Meters) -> CalcResult<f64> {
        irc6_2017::congestion_factor(span)
    }

    fn footway_live_load(&self, span: Meters, footway_width: Meters) -> CalcResult<FootwayLoad> {
        irc6_2017::footway_live_load(span, footway_width)
    }

    fn impact_factor(&self, class: VehicleClass, span: Meters, material: DeckMaterial) -> CalcResult<f64> {
        irc6_2017::impact_factor(class, span, material)
    }

    fn wind_at_height(&self, height: Meters, terrain: Terrain, basic_wind_speed_m_s: f64) -> CalcResult<WindAtHeight> {
        irc6_2017::wind_at_height(height, terrain, basic_wind_speed_m_s)
    }

    fn drag_coefficient(&self, geometry: &GirderGeometry) -> CalcResult<f64> {
        irc6_2017::drag_coefficient(geometry)
    }

    fn transverse_wind_force(&self, pressure: Pascals, solid_area_m2: f64, drag: f64) -> CalcResult<KiloNewtons> {
        irc6_2017::transverse_wind_force(pressure, solid_area_m2, drag)
    }

    fn longitudinal_wind_force(&self, transverse: KiloNewtons, section: GirderSection) -> CalcResult<KiloNewtons> {
        irc6_2017::longitudinal_wind_force(transverse, section)
    }

    fn vertical_wind_force(&self, pressure: Pascals, plan_area_m2: f64) -> CalcResult<KiloNewtons> {
        irc6_2017::vertical_wind_force(pressure, plan_area_m2)
    }

    fn live_load_wind_force(&self, pressure: Pascals, loaded_length: Meters) -> CalcResult<KiloNewtons> {
        irc6_2017::live_load_wind_force(pressure, loaded_length)
    }

    fn braking_force(&self, lanes: &[LaneTrainLoad]) -> CalcResult<KiloNewtons> {
        irc6_2017::braking_force(lanes)
    }

    fn uniform_braking_force(&self, lane: LaneTrainLoad, lane_count: u32) -> CalcResult<KiloNewtons> {
        irc6_2017::uniform_braking_force(lane, lane_count)
    }

    fn unit_weight(&self, material: Material) -> f64 {
        material.unit_weight()
    }

    fn dead_weight(&self, material: Material, volume_m3: f64) -> CalcResult<f64> {
        irc6_2017::dead_weight(material, volume_m3)
    }

    fn zone_factor(&self, zone: SeismicZone) -> f64 {
        zone.zone_factor()
    }

    fn spectral_acceleration(&self, soil: SoilType, period_s: f64) -> CalcResult<f64> {
        irc6_2017::spectral_acceleration(soil, period_s)
    }

    fn horizontal_seismic_coefficient(
        &self,
        zone: SeismicZone,
        soil: SoilType,
        period_s: f64,
        importance: Importance,
        response_reduction: f64,
    ) -> CalcResult<f64> {
        irc6_2017::horizontal_seismic_coefficient(zone, soil, period_s, importance, response_reduction)
    }
}

/// Selectable editions of the general-features standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GeneralFeaturesEdition {
    #[default]
    #[serde(rename = "IRC5:2015")]
    Irc5_2015,
}

impl GeneralFeaturesEdition {
    pub fn resolve(&self) -> &'static dyn GeneralFeatures {
        match self {
            GeneralFeaturesEdition::Irc5_2015 => &Irc5_2015,
        }
    }
}

/// Selectable editions of the loads standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadsEdition {
    #[default]
    #[serde(rename = "IRC6:2017")]
    Irc6_2017,
}

impl LoadsEdition {
    pub fn resolve(&self) -> &'static dyn LoadsAndForces {
        match self {
            LoadsEdition::Irc6_2017 => &Irc6_2017,
        }
    }
}
