//! # Design-Case Pipeline
//!
//! Evaluates every clause a [`DesignCase`] has inputs for and collects the
//! outcomes into a [`CaseReport`]. Within a case, clauses that feed others run
//! first and hand their values over explicitly:
//!
//! - design lanes (Table 6) -> carriageway width check, braking force
//! - wind at deck height (Table 12) -> drag -> transverse -> longitudinal,
//!   vertical and live-load wind forces
//!
//! A failing clause is recorded as [`ClauseOutcome::Error`] and only the
//! clauses depending on it are affected. Independent cases are evaluated in
//! parallel by [`evaluate_batch`].
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Two-lane overpass",
//!   "parameters": [
//!     { "name": "carriageway_width", "value": 7.5, "unit": "meter" },
//!     { "name": "span", "value": 35.0, "unit": "meter" }
//!   ],
//!   "footpath": "None",
//!   "vehicle_classes": ["ClassA", "Class70RWheeled"]
//! }
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{CalcError, CalcResult};
use crate::layout::{CrossSectionLayout, PROTECTION_TO_USERS};
use crate::reference::ClauseRef;
use crate::settings::EvaluationSettings;
use crate::standards::irc5_2015::{
    self, BarrierGeometry, BarrierRequest, FootpathProvision, KerbOutline, SafetyKerbOutline, WearingCoat,
};
use crate::standards::irc6_2017::{
    self, DeckMaterial, GirderGeometry, Importance, SeismicZone, SoilType, Terrain, WindAtHeight,
};
use crate::standards::{ClauseResult, GeneralFeatures, LoadsAndForces};
use crate::units::{DesignParameters, KiloNewtons, Meters, Pascals, Percent, Unit};
use crate::vehicles::{LaneTrainLoad, VehicleClass, VehicleLoadModel};

/// Parameter names read from [`DesignCase::parameters`]
pub mod params {
    pub const CARRIAGEWAY_WIDTH: &str = "carriageway_width";
    pub const KERB_WIDTH: &str = "kerb_width";
    pub const FOOTPATH_WIDTH: &str = "footpath_width";
    pub const SAFETY_KERB_TOP_WIDTH: &str = "safety_kerb_top_width";
    pub const SKEW_ANGLE: &str = "skew_angle";
    pub const LONGITUDINAL_GRADIENT: &str = "longitudinal_gradient";
    pub const BRIDGE_LENGTH: &str = "bridge_length";
    pub const RAILING_HEIGHT: &str = "railing_height";
    pub const SPAN: &str = "span";
    /// Height of the deck above the lowest ground or bed level
    pub const DECK_HEIGHT: &str = "deck_height";
    pub const BASIC_WIND_SPEED: &str = "basic_wind_speed";
    /// Solid area in elevation `A1` (m²)
    pub const SOLID_AREA: &str = "solid_area_m2";
    /// Plan area `A3` (m²)
    pub const PLAN_AREA: &str = "plan_area_m2";
}

/// Inputs of the seismic coefficient clauses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicInput {
    pub zone: SeismicZone,
    pub soil: SoilType,
    /// Fundamental period (s)
    pub period_s: f64,
    #[serde(default)]
    pub importance: Importance,
    /// Response reduction factor `R`
    pub response_reduction: f64,
}

/// One bridge to evaluate.
///
/// Numeric inputs travel as unit-tagged [`DesignParameters`]; categorical
/// inputs are typed fields. A clause is evaluated when its triggering input
/// is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignCase {
    pub label: String,
    pub parameters: DesignParameters,
    pub footpath: Option<FootpathProvision>,
    pub adjacent_cycle_track: bool,
    pub wearing_coat: Option<WearingCoat>,
    pub barrier: Option<BarrierRequest>,
    pub layout: Option<CrossSectionLayout>,
    pub vehicle_classes: Vec<VehicleClass>,
    /// Overrides the settings' deck material
    pub deck_material: Option<DeckMaterial>,
    /// Overrides the settings' terrain
    pub terrain: Option<Terrain>,
    pub girder: Option<GirderGeometry>,
    pub seismic: Option<SeismicInput>,
}

impl DesignCase {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: &str, value: f64, unit: Unit) -> Self {
        self.parameters = self.parameters.with(name, value, unit);
        self
    }

    pub fn with_footpath(mut self, footpath: FootpathProvision) -> Self {
        self.footpath = Some(footpath);
        self
    }

    pub fn with_layout(mut self, layout: CrossSectionLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_vehicle(mut self, class: VehicleClass) -> Self {
        self.vehicle_classes.push(class);
        self
    }

    pub fn with_girder(mut self, girder: GirderGeometry) -> Self {
        self.girder = Some(girder);
        self
    }

    pub fn with_seismic(mut self, seismic: SeismicInput) -> Self {
        self.seismic = Some(seismic);
        self
    }
}

/// Structured outputs that are neither checks nor single numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Barrier(BarrierGeometry),
    RoadKerb(KerbOutline),
    SafetyKerb(SafetyKerbOutline),
    Layout(CrossSectionLayout),
    LoadModel {
        class: VehicleClass,
        model: VehicleLoadModel,
    },
}

/// Result of one clause, keeping the check/calculator distinction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ClauseOutcome {
    Check(ClauseResult),
    Quantity { value: f64, unit: Unit },
    Geometry(Geometry),
    Error(CalcError),
}

impl ClauseOutcome {
    pub fn quantity(value: f64, unit: Unit) -> Self {
        ClauseOutcome::Quantity { value, unit }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ClauseOutcome::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseEntry {
    pub clause: ClauseRef,
    /// What was evaluated ("design lanes", "impact factor (Class A)")
    pub item: String,
    pub outcome: ClauseOutcome,
}

/// All outcomes for one design case, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub label: String,
    pub entries: Vec<ClauseEntry>,
}

impl CaseReport {
    /// First entry for `item`
    pub fn find(&self, item: &str) -> Option<&ClauseEntry> {
        self.entries.iter().find(|e| e.item == item)
    }

    /// Numeric value of a quantity entry
    pub fn quantity(&self, item: &str) -> Option<f64> {
        match self.find(item).map(|e| &e.outcome) {
            Some(ClauseOutcome::Quantity { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// Checks that apply and are not met
    pub fn failures(&self) -> impl Iterator<Item = &ClauseResult> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            ClauseOutcome::Check(result) if result.fails() => Some(result),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = (&ClauseEntry, &CalcError)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            ClauseOutcome::Error(err) => Some((e, err)),
            _ => None,
        })
    }

    /// No failed checks and no errors
    pub fn is_compliant(&self) -> bool {
        self.failures().next().is_none() && self.errors().next().is_none()
    }
}

/// Collects entries for one case
struct Recorder<'a> {
    label: &'a str,
    entries: Vec<ClauseEntry>,
}

impl<'a> Recorder<'a> {
    fn new(label: &'a str) -> Self {
        Self {
            label,
            entries: Vec::new(),
        }
    }

    fn record(&mut self, clause: ClauseRef, item: impl Into<String>, outcome: CalcResult<ClauseOutcome>) {
        let item = item.into();
        let outcome = outcome.unwrap_or_else(|err| {
            warn!(case = self.label, clause = %clause, item = %item, error = %err, "clause failed");
            ClauseOutcome::Error(err)
        });
        self.entries.push(ClauseEntry { clause, item, outcome });
    }

    fn check(&mut self, clause: ClauseRef, item: &str, result: CalcResult<ClauseResult>) {
        self.record(clause, item, result.map(ClauseOutcome::Check));
    }

    fn quantity(&mut self, clause: ClauseRef, item: impl Into<String>, value: CalcResult<f64>, unit: Unit) {
        self.record(clause, item, value.map(|v| ClauseOutcome::quantity(v, unit)));
    }

    fn geometry(&mut self, clause: ClauseRef, item: impl Into<String>, geometry: CalcResult<Geometry>) {
        self.record(clause, item, geometry.map(ClauseOutcome::Geometry));
    }
}

fn footpath_of(case: &DesignCase) -> CalcResult<FootpathProvision> {
    case.footpath.ok_or_else(|| CalcError::missing_parameter("footpath"))
}

/// Evaluate every clause `case` has inputs for
pub fn evaluate_case(case: &DesignCase, settings: &EvaluationSettings) -> CaseReport {
    debug!(case = %case.label, parameters = case.parameters.len(), "evaluating case");
    let irc5 = settings.general_features();
    let irc6 = settings.loads();
    let mut rec = Recorder::new(&case.label);

    let lanes = general_features(case, irc5, irc6, &mut rec);
    live_loads(case, settings, irc6, lanes.as_ref(), &mut rec);
    wind(case, settings, irc6, &mut rec);
    seismic(case, irc6, &mut rec);

    CaseReport {
        label: case.label.clone(),
        entries: rec.entries,
    }
}

/// IRC 5 checks; returns the design lane count when a carriageway was given
fn general_features(
    case: &DesignCase,
    irc5: &dyn GeneralFeatures,
    irc6: &dyn LoadsAndForces,
    rec: &mut Recorder<'_>,
) -> Option<CalcResult<u32>> {
    let p = &case.parameters;

    rec.quantity(
        irc5_2015::widths::DESIGN_LIFE,
        "design life",
        Ok(f64::from(irc5.design_life())),
        Unit::Dimensionless,
    );

    if p.contains(params::KERB_WIDTH) {
        let result = footpath_of(case)
            .and_then(|footpath| Ok(irc5.safety_kerb_width(p.length(params::KERB_WIDTH)?, footpath)));
        rec.check(irc5_2015::kerbs::SAFETY_KERB_WIDTH, "safety kerb width", result);
    }

    let lanes = p.contains(params::CARRIAGEWAY_WIDTH).then(|| {
        let width = p.length(params::CARRIAGEWAY_WIDTH);
        let lanes = width.clone().and_then(|w| irc6.design_lanes(w));
        rec.quantity(
            irc6_2017::lanes::DESIGN_LANES,
            "design lanes",
            lanes.clone().map(f64::from),
            Unit::Dimensionless,
        );
        let check = width.and_then(|w| irc5.carriageway_width(w, lanes.clone()?));
        rec.check(irc5_2015::widths::CARRIAGEWAY_WIDTH, "carriageway width", check);
        lanes
    });

    if let Some(footpath) = case.footpath {
        let result = p
            .optional_length(params::FOOTPATH_WIDTH)
            .and_then(|width| irc5.footpath_width(footpath, width));
        rec.check(irc5_2015::widths::FOOTPATH_WIDTH, "footpath width", result);
    }

    if p.contains(params::SKEW_ANGLE) {
        let result = p.angle(params::SKEW_ANGLE).and_then(|a| irc5.skew_angle(a));
        rec.check(irc5_2015::alignment::SKEW_ANGLE, "skew angle", result);
    }
    if p.contains(params::LONGITUDINAL_GRADIENT) {
        let result = p
            .ratio(params::LONGITUDINAL_GRADIENT)
            .and_then(|g| irc5.longitudinal_gradient(Percent(g)));
        rec.check(irc5_2015::alignment::LONGITUDINAL_GRADIENT, "longitudinal gradient", result);
    }
    if p.contains(params::BRIDGE_LENGTH) {
        let result = p
            .length(params::BRIDGE_LENGTH)
            .and_then(|l| irc5.bridge_length_single_curve(l));
        rec.check(irc5_2015::alignment::SINGLE_CURVE_LENGTH, "bridge length on single curve", result);
    }

    if let Some(coat) = case.wearing_coat {
        rec.check(irc5_2015::surfacing::WEARING_COAT, "wearing coat", Ok(irc5.wearing_coat(coat)));
    }

    if p.contains(params::RAILING_HEIGHT) {
        let clause = if case.adjacent_cycle_track {
            irc5_2015::railings::RAILING_HEIGHT_CYCLE_TRACK
        } else {
            irc5_2015::railings::RAILING_HEIGHT
        };
        let check = p
            .length(params::RAILING_HEIGHT)
            .and_then(|h| irc5.railing_height(h, case.adjacent_cycle_track));
        rec.quantity(
            clause.clone(),
            "adjusted railing height",
            check.as_ref().map(|c| c.adjusted_height).map_err(Clone::clone),
            Unit::Meter,
        );
        rec.check(clause, "railing height", check.map(|c| c.result));
    }

    rec.geometry(
        irc5_2015::kerbs::ROAD_KERB_OUTLINE,
        "road kerb outline",
        Ok(Geometry::RoadKerb(irc5.road_kerb_outline())),
    );
    if p.contains(params::SAFETY_KERB_TOP_WIDTH) {
        let outline = p
            .length(params::SAFETY_KERB_TOP_WIDTH)
            .and_then(|w| irc5.safety_kerb_outline(w))
            .map(Geometry::SafetyKerb);
        rec.geometry(irc5_2015::kerbs::SAFETY_KERB_OUTLINE, "safety kerb outline", outline);
    }

    if let Some(request) = &case.barrier {
        let geometry = irc5.barrier_geometry(request).map(Geometry::Barrier);
        rec.geometry(irc5_2015::barriers::BARRIER_SHAPES, "crash barrier", geometry);
    }

    if let Some(layout) = &case.layout {
        let protected = irc5.protect_users(layout);
        rec.geometry(PROTECTION_TO_USERS, "cross-section layout", Ok(Geometry::Layout(protected)));
    }

    lanes
}

/// Span-dependent live load clauses
fn live_loads(
    case: &DesignCase,
    settings: &EvaluationSettings,
    irc6: &dyn LoadsAndForces,
    lanes: Option<&CalcResult<u32>>,
    rec: &mut Recorder<'_>,
) {
    let p = &case.parameters;

    for class in &case.vehicle_classes {
        let model = irc6
            .vehicle_load_model(*class)
            .map(|model| Geometry::LoadModel { class: *class, model });
        rec.geometry(class.source(), format!("load model ({})", class), model);
    }

    if !p.contains(params::SPAN) {
        return;
    }
    let span = p.length(params::SPAN);
    let material = case.deck_material.unwrap_or(settings.deck_material);

    rec.quantity(
        irc6_2017::congestion::CONGESTION_FACTOR,
        "congestion factor",
        span.clone().and_then(|s| irc6.congestion_factor(s)),
        Unit::Dimensionless,
    );

    for class in &case.vehicle_classes {
        let impact = span.clone().and_then(|s| irc6.impact_factor(*class, s, material));
        rec.quantity(
            irc6_2017::impact::IMPACT_FACTOR,
            format!("impact factor ({})", class),
            impact,
            Unit::Dimensionless,
        );

        let braking = braking_for_class(irc6, *class, span.clone(), lanes);
        rec.quantity(
            irc6_2017::braking::BRAKING_FORCE,
            format!("braking force ({})", class),
            braking.map(|f| f.0),
            Unit::KiloNewton,
        );
    }

    if case.footpath.is_some_and(|f| f.is_provided()) {
        let load = span.and_then(|s| {
            let width = p.length(params::FOOTPATH_WIDTH)?;
            irc6.footway_live_load(s, width)
        });
        rec.quantity(
            irc6_2017::footway::FOOTWAY_LOAD,
            "footway live load",
            load.map(|l| l.pressure_pa),
            Unit::Pascal,
        );
    }
}

/// Braking force with every design lane loaded by `class`
fn braking_for_class(
    irc6: &dyn LoadsAndForces,
    class: VehicleClass,
    span: CalcResult<Meters>,
    lanes: Option<&CalcResult<u32>>,
) -> CalcResult<KiloNewtons> {
    let span = span?;
    let lane_count = match lanes {
        Some(lanes) => lanes.clone()?,
        None => return Err(CalcError::missing_parameter(params::CARRIAGEWAY_WIDTH)),
    };
    let lane = LaneTrainLoad::on_span(class, span.0)?;
    irc6.uniform_braking_force(lane, lane_count)
}

/// Wind chain: pressure at deck height feeds every force
fn wind(case: &DesignCase, settings: &EvaluationSettings, irc6: &dyn LoadsAndForces, rec: &mut Recorder<'_>) {
    let p = &case.parameters;
    if !p.contains(params::DECK_HEIGHT) {
        return;
    }
    let terrain = case.terrain.unwrap_or(settings.terrain);

    let wind: CalcResult<WindAtHeight> = p.length(params::DECK_HEIGHT).and_then(|height| {
        let basic = p.velocity(params::BASIC_WIND_SPEED)?;
        irc6.wind_at_height(height, terrain, basic)
    });
    let table = irc6_2017::wind::WIND_BY_HEIGHT;
    rec.quantity(table.clone(), "wind speed", wind.clone().map(|w| w.speed_m_s), Unit::MeterPerSecond);
    rec.quantity(table, "wind pressure", wind.clone().map(|w| w.pressure_pa), Unit::Pascal);

    let pressure = wind.map(|w| Pascals(w.pressure_pa));

    if let Some(girder) = &case.girder {
        let drag = irc6.drag_coefficient(girder);
        rec.quantity(
            irc6_2017::wind::drag::DRAG_COEFFICIENT,
            "drag coefficient",
            drag.clone(),
            Unit::Dimensionless,
        );

        let transverse = pressure.clone().and_then(|pz| {
            let area = p.area(params::SOLID_AREA)?;
            irc6.transverse_wind_force(pz, area, drag?)
        });
        rec.quantity(
            irc6_2017::wind::forces::TRANSVERSE_FORCE,
            "transverse wind force",
            transverse.clone().map(|f| f.0),
            Unit::KiloNewton,
        );

        let longitudinal = transverse.and_then(|t| irc6.longitudinal_wind_force(t, girder.section));
        rec.quantity(
            irc6_2017::wind::forces::LONGITUDINAL_FORCE,
            "longitudinal wind force",
            longitudinal.map(|f| f.0),
            Unit::KiloNewton,
        );

        let vertical = pressure.clone().and_then(|pz| {
            let area = p.area(params::PLAN_AREA)?;
            irc6.vertical_wind_force(pz, area)
        });
        rec.quantity(
            irc6_2017::wind::forces::VERTICAL_FORCE,
            "vertical wind force",
            vertical.map(|f| f.0),
            Unit::KiloNewton,
        );
    }

    if p.contains(params::SPAN) && !case.vehicle_classes.is_empty() {
        let force = pressure.and_then(|pz| irc6.live_load_wind_force(pz, p.length(params::SPAN)?));
        rec.quantity(
            irc6_2017::wind::forces::LIVE_LOAD_FORCE,
            "wind on live load",
            force.map(|f| f.0),
            Unit::KiloNewton,
        );
    }
}

fn seismic(case: &DesignCase, irc6: &dyn LoadsAndForces, rec: &mut Recorder<'_>) {
    let Some(input) = case.seismic else {
        return;
    };
    rec.quantity(
        irc6_2017::seismic::ZONE_FACTOR,
        "zone factor",
        Ok(irc6.zone_factor(input.zone)),
        Unit::Dimensionless,
    );
    rec.quantity(
        irc6_2017::seismic::SPECTRAL_ACCELERATION,
        "spectral acceleration coefficient",
        irc6.spectral_acceleration(input.soil, input.period_s),
        Unit::Dimensionless,
    );
    rec.quantity(
        irc6_2017::seismic::SPECTRAL_ACCELERATION,
        "horizontal seismic coefficient",
        irc6.horizontal_seismic_coefficient(
            input.zone,
            input.soil,
            input.period_s,
            input.importance,
            input.response_reduction,
        ),
        Unit::Dimensionless,
    );
}

/// Evaluate independent cases, in parallel when the settings allow it.
///
/// Reports come back in input order.
pub fn evaluate_batch(cases: &[DesignCase], settings: &EvaluationSettings) -> Vec<CaseReport> {
    info!(cases = cases.len(), parallel = settings.parallel, "evaluating batch");
    let reports: Vec<CaseReport> = if settings.parallel {
        cases.par_iter().map(|case| evaluate_case(case, settings)).collect()
    } else {
        cases.iter().map(|case| evaluate_case(case, settings)).collect()
    };
    let non_compliant = reports.iter().filter(|r| !r.is_compliant()).count();
    info!(cases = reports.len(), non_compliant, "batch complete");
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Component::*;

    fn two_lane_case() -> DesignCase {
        DesignCase::new("two lane")
            .with_parameter(params::CARRIAGEWAY_WIDTH, 7500.0, Unit::Millimeter)
            .with_parameter(params::SPAN, 35.0, Unit::Meter)
            .with_footpath(FootpathProvision::None)
            .with_vehicle(VehicleClass::ClassA)
    }

    #[test]
    fn test_lanes_feed_carriageway_check() {
        let report = evaluate_case(&two_lane_case(), &EvaluationSettings::default());
        assert_eq!(report.quantity("design lanes"), Some(2.0));
        match &report.find("carriageway width").unwrap().outcome {
            ClauseOutcome::Check(result) => {
                assert!(result.is_compliant);
                assert_eq!(result.required, Some(7.5));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_span_clauses() {
        let report = evaluate_case(&two_lane_case(), &EvaluationSettings::default());
        assert_eq!(report.quantity("congestion factor"), Some(1.225));
        // 4.5 / (6 + 35) on the default concrete deck
        assert_eq!(report.quantity("impact factor (Class A)"), Some(0.11));
        assert!(report.quantity("braking force (Class A)").unwrap() > 0.0);
        assert!(report.find("footway live load").is_none());
    }

    #[test]
    fn test_braking_needs_carriageway() {
        let case = DesignCase::new("no width")
            .with_parameter(params::SPAN, 20.0, Unit::Meter)
            .with_vehicle(VehicleClass::ClassA);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        match &report.find("braking force (Class A)").unwrap().outcome {
            ClauseOutcome::Error(err) => assert_eq!(err, &CalcError::missing_parameter("carriageway_width")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!report.is_compliant());
    }

    #[test]
    fn test_failed_clause_does_not_stop_case() {
        let case = DesignCase::new("short span")
            .with_parameter(params::SPAN, 8.0, Unit::Meter)
            .with_parameter(params::SKEW_ANGLE, 10.0, Unit::Degree);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert!(report.find("congestion factor").unwrap().outcome.is_error());
        assert!(matches!(
            report.find("skew angle").unwrap().outcome,
            ClauseOutcome::Check(_)
        ));
    }

    #[test]
    fn test_missing_footpath_width_is_error() {
        let case = DesignCase::new("footpath").with_footpath(FootpathProvision::BothSides);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_layout_protected() {
        let case = DesignCase::new("layout").with_layout(CrossSectionLayout::new(vec![
            Railing,
            Footpath,
            Carriageway,
            Footpath,
            Railing,
        ]));
        let report = evaluate_case(&case, &EvaluationSettings::default());
        match &report.find("cross-section layout").unwrap().outcome {
            ClauseOutcome::Geometry(Geometry::Layout(layout)) => assert_eq!(layout.count(CrashBarrier), 2),
            other => panic!("unexpected {:?}", other),
        }
        // The case's own layout is a template and stays untouched
        assert_eq!(case.layout.unwrap().count(CrashBarrier), 0);
    }

    #[test]
    fn test_wind_chain() {
        let case = DesignCase::new("wind")
            .with_parameter(params::DECK_HEIGHT, 10.0, Unit::Meter)
            .with_parameter(params::BASIC_WIND_SPEED, 33.0, Unit::MeterPerSecond)
            .with_parameter(params::SOLID_AREA, 20.0, Unit::SquareMeter)
            .with_parameter(params::PLAN_AREA, 100.0, Unit::SquareMeter)
            .with_girder(GirderGeometry::new(irc6_2017::GirderSection::Beam, 1).with_deck(8.0, 2.0));
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert_eq!(report.quantity("wind pressure"), Some(569.2));
        assert_eq!(report.quantity("drag coefficient"), Some(1.4));
        // 569.2 * 20 * 2 * 1.4 / 1000
        assert_eq!(report.quantity("transverse wind force"), Some(31.875));
        assert_eq!(report.quantity("longitudinal wind force"), Some(7.969));
        assert!(report.errors().next().is_none());
    }

    #[test]
    fn test_wind_area_needs_area_unit() {
        let case = DesignCase::new("wind")
            .with_parameter(params::DECK_HEIGHT, 10.0, Unit::Meter)
            .with_parameter(params::BASIC_WIND_SPEED, 33.0, Unit::MeterPerSecond)
            .with_parameter(params::SOLID_AREA, 20.0, Unit::Dimensionless)
            .with_girder(GirderGeometry::new(irc6_2017::GirderSection::Beam, 1).with_deck(8.0, 2.0));
        let report = evaluate_case(&case, &EvaluationSettings::default());
        match &report.find("transverse wind force").unwrap().outcome {
            ClauseOutcome::Error(err) => assert_eq!(err.error_code(), "INVALID_INPUT"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_huge_carriageway_is_reported() {
        let case = DesignCase::new("wide")
            .with_parameter(params::CARRIAGEWAY_WIDTH, 1e10, Unit::Meter)
            .with_parameter(params::SPAN, 1e9, Unit::Meter)
            .with_vehicle(VehicleClass::ClassA);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert!(report.find("design lanes").unwrap().outcome.is_error());
        assert!(report.find("braking force (Class A)").unwrap().outcome.is_error());

        let case = DesignCase::new("wide")
            .with_parameter(params::CARRIAGEWAY_WIDTH, 3.5e6, Unit::Meter)
            .with_parameter(params::SPAN, 1e9, Unit::Meter)
            .with_vehicle(VehicleClass::ClassA);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        let braking = report.quantity("braking force (Class A)").unwrap();
        assert!(braking.is_finite() && braking > 0.0);
    }

    #[test]
    fn test_seismic_coefficients() {
        let case = DesignCase::new("seismic").with_seismic(SeismicInput {
            zone: SeismicZone::III,
            soil: SoilType::Rock,
            period_s: 1.0,
            importance: Importance::Normal,
            response_reduction: 3.0,
        });
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert_eq!(report.quantity("zone factor"), Some(0.16));
        assert_eq!(report.quantity("spectral acceleration coefficient"), Some(1.0));
    }

    #[test]
    fn test_wind_without_basic_speed() {
        let case = DesignCase::new("wind").with_parameter(params::DECK_HEIGHT, 10.0, Unit::Meter);
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert!(report.find("wind pressure").unwrap().outcome.is_error());
    }

    #[test]
    fn test_batch_preserves_order() {
        let cases: Vec<DesignCase> = (0..16)
            .map(|i| {
                DesignCase::new(format!("case {}", i)).with_parameter(
                    params::CARRIAGEWAY_WIDTH,
                    4.0 + i as f64,
                    Unit::Meter,
                )
            })
            .collect();
        let parallel = evaluate_batch(&cases, &EvaluationSettings::default());
        let sequential = evaluate_batch(&cases, &EvaluationSettings::default().sequential());
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[3].label, "case 3");
    }

    #[test]
    fn test_case_json() {
        let json = r#"{
            "label": "json case",
            "parameters": [{ "name": "kerb_width", "value": 600.0, "unit": "millimeter" }],
            "footpath": "None"
        }"#;
        let case: DesignCase = serde_json::from_str(json).unwrap();
        let report = evaluate_case(&case, &EvaluationSettings::default());
        assert_eq!(report.failures().count(), 1);
        let out = serde_json::to_value(&report).unwrap();
        assert_eq!(out["entries"][1]["outcome"]["kind"], "Check");
    }
}
