//! # Crash Barrier and Median Shapes (Cl. 109.6.3)
//!
//! Standard outlines selected by barrier type, footpath provision, railing
//! type and barrier sub-type. All dimensions are returned in metres (areas in
//! m²), converted from the millimetre figures of the standard.
//!
//! | Configuration | Outline |
//! |---|---|
//! | Rigid concrete, footpath provided | 900 mm barrier with RCC or steel railing |
//! | Rigid concrete, no footpath | IRC-5R (1100 mm) or high containment (1550 mm) |
//! | Semi-rigid metallic | W-beam on ISMC 150 posts over an RCC kerb |
//! | Medians | raised kerb, RCC barrier or metallic barrier in a 1200 mm median |
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc5_2015::{
//!     barrier_geometry, BarrierGeometry, BarrierRequest, BarrierSubType, BarrierType,
//!     FootpathProvision, RigidBarrierType,
//! };
//!
//! let request = BarrierRequest::new(BarrierType::RigidConcrete, FootpathProvision::None)
//!     .with_sub_type(BarrierSubType::Rigid(RigidBarrierType::HighContainment));
//! match barrier_geometry(&request).unwrap() {
//!     BarrierGeometry::Rigid { profile, .. } => assert_eq!(profile.height, 1.55),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::units::{Meters, Millimeters};

use super::FootpathProvision;

pub const BARRIER_SHAPES: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.6.3");

fn mm(value: f64) -> f64 {
    Meters::from(Millimeters(value)).0
}

/// Barrier or median family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarrierType {
    RigidConcrete,
    SemiRigidMetallic,
    RaisedKerbMedian,
    RccBarrierMedian,
    MetallicBarrierMedian,
}

impl BarrierType {
    pub const ALL: [BarrierType; 5] = [
        BarrierType::RigidConcrete,
        BarrierType::SemiRigidMetallic,
        BarrierType::RaisedKerbMedian,
        BarrierType::RccBarrierMedian,
        BarrierType::MetallicBarrierMedian,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BarrierType::RigidConcrete => "Rigid (Concrete)",
            BarrierType::SemiRigidMetallic => "Semi-Rigid (Metallic)",
            BarrierType::RaisedKerbMedian => "Median - Raised Kerb",
            BarrierType::RccBarrierMedian => "Median - RCC Crash Barrier",
            BarrierType::MetallicBarrierMedian => "Median - Metallic Crash Barrier",
        }
    }

    /// Figure of IRC 5:2015 showing the outline
    pub fn figure(&self) -> &'static str {
        match self {
            BarrierType::RigidConcrete => "Fig. 3",
            BarrierType::SemiRigidMetallic => "Fig. 4",
            BarrierType::RaisedKerbMedian => "Fig. 5(a)",
            BarrierType::RccBarrierMedian => "Fig. 5(b)",
            BarrierType::MetallicBarrierMedian => "Fig. 5(c)",
        }
    }

    pub fn is_median(&self) -> bool {
        matches!(
            self,
            BarrierType::RaisedKerbMedian | BarrierType::RccBarrierMedian | BarrierType::MetallicBarrierMedian
        )
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rigid barrier variant used when no footpath is provided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RigidBarrierType {
    /// IRC-5R
    Irc5R,
    HighContainment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetallicBarrierType {
    SingleWBeam,
    DoubleWBeam,
}

impl MetallicBarrierType {
    pub fn beam_count(&self) -> u8 {
        match self {
            MetallicBarrierType::SingleWBeam => 1,
            MetallicBarrierType::DoubleWBeam => 2,
        }
    }
}

/// Sub-type qualifying a barrier family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", content = "variant")]
pub enum BarrierSubType {
    Rigid(RigidBarrierType),
    Metallic(MetallicBarrierType),
}

impl fmt::Display for BarrierSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierSubType::Rigid(t) => write!(f, "Rigid({:?})", t),
            BarrierSubType::Metallic(t) => write!(f, "Metallic({:?})", t),
        }
    }
}

/// Railing on top of a rigid barrier beside a footpath
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RailingType {
    Rcc,
    Steel,
}

impl RailingType {
    /// Railing width (m)
    pub fn width(&self) -> f64 {
        match self {
            RailingType::Rcc => mm(275.0),
            RailingType::Steel => mm(200.0),
        }
    }
}

/// Inputs selecting a barrier outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrierRequest {
    pub barrier_type: BarrierType,
    pub footpath: FootpathProvision,
    #[serde(default)]
    pub railing_type: Option<RailingType>,
    #[serde(default)]
    pub sub_type: Option<BarrierSubType>,
}

impl BarrierRequest {
    pub fn new(barrier_type: BarrierType, footpath: FootpathProvision) -> Self {
        Self {
            barrier_type,
            footpath,
            railing_type: None,
            sub_type: None,
        }
    }

    pub fn with_railing(mut self, railing_type: RailingType) -> Self {
        self.railing_type = Some(railing_type);
        self
    }

    pub fn with_sub_type(mut self, sub_type: BarrierSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }
}

/// Outline of a rigid concrete barrier (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidProfile {
    pub height: f64,
    pub width: f64,
    pub radius1: f64,
    pub radius2: f64,
    pub top_notch: f64,
    pub base_notch: f64,
    pub middle_length: f64,
}

impl RigidProfile {
    fn from_mm(dims: [f64; 7]) -> Self {
        let [height, width, radius1, radius2, top_notch, base_notch, middle_length] = dims.map(mm);
        Self {
            height,
            width,
            radius1,
            radius2,
            top_notch,
            base_notch,
            middle_length,
        }
    }
}

/// RCC kerb under a metallic barrier or median (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerbBase {
    pub height: f64,
    pub top_width: f64,
    pub bottom_width: f64,
}

/// W-beam on steel posts (ISMC 150 with spacer)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetallicSystem {
    /// Post section area (m²)
    pub post_section_area: f64,
    pub post_height: f64,
    pub spacer_height: f64,
    pub post_spacing: f64,
    pub w_beam_thickness: f64,
    pub w_beam_developed_length: f64,
    pub beam_count: u8,
}

/// Standard barrier or median outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum BarrierGeometry {
    /// Rigid barrier beside a footpath, with railing
    RigidWithRailing {
        profile: RigidProfile,
        railing_type: RailingType,
        railing_width: f64,
    },
    Rigid {
        profile: RigidProfile,
        sub_type: RigidBarrierType,
    },
    SemiRigid {
        width: f64,
        height: f64,
        kerb: KerbBase,
        system: MetallicSystem,
    },
    RaisedKerbMedian {
        median_width: f64,
        kerb: KerbBase,
    },
    RccBarrierMedian {
        median_width: f64,
        barrier_height: f64,
        barrier_top_width: f64,
        barrier_bottom_width: f64,
        kerb: KerbBase,
    },
    MetallicMedian {
        median_width: f64,
        kerb: KerbBase,
        system: MetallicSystem,
    },
}

impl BarrierGeometry {
    /// Overall height above the deck where the outline defines one (m)
    pub fn height(&self) -> Option<f64> {
        match self {
            BarrierGeometry::RigidWithRailing { profile, .. } | BarrierGeometry::Rigid { profile, .. } => {
                Some(profile.height)
            }
            BarrierGeometry::SemiRigid { height, .. } => Some(*height),
            BarrierGeometry::RccBarrierMedian { barrier_height, .. } => Some(*barrier_height),
            BarrierGeometry::RaisedKerbMedian { kerb, .. } => Some(kerb.height),
            BarrierGeometry::MetallicMedian { kerb, system, .. } => Some(kerb.height + system.post_height),
        }
    }
}

const MEDIAN_WIDTH_MM: f64 = 1200.0;
const POST_SECTION_AREA_MM2: f64 = 2088.0;

fn kerb_base() -> KerbBase {
    KerbBase {
        height: mm(100.0),
        top_width: mm(500.0),
        bottom_width: mm(550.0),
    }
}

fn metallic_system(beams: MetallicBarrierType) -> MetallicSystem {
    MetallicSystem {
        post_section_area: POST_SECTION_AREA_MM2 * 1e-6,
        post_height: mm(950.0),
        spacer_height: mm(330.0),
        post_spacing: mm(1000.0),
        w_beam_thickness: mm(3.0),
        w_beam_developed_length: mm(750.0),
        beam_count: beams.beam_count(),
    }
}

fn metallic_sub_type(request: &BarrierRequest) -> CalcResult<MetallicBarrierType> {
    match request.sub_type {
        Some(BarrierSubType::Metallic(t)) => Ok(t),
        Some(other) => Err(CalcError::unsupported(
            "sub_type",
            other.to_string(),
            format!("{} takes a metallic W-beam sub-type", request.barrier_type),
        )),
        None => Err(CalcError::missing_parameter("sub_type")),
    }
}

fn rigid_sub_type(request: &BarrierRequest) -> CalcResult<RigidBarrierType> {
    match request.sub_type {
        Some(BarrierSubType::Rigid(t)) => Ok(t),
        Some(other) => Err(CalcError::unsupported(
            "sub_type",
            other.to_string(),
            "A rigid barrier without footpath takes a rigid sub-type",
        )),
        None => Err(CalcError::missing_parameter("sub_type")),
    }
}

/// Outline for the requested barrier configuration (Cl. 109.6.3)
pub fn barrier_geometry(request: &BarrierRequest) -> CalcResult<BarrierGeometry> {
    debug!(clause = %BARRIER_SHAPES, ?request, "evaluating");

    let geometry = match request.barrier_type {
        BarrierType::RigidConcrete if request.footpath.is_provided() => {
            let railing_type = request
                .railing_type
                .ok_or_else(|| CalcError::missing_parameter("railing_type"))?;
            BarrierGeometry::RigidWithRailing {
                profile: RigidProfile::from_mm([900.0, 450.0, 50.0, 250.0, 175.0, 100.0, 550.0]),
                railing_type,
                railing_width: railing_type.width(),
            }
        }
        BarrierType::RigidConcrete => {
            let sub_type = rigid_sub_type(request)?;
            let dims = match sub_type {
                RigidBarrierType::Irc5R => [1100.0, 450.0, 50.0, 250.0, 175.0, 100.0, 750.0],
                RigidBarrierType::HighContainment => [1550.0, 525.0, 50.0, 250.0, 250.0, 100.0, 1200.0],
            };
            BarrierGeometry::Rigid {
                profile: RigidProfile::from_mm(dims),
                sub_type,
            }
        }
        BarrierType::SemiRigidMetallic => {
            let system = metallic_system(metallic_sub_type(request)?);
            BarrierGeometry::SemiRigid {
                width: mm(550.0),
                height: system.post_height + mm(100.0),
                kerb: kerb_base(),
                system,
            }
        }
        BarrierType::RaisedKerbMedian => BarrierGeometry::RaisedKerbMedian {
            median_width: mm(MEDIAN_WIDTH_MM),
            kerb: kerb_base(),
        },
        BarrierType::RccBarrierMedian => BarrierGeometry::RccBarrierMedian {
            median_width: mm(MEDIAN_WIDTH_MM),
            barrier_height: mm(900.0),
            barrier_top_width: mm(175.0),
            barrier_bottom_width: mm(450.0),
            kerb: kerb_base(),
        },
        BarrierType::MetallicBarrierMedian => BarrierGeometry::MetallicMedian {
            median_width: mm(MEDIAN_WIDTH_MM),
            kerb: kerb_base(),
            system: metallic_system(metallic_sub_type(request)?),
        },
    };
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigid_with_footpath_needs_railing() {
        let request = BarrierRequest::new(BarrierType::RigidConcrete, FootpathProvision::SingleSide);
        let err = barrier_geometry(&request).unwrap_err();
        assert_eq!(err, CalcError::missing_parameter("railing_type"));

        let geometry = barrier_geometry(&request.with_railing(RailingType::Rcc)).unwrap();
        match geometry {
            BarrierGeometry::RigidWithRailing {
                profile,
                railing_width,
                ..
            } => {
                assert_eq!(profile.height, 0.9);
                assert_eq!(profile.middle_length, 0.55);
                assert_eq!(railing_width, 0.275);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rigid_without_footpath() {
        let request = BarrierRequest::new(BarrierType::RigidConcrete, FootpathProvision::None)
            .with_sub_type(BarrierSubType::Rigid(RigidBarrierType::Irc5R));
        let geometry = barrier_geometry(&request).unwrap();
        assert_eq!(geometry.height(), Some(1.1));
    }

    #[test]
    fn test_rigid_sub_type_errors() {
        let bare = BarrierRequest::new(BarrierType::RigidConcrete, FootpathProvision::None);
        assert_eq!(barrier_geometry(&bare).unwrap_err().error_code(), "MISSING_PARAMETER");

        let wrong = bare.with_sub_type(BarrierSubType::Metallic(MetallicBarrierType::SingleWBeam));
        assert_eq!(
            barrier_geometry(&wrong).unwrap_err().error_code(),
            "UNSUPPORTED_CONFIGURATION"
        );
    }

    #[test]
    fn test_semi_rigid() {
        let request = BarrierRequest::new(BarrierType::SemiRigidMetallic, FootpathProvision::None)
            .with_sub_type(BarrierSubType::Metallic(MetallicBarrierType::DoubleWBeam));
        match barrier_geometry(&request).unwrap() {
            BarrierGeometry::SemiRigid { width, height, system, .. } => {
                assert_eq!(width, 0.55);
                assert!((height - 1.05).abs() < 1e-12);
                assert_eq!(system.beam_count, 2);
                assert!((system.post_section_area - 0.002088).abs() < 1e-15);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_semi_rigid_requires_sub_type() {
        let request = BarrierRequest::new(BarrierType::SemiRigidMetallic, FootpathProvision::BothSides);
        assert!(barrier_geometry(&request).is_err());
    }

    #[test]
    fn test_medians() {
        for barrier_type in [BarrierType::RaisedKerbMedian, BarrierType::RccBarrierMedian] {
            let geometry = barrier_geometry(&BarrierRequest::new(barrier_type, FootpathProvision::None)).unwrap();
            assert!(barrier_type.is_median());
            assert!(geometry.height().is_some());
        }
        let metallic = BarrierRequest::new(BarrierType::MetallicBarrierMedian, FootpathProvision::None)
            .with_sub_type(BarrierSubType::Metallic(MetallicBarrierType::SingleWBeam));
        match barrier_geometry(&metallic).unwrap() {
            BarrierGeometry::MetallicMedian { median_width, system, .. } => {
                assert_eq!(median_width, 1.2);
                assert_eq!(system.beam_count, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_geometry_serializes_with_shape_tag() {
        let geometry = barrier_geometry(&BarrierRequest::new(BarrierType::RaisedKerbMedian, FootpathProvision::None))
            .unwrap();
        let json = serde_json::to_value(geometry).unwrap();
        assert_eq!(json["shape"], "RaisedKerbMedian");
    }
}
