//! # IRC 5:2015 - General Features of Design
//!
//! Compliance checks and standard outlines for road bridges. Cl. 105.2.1
//! (protection to users) lives in [`crate::layout`].
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc5_2015::{carriageway_width, FootpathProvision, footpath_width};
//! use bridge_core::units::Meters;
//!
//! let check = carriageway_width(Meters(7.0), 2).unwrap();
//! assert!(!check.is_compliant);
//! assert_eq!(check.required, Some(7.5));
//!
//! let footpath = footpath_width(FootpathProvision::None, None).unwrap();
//! assert!(!footpath.applicable);
//! ```

pub mod alignment;
pub mod barriers;
pub mod kerbs;
pub mod railings;
pub mod surfacing;
pub mod widths;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use alignment::{bridge_length_single_curve, longitudinal_gradient, skew_angle};
pub use barriers::{
    barrier_geometry, BarrierGeometry, BarrierRequest, BarrierSubType, BarrierType, KerbBase,
    MetallicBarrierType, MetallicSystem, RailingType, RigidBarrierType, RigidProfile,
};
pub use kerbs::{road_kerb_outline, safety_kerb_outline, safety_kerb_width, KerbOutline, SafetyKerbOutline};
pub use railings::{railing_height, RailingHeightCheck};
pub use surfacing::{wearing_coat, WearingCoat};
pub use widths::{carriageway_width, design_life, footpath_width, required_carriageway_width};

/// Footpath arrangement on the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootpathProvision {
    None,
    SingleSide,
    BothSides,
}

impl FootpathProvision {
    pub const ALL: [FootpathProvision; 3] = [
        FootpathProvision::None,
        FootpathProvision::SingleSide,
        FootpathProvision::BothSides,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FootpathProvision::None => "None",
            FootpathProvision::SingleSide => "Single Side",
            FootpathProvision::BothSides => "Both Sides",
        }
    }

    pub fn is_provided(&self) -> bool {
        !matches!(self, FootpathProvision::None)
    }
}

impl fmt::Display for FootpathProvision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footpath_provision() {
        assert!(!FootpathProvision::None.is_provided());
        assert!(FootpathProvision::SingleSide.is_provided());
        assert!(FootpathProvision::BothSides.is_provided());
        assert_eq!(FootpathProvision::BothSides.to_string(), "Both Sides");
    }
}
