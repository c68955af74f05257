//! Drag coefficient for superstructures (Cl. 209.3.3).
//!
//! Beam and box girder decks take `C_D` from the width-to-depth ratio: 1.5 at
//! `b/d` = 2 falling to 1.3 at `b/d` = 6, held constant outside that range.
//! Decks on several girders take 1.5 times the single-girder value, provided
//! the clear spacing does not exceed 7 times the depth. Trusses take `C_D`
//! from the solidity ratio.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::irc6_2017::{MAX_GIRDER_SPACING_RATIO, MULTIPLE_GIRDER_DRAG_MULTIPLIER};
use crate::errors::{ensure_positive, CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, BoundaryPolicy, InterpolationTable, DEFAULT_PRECISION};
use crate::standards::irc6_2017::loaded;

pub const DRAG_COEFFICIENT: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "209.3.3");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GirderSection {
    Beam,
    BoxGirder,
    Truss,
}

impl GirderSection {
    pub const ALL: [GirderSection; 3] = [GirderSection::Beam, GirderSection::BoxGirder, GirderSection::Truss];

    pub fn display_name(&self) -> &'static str {
        match self {
            GirderSection::Beam => "Beam",
            GirderSection::BoxGirder => "Box Girder",
            GirderSection::Truss => "Truss",
        }
    }
}

impl fmt::Display for GirderSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Superstructure geometry feeding the drag coefficient.
///
/// Which fields are needed depends on the branch; absent ones fail with a
/// missing-parameter error only when the branch reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GirderGeometry {
    pub section: GirderSection,
    pub girder_count: u32,
    /// Overall deck width `b` (m)
    #[serde(default)]
    pub deck_width_m: Option<f64>,
    /// Depth `d` of the girder or box (m)
    #[serde(default)]
    pub depth_m: Option<f64>,
    /// Clear distance between adjacent girders (m)
    #[serde(default)]
    pub clear_spacing_m: Option<f64>,
    /// Solid area over enclosed area of a truss face
    #[serde(default)]
    pub solidity_ratio: Option<f64>,
}

impl GirderGeometry {
    pub fn new(section: GirderSection, girder_count: u32) -> Self {
        Self {
            section,
            girder_count,
            deck_width_m: None,
            depth_m: None,
            clear_spacing_m: None,
            solidity_ratio: None,
        }
    }

    pub fn with_deck(mut self, deck_width_m: f64, depth_m: f64) -> Self {
        self.deck_width_m = Some(deck_width_m);
        self.depth_m = Some(depth_m);
        self
    }

    pub fn with_clear_spacing(mut self, clear_spacing_m: f64) -> Self {
        self.clear_spacing_m = Some(clear_spacing_m);
        self
    }

    pub fn with_solidity_ratio(mut self, solidity_ratio: f64) -> Self {
        self.solidity_ratio = Some(solidity_ratio);
        self
    }
}

fn required(value: Option<f64>, field: &str) -> CalcResult<f64> {
    let value = value.ok_or_else(|| CalcError::missing_parameter(field))?;
    ensure_positive(field, value)
}

static SINGLE_GIRDER: Lazy<CalcResult<InterpolationTable<1>>> = Lazy::new(|| {
    InterpolationTable::new(
        ClauseRef::new(Standard::Irc6_2017, "Fig. 11"),
        [(2.0, [1.5]), (6.0, [1.3])],
        BoundaryPolicy::Clamp,
    )
});

static TRUSS_SOLIDITY: Lazy<CalcResult<InterpolationTable<1>>> = Lazy::new(|| {
    InterpolationTable::new(
        ClauseRef::new(Standard::Irc6_2017, "Table 13"),
        [(0.1, [1.9]), (0.2, [1.8]), (0.3, [1.7]), (0.4, [1.7]), (0.5, [1.6])],
        BoundaryPolicy::Reject,
    )
});

fn single_girder_drag(geometry: &GirderGeometry) -> CalcResult<f64> {
    let b = required(geometry.deck_width_m, "deck_width_m")?;
    let d = required(geometry.depth_m, "depth_m")?;
    loaded(&SINGLE_GIRDER)?.lookup_scalar(b / d)
}

/// Drag coefficient `C_D` for the superstructure (rounded to 3 decimals)
pub fn drag_coefficient(geometry: &GirderGeometry) -> CalcResult<f64> {
    if geometry.girder_count == 0 {
        return Err(CalcError::invalid_input(
            "girder_count",
            "0",
            "At least one girder is required",
        ));
    }

    let cd = match geometry.section {
        GirderSection::Truss => {
            let phi = required(geometry.solidity_ratio, "solidity_ratio")?;
            loaded(&TRUSS_SOLIDITY)?.lookup_scalar(phi)?
        }
        GirderSection::Beam | GirderSection::BoxGirder if geometry.girder_count == 1 => {
            single_girder_drag(geometry)?
        }
        GirderSection::Beam | GirderSection::BoxGirder => {
            let spacing = required(geometry.clear_spacing_m, "clear_spacing_m")?;
            let depth = required(geometry.depth_m, "depth_m")?;
            let ratio = spacing / depth;
            if ratio > MAX_GIRDER_SPACING_RATIO {
                return Err(CalcError::unsupported(
                    "clear_spacing_m / depth_m",
                    format!("{:.3}", ratio),
                    format!(
                        "Drag coefficient is defined for girder spacing up to {} times the depth",
                        MAX_GIRDER_SPACING_RATIO
                    ),
                ));
            }
            MULTIPLE_GIRDER_DRAG_MULTIPLIER * single_girder_drag(geometry)?
        }
    };

    let cd = round_to(cd, DEFAULT_PRECISION);
    debug!(clause = %DRAG_COEFFICIENT, section = %geometry.section, girders = geometry.girder_count, cd, "evaluated");
    Ok(cd)
}
