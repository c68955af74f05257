//! # Seismic Force Coefficients (Cl. 219)
//!
//! Zone factor `Z` (Cl. 219.2, Table 18), spectral acceleration coefficient
//! `S_a/g` for 5 % damping (Cl. 219.5.1) and the horizontal seismic
//! coefficient
//!
//! ```text
//! A_h = (Z / 2) * (I / R) * (S_a / g)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc6_2017::{horizontal_seismic_coefficient, Importance, SeismicZone, SoilType};
//!
//! let ah = horizontal_seismic_coefficient(SeismicZone::V, SoilType::Rock, 0.3, Importance::Normal, 3.0).unwrap();
//! // 0.18 * (1 / 3) * 2.5
//! assert_eq!(ah, 0.15);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, DEFAULT_PRECISION};

pub const ZONE_FACTOR: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "219.2");
pub const SPECTRAL_ACCELERATION: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "219.5.1");

/// Period beyond which the spectrum is held constant (s)
const LONG_PERIOD_LIMIT: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeismicZone {
    II,
    III,
    IV,
    V,
}

impl SeismicZone {
    pub const ALL: [SeismicZone; 4] = [SeismicZone::II, SeismicZone::III, SeismicZone::IV, SeismicZone::V];

    /// Zone factor `Z`
    pub fn zone_factor(&self) -> f64 {
        match self {
            SeismicZone::II => 0.10,
            SeismicZone::III => 0.16,
            SeismicZone::IV => 0.24,
            SeismicZone::V => 0.36,
        }
    }
}

impl fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    /// Type I: rock or hard soil
    Rock,
    /// Type II: medium soil
    Medium,
    /// Type III: soft soil
    Soft,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Rock, SoilType::Medium, SoilType::Soft];

    /// `(end of plateau T (s), numerator of the 1/T branch, value beyond 4 s)`
    fn spectrum_shape(&self) -> (f64, f64, f64) {
        match self {
            SoilType::Rock => (0.40, 1.00, 0.25),
            SoilType::Medium => (0.55, 1.36, 0.34),
            SoilType::Soft => (0.67, 1.67, 0.42),
        }
    }
}

/// Importance category of the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Importance {
    #[default]
    Normal,
    Important,
    /// Large critical bridges
    LargeCritical,
}

impl Importance {
    /// Importance factor `I`
    pub fn factor(&self) -> f64 {
        match self {
            Importance::Normal => 1.0,
            Importance::Important => 1.2,
            Importance::LargeCritical => 1.5,
        }
    }
}

/// `S_a / g` for a fundamental period `period_s`.
///
/// Rock: `1 + 15T` up to 0.1 s, 2.5 up to 0.4 s, `1/T` up to 4 s. Medium and
/// soft soils have no rising branch. Beyond 4 s a constant tail applies.
pub fn spectral_acceleration(soil: SoilType, period_s: f64) -> CalcResult<f64> {
    let t = ensure_non_negative("period", period_s)?;
    let (plateau_end, numerator, long_period) = soil.spectrum_shape();

    let sa = if matches!(soil, SoilType::Rock) && t < 0.1 {
        1.0 + 15.0 * t
    } else if t <= plateau_end {
        2.5
    } else if t <= LONG_PERIOD_LIMIT {
        numerator / t
    } else {
        long_period
    };

    let sa = round_to(sa, DEFAULT_PRECISION);
    debug!(clause = %SPECTRAL_ACCELERATION, ?soil, period = t, sa, "evaluated");
    Ok(sa)
}

/// Horizontal seismic coefficient `A_h` with response reduction factor
/// `response_reduction` (`R`).
pub fn horizontal_seismic_coefficient(
    zone: SeismicZone,
    soil: SoilType,
    period_s: f64,
    importance: Importance,
    response_reduction: f64,
) -> CalcResult<f64> {
    let r = ensure_positive("response_reduction", response_reduction)?;
    let sa = spectral_acceleration(soil, period_s)?;
    let z = zone.zone_factor();
    let ah = round_to(z / 2.0 * importance.factor() / r * sa, DEFAULT_PRECISION);
    debug!(clause = %ZONE_FACTOR, %zone, z, sa, ah, "evaluated");
    Ok(ah)
}
