//! Footway live load (Cl. 206.3).
//!
//! Footways of bridges carrying vehicular traffic take 400 kg/m² up to 7.5 m
//! span, reduced linearly to 300 kg/m² at 30 m. Longer spans use
//! `(P - 260 + 4800/L) * (16.5 - W) / 15` with `W` the footway width.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::irc6_2017::FOOTWAY_BASE_INTENSITY_KG_M2;
use crate::errors::{ensure_positive, CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, DEFAULT_PRECISION};
use crate::units::{Meters, GRAVITY};

pub const FOOTWAY_LOAD: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "206.3");

/// Footway width at which the long-span intensity reaches zero (m)
const WIDTH_LIMIT: f64 = 16.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootwayLoad {
    /// Intensity as specified by the standard (kg/m²)
    pub intensity_kg_m2: f64,
    /// Intensity as a pressure (Pa)
    pub pressure_pa: f64,
}

/// Footway live load intensity for an effective span `span` and footway
/// width `width`. The width only matters above 30 m.
pub fn footway_live_load(span: Meters, width: Meters) -> CalcResult<FootwayLoad> {
    let l = ensure_positive("span", span.0)?;
    let p = FOOTWAY_BASE_INTENSITY_KG_M2;

    let intensity = if l <= 7.5 {
        p
    } else if l <= 30.0 {
        p - (40.0 * l - 300.0) / 9.0
    } else {
        let w = ensure_positive("footway_width", width.0)?;
        if w >= WIDTH_LIMIT {
            return Err(CalcError::domain(FOOTWAY_LOAD.citation(), w, 0.0, WIDTH_LIMIT));
        }
        (p - 260.0 + 4800.0 / l) * (WIDTH_LIMIT - w) / 15.0
    };

    debug!(clause = %FOOTWAY_LOAD, span = l, width = width.0, intensity, "evaluated");
    Ok(FootwayLoad {
        intensity_kg_m2: round_to(intensity, DEFAULT_PRECISION),
        pressure_pa: round_to(intensity * GRAVITY, DEFAULT_PRECISION),
    })
}
