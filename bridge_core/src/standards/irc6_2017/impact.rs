//! # Impact Factor (Cl. 208)
//!
//! Fraction of the live load added for dynamic effects, by vehicle category,
//! span and deck material.
//!
//! | Vehicle | Concrete deck | Steel deck |
//! |---|---|---|
//! | Class A / B | `4.5 / (6 + L)` | `9 / (13.5 + L)` |
//! | 70R tracked | 0.25 to 5 m, 0.10 from 9 m; Class A curve beyond 40 m | 0.25 to 5 m, 0.10 from 9 m |
//! | 70R wheeled, fatigue, special | 0.25 to 12 m, then Class A curve | 0.25 to 23 m, then Class A curve |
//!
//! The Class A curve is defined for 3 m to 45 m and held constant outside.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc6_2017::{impact_factor, DeckMaterial};
//! use bridge_core::units::Meters;
//! use bridge_core::vehicles::VehicleClass;
//!
//! let f = impact_factor(VehicleClass::ClassA, Meters(3.0), DeckMaterial::Steel).unwrap();
//! assert_eq!(f, 0.545);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, DEFAULT_PRECISION};
use crate::units::Meters;
use crate::vehicles::{VehicleCategory, VehicleClass};

pub const IMPACT_FACTOR: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "208");

/// Span range of the Class A impact curve (m)
const CURVE_MIN_SPAN: f64 = 3.0;
const CURVE_MAX_SPAN: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeckMaterial {
    Steel,
    #[default]
    Concrete,
}

impl DeckMaterial {
    pub const ALL: [DeckMaterial; 2] = [DeckMaterial::Steel, DeckMaterial::Concrete];

    pub fn display_name(&self) -> &'static str {
        match self {
            DeckMaterial::Steel => "Steel",
            DeckMaterial::Concrete => "Concrete",
        }
    }
}

impl fmt::Display for DeckMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Class A / B impact curve, span held inside 3..=45 m
fn class_a_curve(span: f64, material: DeckMaterial) -> f64 {
    let l = span.clamp(CURVE_MIN_SPAN, CURVE_MAX_SPAN);
    match material {
        DeckMaterial::Steel => 9.0 / (13.5 + l),
        DeckMaterial::Concrete => 4.5 / (6.0 + l),
    }
}

/// 0.25 up to 5 m, falling linearly to 0.10 at 9 m
fn tracked_short_span(span: f64) -> f64 {
    if span <= 5.0 {
        0.25
    } else if span < 9.0 {
        0.25 - 0.15 * (span - 5.0) / 4.0
    } else {
        0.10
    }
}

fn raw_impact_factor(category: VehicleCategory, span: f64, material: DeckMaterial) -> f64 {
    match (category, material) {
        (VehicleCategory::Train, _) => class_a_curve(span, material),
        (VehicleCategory::HeavyTracked, DeckMaterial::Steel) => tracked_short_span(span),
        (VehicleCategory::HeavyTracked, DeckMaterial::Concrete) => {
            if span <= 40.0 {
                tracked_short_span(span)
            } else {
                class_a_curve(span, material)
            }
        }
        (VehicleCategory::HeavyWheeled, _) => {
            let limit = match material {
                DeckMaterial::Concrete => 12.0,
                DeckMaterial::Steel => 23.0,
            };
            if span <= limit {
                0.25
            } else {
                class_a_curve(span, material)
            }
        }
    }
}

/// Impact factor for `class` on a span of `span` (rounded to 3 decimals)
pub fn impact_factor(class: VehicleClass, span: Meters, material: DeckMaterial) -> CalcResult<f64> {
    let span = ensure_positive("span", span.0)?;
    let factor = round_to(raw_impact_factor(class.category(), span, material), DEFAULT_PRECISION);
    debug!(clause = %IMPACT_FACTOR, ?class, span, %material, factor, "evaluated");
    Ok(factor)
}
