//! # Table Interpolation Engine
//!
//! Generic machinery behind every tabulated clause:
//!
//! - [`InterpolationTable`] - piecewise-linear lookup with a per-table
//!   [`BoundaryPolicy`] and optional hard [`DomainLimit`]s
//! - [`PowerLawScaling`] - post-interpolation rescaling for tables computed at
//!   a reference parameter
//! - [`StepwiseTable`] - half-open interval classification with fixed-width
//!   extrapolation
//!
//! Lookups are never rounded. Clause evaluators round once, with [`round_to`],
//! when a value leaves the crate.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::reference::{ClauseRef, Standard};
//! use bridge_core::tables::{BoundaryPolicy, InterpolationTable};
//!
//! let table = InterpolationTable::new(
//!     ClauseRef::new(Standard::Irc6_2017, "Table 3"),
//!     [(30.0, [1.15]), (40.0, [1.30])],
//!     BoundaryPolicy::Clamp,
//! ).unwrap();
//!
//! assert_eq!(table.lookup_scalar(30.0).unwrap(), 1.15);
//! ```

pub mod interpolation;
pub mod stepwise;

pub use interpolation::{
    Breakpoint, BoundaryPolicy, DomainLimit, InterpolationTable, PowerLawScaling, TableValue,
};
pub use stepwise::StepwiseTable;

/// Default number of decimal places at the API boundary
pub const DEFAULT_PRECISION: u32 = 3;

/// Round `value` to `decimals` places.
///
/// ```rust
/// use bridge_core::tables::round_to;
/// assert_eq!(round_to(9.0 / 16.5, 3), 0.545);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.2250000000000001, 3), 1.225);
        assert_eq!(round_to(9.0 / 58.5, 3), 0.154);
        assert_eq!(round_to(2.0, 3), 2.0);
        assert_eq!(round_to(-0.0004, 3), 0.0);
    }
}
