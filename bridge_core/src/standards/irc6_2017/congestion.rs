//! Congestion factor for live load (Cl. 204.4, Table 3).
//!
//! Defined for spans above 10 m. Spans up to 30 m take the 30 m factor,
//! spans above 70 m the 70 m factor; in between the factor is interpolated.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::CalcResult;
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, BoundaryPolicy, DomainLimit, InterpolationTable, DEFAULT_PRECISION};
use crate::units::Meters;

use super::loaded;

pub const CONGESTION_FACTOR: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "Table 3");

/// Shortest span the factor is defined for (exclusive)
pub const MIN_SPAN: f64 = 10.0;

static TABLE_3: Lazy<CalcResult<InterpolationTable<1>>> = Lazy::new(|| {
    InterpolationTable::new(
        CONGESTION_FACTOR,
        [
            (30.0, [1.15]),
            (40.0, [1.30]),
            (50.0, [1.45]),
            (60.0, [1.60]),
            (70.0, [1.70]),
        ],
        BoundaryPolicy::Clamp,
    )
    .map(|table| table.with_lower_limit(DomainLimit::Exclusive(MIN_SPAN)))
});

/// Congestion factor for a span of `span` (rounded to 3 decimals)
pub fn congestion_factor(span: Meters) -> CalcResult<f64> {
    let factor = loaded(&TABLE_3)?.lookup_scalar(span.0)?;
    let factor = round_to(factor, DEFAULT_PRECISION);
    debug!(clause = %CONGESTION_FACTOR, span = span.0, factor, "evaluated");
    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_spans_take_first_value() {
        assert_eq!(congestion_factor(Meters(25.0)).unwrap(), 1.15);
        assert_eq!(congestion_factor(Meters(10.5)).unwrap(), 1.15);
    }

    #[test]
    fn test_interpolated() {
        assert_eq!(congestion_factor(Meters(35.0)).unwrap(), 1.225);
        assert_eq!(congestion_factor(Meters(65.0)).unwrap(), 1.65);
    }

    #[test]
    fn test_breakpoints_and_clamp() {
        assert_eq!(congestion_factor(Meters(40.0)).unwrap(), 1.3);
        assert_eq!(congestion_factor(Meters(70.0)).unwrap(), 1.7);
        assert_eq!(congestion_factor(Meters(80.0)).unwrap(), 1.7);
    }

    #[test]
    fn test_ten_metres_rejected() {
        let err = congestion_factor(Meters(10.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        assert!(congestion_factor(Meters(5.0)).is_err());
    }
}
