//! Number of design lanes from carriageway width (Cl. 204.3, Table 6).

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::{ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::StepwiseTable;
use crate::units::Meters;

use super::loaded;

pub const DESIGN_LANES: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "Table 6");

/// Width of each lane added beyond the tabulated widths (m)
const EXTRA_LANE_WIDTH: f64 = 3.5;

static TABLE_6: Lazy<CalcResult<StepwiseTable>> = Lazy::new(|| {
    StepwiseTable::new(
        DESIGN_LANES,
        [(5.3, 1), (9.6, 2), (13.1, 3), (16.6, 4), (20.1, 5), (23.6, 6)],
    )?
    .with_extrapolation(EXTRA_LANE_WIDTH)
});

/// Number of design lanes for a carriageway `width` wide.
///
/// Widths sit in half-open bands: 5.3 m already gives two lanes. Beyond
/// 23.6 m one lane is added per further 3.5 m.
pub fn design_lanes(width: Meters) -> CalcResult<u32> {
    let width = ensure_positive("carriageway_width", width.0)?;
    let lanes = loaded(&TABLE_6)?.classify(width)?;
    debug!(clause = %DESIGN_LANES, width, lanes, "evaluated");
    Ok(lanes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(design_lanes(Meters(5.29999)).unwrap(), 1);
        assert_eq!(design_lanes(Meters(5.3)).unwrap(), 2);
        assert_eq!(design_lanes(Meters(7.5)).unwrap(), 2);
        assert_eq!(design_lanes(Meters(9.6)).unwrap(), 3);
        assert_eq!(design_lanes(Meters(20.0)).unwrap(), 5);
    }

    #[test]
    fn test_extrapolated_lanes() {
        assert_eq!(design_lanes(Meters(23.6)).unwrap(), 7);
        assert_eq!(design_lanes(Meters(27.0)).unwrap(), 7);
        assert_eq!(design_lanes(Meters(27.1)).unwrap(), 8);
    }

    #[test]
    fn test_huge_width_is_domain_error() {
        let err = design_lanes(Meters(1e12)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
        // 1e6 m still fits the lane count
        assert!(design_lanes(Meters(1e6)).unwrap() > 280_000);
    }

    #[test]
    fn test_invalid_width() {
        assert!(design_lanes(Meters(0.0)).is_err());
        assert!(design_lanes(Meters(f64::NAN)).is_err());
    }
}
