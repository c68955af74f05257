//! Railing height (Cl. 109.7.2.3 and 109.7.2.4).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::irc5_2015::{RAILING_MIN_HEIGHT, RAILING_MIN_HEIGHT_CYCLE_TRACK};
use crate::errors::{ensure_positive, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::standards::ClauseResult;
use crate::units::{Meters, Unit};

pub const RAILING_HEIGHT: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.7.2.3");
pub const RAILING_HEIGHT_CYCLE_TRACK: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.7.2.4");

/// Railing check plus the height to detail with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailingHeightCheck {
    pub result: ClauseResult,
    /// Provided height raised to the minimum where it falls short (m)
    pub adjusted_height: f64,
}

/// Railings and parapets: at least 1.1 m above the adjacent roadway or
/// footway surface, 1.4 m where a cycle track runs alongside.
pub fn railing_height(height: Meters, adjacent_cycle_track: bool) -> CalcResult<RailingHeightCheck> {
    let provided = ensure_positive("railing_height", height.0)?;
    let (clause, required) = if adjacent_cycle_track {
        (RAILING_HEIGHT_CYCLE_TRACK, RAILING_MIN_HEIGHT_CYCLE_TRACK)
    } else {
        (RAILING_HEIGHT, RAILING_MIN_HEIGHT)
    };
    debug!(clause = %clause, provided, required, "evaluating");

    let compliant = provided >= required;
    let remarks = if compliant {
        format!("Railing height {:.3} m meets the minimum {:.3} m.", provided, required)
    } else {
        warn!(provided, required, "railing height below minimum, adjusted");
        format!(
            "Railing height {:.3} m is less than the minimum {:.3} m; adjusted to {:.0} mm.",
            provided,
            required,
            required * 1000.0
        )
    };

    Ok(RailingHeightCheck {
        result: ClauseResult::checked(clause, required, provided, Unit::Meter, compliant, remarks),
        adjusted_height: provided.max(required),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_railing_ok() {
        let check = railing_height(Meters(1.2), false).unwrap();
        assert!(check.result.is_compliant);
        assert_eq!(check.adjusted_height, 1.2);
    }

    #[test]
    fn test_railing_adjusted_to_minimum() {
        let check = railing_height(Meters(0.9), false).unwrap();
        assert!(check.result.fails());
        assert_eq!(check.adjusted_height, 1.1);
        assert!(check.result.remarks.contains("1100 mm"));
    }

    #[test]
    fn test_cycle_track_requires_higher_railing() {
        let check = railing_height(Meters(1.2), true).unwrap();
        assert!(check.result.fails());
        assert_eq!(check.result.clause, RAILING_HEIGHT_CYCLE_TRACK);
        assert_eq!(check.adjusted_height, 1.4);
    }
}
