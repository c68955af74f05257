//! Compliance-check result shared by every checking clause.

use serde::{Deserialize, Serialize};

use crate::reference::ClauseRef;
use crate::units::Unit;

/// Outcome of a compliance-check clause.
///
/// Inapplicable clauses are vacuously compliant and carry no required value.
///
/// ## JSON Example
///
/// ```json
/// {
///   "clause": { "standard": "IRC5:2015", "clause": "101.41" },
///   "applicable": true,
///   "is_compliant": false,
///   "required": 0.75,
///   "provided": 0.6,
///   "unit": "meter",
///   "remarks": "Kerb width 0.600 m is less than the minimum 0.750 m required when no footpath is provided."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseResult {
    pub clause: ClauseRef,
    pub applicable: bool,
    pub is_compliant: bool,
    /// Required value (minimum or maximum, per clause); `None` when not applicable
    pub required: Option<f64>,
    /// Value supplied by the caller
    pub provided: Option<f64>,
    /// Unit of `required` and `provided`
    pub unit: Unit,
    pub remarks: String,
}

impl ClauseResult {
    /// Clause does not apply to this configuration
    pub fn not_applicable(clause: ClauseRef, provided: Option<f64>, unit: Unit, remarks: impl Into<String>) -> Self {
        Self {
            clause,
            applicable: false,
            is_compliant: true,
            required: None,
            provided,
            unit,
            remarks: remarks.into(),
        }
    }

    /// Applicable clause with a verdict
    pub fn checked(
        clause: ClauseRef,
        required: f64,
        provided: f64,
        unit: Unit,
        is_compliant: bool,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            clause,
            applicable: true,
            is_compliant,
            required: Some(required),
            provided: Some(provided),
            unit,
            remarks: remarks.into(),
        }
    }

    /// Applicable clause judged on a categorical input (no numeric values)
    pub fn categorical(clause: ClauseRef, is_compliant: bool, remarks: impl Into<String>) -> Self {
        Self {
            clause,
            applicable: true,
            is_compliant,
            required: None,
            provided: None,
            unit: Unit::Dimensionless,
            remarks: remarks.into(),
        }
    }

    /// True when the clause applies and is not met
    pub fn fails(&self) -> bool {
        self.applicable && !self.is_compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Standard;

    #[test]
    fn test_not_applicable_is_vacuously_compliant() {
        let r = ClauseResult::not_applicable(
            ClauseRef::new(Standard::Irc5_2015, "101.41"),
            Some(0.2),
            Unit::Meter,
            "Footpath provided",
        );
        assert!(r.is_compliant);
        assert!(r.required.is_none());
        assert!(!r.fails());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let r = ClauseResult::checked(
            ClauseRef::new(Standard::Irc5_2015, "104.3.6"),
            1.5,
            1.2,
            Unit::Meter,
            false,
            "too narrow",
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: ClauseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(back.fails());
    }
}
