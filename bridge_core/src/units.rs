//! # Unit Types
//!
//! Type-safe wrappers for engineering units, plus the tagged
//! [`DesignParameter`] used at the input boundary.
//!
//! ## Canonical Units
//!
//! Every clause evaluator works in one canonical system:
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Pressure: pascals (Pa = N/m²)
//! - Angle: degrees
//!
//! Callers tag each raw value with the unit it was measured in. The registry
//! converts to canonical units before any table lookup or formula; nothing is
//! inferred from magnitudes.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::units::{Meters, Millimeters, DesignParameter, Unit};
//!
//! let kerb: Meters = Millimeters(750.0).into();
//! assert_eq!(kerb.0, 0.75);
//!
//! let width = DesignParameter::new("carriageway_width", 7500.0, Unit::Millimeter);
//! assert_eq!(width.canonical_value(), 7.5);
//! ```

use std::collections::BTreeMap;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion factors
// ============================================================================

pub const KILO: f64 = 1e3;
pub const MILLI: f64 = 1e-3;

/// Standard gravity (kN per tonne)
pub const GRAVITY: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres (canonical)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

// Division rather than multiplication by MILLI keeps 900 mm == 0.9 m bit-exact.
impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / KILO)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * KILO)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons (canonical)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Tonne-force, as unit weights in IRC 6 Cl. 203 are given
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / KILO)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * KILO)
    }
}

impl From<Tonnes> for KiloNewtons {
    fn from(t: Tonnes) -> Self {
        KiloNewtons(t.0 * GRAVITY)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pascals (canonical)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

impl From<KiloPascals> for Pascals {
    fn from(kpa: KiloPascals) -> Self {
        Pascals(kpa.0 * KILO)
    }
}

impl From<Pascals> for KiloPascals {
    fn from(pa: Pascals) -> Self {
        KiloPascals(pa.0 / KILO)
    }
}

// ============================================================================
// Angles and Ratios
// ============================================================================

/// Angle in degrees (canonical)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Ratio expressed in percent (e.g. a 0.3 % gradient)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(Newtons);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Pascals);
impl_arithmetic!(KiloPascals);
impl_arithmetic!(Degrees);
impl_arithmetic!(Percent);

// ============================================================================
// Tagged design parameters
// ============================================================================

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Length,
    Force,
    Pressure,
    Angle,
    Velocity,
    Area,
    Dimensionless,
}

/// Unit tag attached to every caller-supplied value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Meter,
    Millimeter,
    KiloNewton,
    Newton,
    /// Tonne-force, converted with [`GRAVITY`]
    Tonne,
    Pascal,
    KiloPascal,
    Degree,
    /// Wind speed
    MeterPerSecond,
    /// Exposed or plan area
    SquareMeter,
    /// Percent, stored canonically as the percentage figure itself
    Percent,
    Dimensionless,
}

impl Unit {
    /// Dimension of this unit
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Meter | Unit::Millimeter => UnitKind::Length,
            Unit::KiloNewton | Unit::Newton | Unit::Tonne => UnitKind::Force,
            Unit::Pascal | Unit::KiloPascal => UnitKind::Pressure,
            Unit::Degree => UnitKind::Angle,
            Unit::MeterPerSecond => UnitKind::Velocity,
            Unit::SquareMeter => UnitKind::Area,
            Unit::Percent | Unit::Dimensionless => UnitKind::Dimensionless,
        }
    }

    /// Convert a raw value in this unit to the canonical unit of its kind
    pub fn to_canonical(&self, value: f64) -> f64 {
        match self {
            Unit::Meter => value,
            Unit::Millimeter => Meters::from(Millimeters(value)).0,
            Unit::KiloNewton => value,
            Unit::Newton => KiloNewtons::from(Newtons(value)).0,
            Unit::Tonne => KiloNewtons::from(Tonnes(value)).0,
            Unit::Pascal => value,
            Unit::KiloPascal => Pascals::from(KiloPascals(value)).0,
            Unit::Degree => value,
            Unit::MeterPerSecond => value,
            Unit::SquareMeter => value,
            Unit::Percent => value,
            Unit::Dimensionless => value,
        }
    }

    /// Short symbol for reports
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Millimeter => "mm",
            Unit::KiloNewton => "kN",
            Unit::Newton => "N",
            Unit::Tonne => "t",
            Unit::Pascal => "Pa",
            Unit::KiloPascal => "kPa",
            Unit::Degree => "deg",
            Unit::MeterPerSecond => "m/s",
            Unit::SquareMeter => "m²",
            Unit::Percent => "%",
            Unit::Dimensionless => "-",
        }
    }
}

/// A named numeric value with an explicit unit tag.
///
/// ## JSON Example
///
/// ```json
/// { "name": "carriageway_width", "value": 7500.0, "unit": "millimeter" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameter {
    pub name: String,
    pub value: f64,
    pub unit: Unit,
}

impl DesignParameter {
    pub fn new(name: impl Into<String>, value: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
        }
    }

    /// Value converted to the canonical unit of its kind
    pub fn canonical_value(&self) -> f64 {
        self.unit.to_canonical(self.value)
    }
}

/// Named collection of design parameters with typed, normalizing accessors.
///
/// Accessors fail with `MissingParameter` when the name is absent and with
/// `InvalidInput` when the tagged unit has the wrong dimension or the value
/// is not finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DesignParameter>", into = "Vec<DesignParameter>")]
pub struct DesignParameters {
    entries: BTreeMap<String, DesignParameter>,
}

impl From<Vec<DesignParameter>> for DesignParameters {
    fn from(list: Vec<DesignParameter>) -> Self {
        let mut params = DesignParameters::default();
        for p in list {
            params.insert(p);
        }
        params
    }
}

impl From<DesignParameters> for Vec<DesignParameter> {
    fn from(params: DesignParameters) -> Self {
        params.entries.into_values().collect()
    }
}

impl DesignParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, param: DesignParameter) {
        self.entries.insert(param.name.clone(), param);
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: f64, unit: Unit) -> Self {
        self.insert(DesignParameter::new(name, value, unit));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn canonical(&self, name: &str, kind: UnitKind) -> CalcResult<f64> {
        let param = self
            .entries
            .get(name)
            .ok_or_else(|| CalcError::missing_parameter(name))?;
        if param.unit.kind() != kind {
            return Err(CalcError::invalid_input(
                name,
                format!("{} {}", param.value, param.unit.symbol()),
                format!("Expected a {:?} unit", kind),
            ));
        }
        let value = param.canonical_value();
        if !value.is_finite() {
            return Err(CalcError::invalid_input(name, value.to_string(), "Value must be finite"));
        }
        Ok(value)
    }

    /// Length in metres
    pub fn length(&self, name: &str) -> CalcResult<Meters> {
        self.canonical(name, UnitKind::Length).map(Meters)
    }

    /// Length in metres, `None` when absent (wrong units still fail)
    pub fn optional_length(&self, name: &str) -> CalcResult<Option<Meters>> {
        if self.contains(name) {
            self.length(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Force in kilonewtons
    pub fn force(&self, name: &str) -> CalcResult<KiloNewtons> {
        self.canonical(name, UnitKind::Force).map(KiloNewtons)
    }

    /// Pressure in pascals
    pub fn pressure(&self, name: &str) -> CalcResult<Pascals> {
        self.canonical(name, UnitKind::Pressure).map(Pascals)
    }

    /// Angle in degrees
    pub fn angle(&self, name: &str) -> CalcResult<Degrees> {
        self.canonical(name, UnitKind::Angle).map(Degrees)
    }

    /// Speed in metres per second
    pub fn velocity(&self, name: &str) -> CalcResult<f64> {
        self.canonical(name, UnitKind::Velocity)
    }

    /// Area in square metres
    pub fn area(&self, name: &str) -> CalcResult<f64> {
        self.canonical(name, UnitKind::Area)
    }

    /// Dimensionless value (ratios, percentages)
    pub fn ratio(&self, name: &str) -> CalcResult<f64> {
        self.canonical(name, UnitKind::Dimensionless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters_exact() {
        let m: Meters = Millimeters(900.0).into();
        assert_eq!(m.0, 0.9);
        let m: Meters = Millimeters(225.0).into();
        assert_eq!(m.0, 0.225);
    }

    #[test]
    fn test_tonnes_to_kilonewtons() {
        let kn: KiloNewtons = Tonnes(10.0).into();
        assert!((kn.0 - 98.1).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(7.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "7.5");
        let unit = serde_json::to_string(&Unit::KiloPascal).unwrap();
        assert_eq!(unit, "\"kilo_pascal\"");
    }

    #[test]
    fn test_parameters_normalize() {
        let params = DesignParameters::new()
            .with("carriageway_width", 7500.0, Unit::Millimeter)
            .with("pressure", 0.5, Unit::KiloPascal);
        assert_eq!(params.length("carriageway_width").unwrap(), Meters(7.5));
        assert_eq!(params.pressure("pressure").unwrap(), Pascals(500.0));
    }

    #[test]
    fn test_parameters_missing_and_wrong_kind() {
        let params = DesignParameters::new().with("span", 30.0, Unit::Degree);
        assert_eq!(
            params.length("kerb_width").unwrap_err(),
            CalcError::missing_parameter("kerb_width")
        );
        assert_eq!(params.length("span").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(params.optional_length("footpath_width").unwrap(), None);
    }

    #[test]
    fn test_area_kind_is_checked() {
        let params = DesignParameters::new()
            .with("solid_area_m2", 20.0, Unit::SquareMeter)
            .with("plan_area_m2", 100.0, Unit::Dimensionless);
        assert_eq!(params.area("solid_area_m2").unwrap(), 20.0);
        assert_eq!(params.area("plan_area_m2").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(serde_json::to_string(&Unit::SquareMeter).unwrap(), "\"square_meter\"");
    }

    #[test]
    fn test_parameters_json_roundtrip() {
        let params = DesignParameters::new().with("span", 30.0, Unit::Meter);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.starts_with('['));
        let back: DesignParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
