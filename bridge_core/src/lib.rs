//! # bridge_core - IRC Bridge Design Clause Engine
//!
//! `bridge_core` evaluates road-bridge designs against the Indian Roads
//! Congress codes: geometric and safety checks from IRC 5:2015 and load
//! calculators from IRC 6:2017. All inputs and outputs are JSON-serializable
//! and every result carries the clause it comes from.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from inputs to results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Traceable**: results cite their clause, table or figure
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_core::pipeline::{evaluate_case, params, DesignCase};
//! use bridge_core::settings::EvaluationSettings;
//! use bridge_core::units::Unit;
//!
//! let case = DesignCase::new("Overpass")
//!     .with_parameter(params::CARRIAGEWAY_WIDTH, 7.5, Unit::Meter)
//!     .with_parameter(params::SKEW_ANGLE, 20.0, Unit::Degree);
//!
//! let report = evaluate_case(&case, &EvaluationSettings::default());
//! assert_eq!(report.quantity("design lanes"), Some(2.0));
//! assert!(report.is_compliant());
//! ```
//!
//! ## Modules
//!
//! - [`standards`] - clause evaluators grouped by code and edition
//! - [`vehicles`] - IRC live load vehicle models
//! - [`layout`] - crash barrier placement in a cross-section
//! - [`pipeline`] - design cases, reports and batch evaluation
//! - [`tables`] - lookup tables with interpolation and step semantics
//! - [`units`] - type-safe unit wrappers and tagged parameters
//! - [`settings`] - edition selection and evaluation defaults
//! - [`errors`] - structured error types

pub mod constants;
pub mod errors;
pub mod layout;
pub mod pipeline;
pub mod reference;
pub mod settings;
pub mod standards;
pub mod tables;
pub mod units;
pub mod vehicles;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use pipeline::{evaluate_batch, evaluate_case, CaseReport, ClauseOutcome, DesignCase};
pub use reference::{ClauseRef, Standard};
pub use settings::EvaluationSettings;
pub use standards::ClauseResult;
