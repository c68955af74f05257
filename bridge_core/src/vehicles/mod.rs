//! # Vehicle Load Models
//!
//! Live load vehicles of IRC 6:2017 as ordered axle layouts.
//!
//! - [`build_load_model`] - the generator (cumulative axle positions)
//! - [`VehicleClass`] - named configurations fed into the generator
//! - [`LaneTrainLoad`] - successive trains of a class along a span
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::vehicles::VehicleClass;
//!
//! let model = VehicleClass::Class70RWheeled.load_model().unwrap();
//! assert_eq!(model.axle_count(), 7);
//! assert_eq!(model.total_load_kn().0, 100.0);
//! ```

pub mod classes;
pub mod load_model;
pub mod trains;

pub use classes::{VehicleCategory, VehicleClass, VehicleConfiguration};
pub use load_model::{build_load_model, AxleRow, VehicleLoadModel};
pub use trains::LaneTrainLoad;
