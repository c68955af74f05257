//! Vehicle load model generator.
//!
//! A load model is built from a front gap, the successive axle gaps, the
//! transverse wheel-line offsets and the axle loads. Every vehicle class is a
//! configuration fed into the same [`build_load_model`]; the generator itself
//! knows nothing about classes.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, ensure_non_negative, ensure_positive, CalcError, CalcResult};
use crate::units::KiloNewtons;

/// Ordered axle layout of one vehicle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "axle_positions_m": [0.81, 4.77, 6.29, 8.42, 9.79, 12.84, 14.21],
///   "transverse_offsets_m": [0.0, 1.93],
///   "axle_loads_kn": [8.0, 12.0, 12.0, 17.0, 17.0, 17.0, 17.0],
///   "inter_vehicle_spacing_m": 30.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLoadModel {
    /// Longitudinal axle positions from the vehicle's front reference (m), increasing
    pub axle_positions_m: Vec<f64>,

    /// Transverse offsets of the two wheel lines (or track centrelines) (m)
    pub transverse_offsets_m: [f64; 2],

    /// Axle loads (kN), parallel to `axle_positions_m`
    pub axle_loads_kn: Vec<f64>,

    /// Gap between the last axle of one vehicle and the front of the next (m).
    /// `None` for vehicles that are placed alone on the bridge.
    pub inter_vehicle_spacing_m: Option<f64>,
}

/// One row of the axle-by-axle reporting table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleRow {
    /// 1-based axle number from the front
    pub axle: usize,
    pub position_m: f64,
    pub load_kn: f64,
}

/// Build a load model from cumulative spacing definitions.
///
/// Positions are the running sum starting at `front_gap` and adding each gap
/// in turn, so `gaps.len() + 1` axles are produced.
///
/// # Errors
///
/// - `ConfigurationMismatch` when `loads.len() != gaps.len() + 1`
/// - `InvalidInput` for a negative front gap, a non-positive gap, or a
///   negative or non-finite load
///
/// # Example
///
/// ```rust
/// use bridge_core::vehicles::build_load_model;
///
/// let model = build_load_model(0.5, &[1.0, 2.0], [0.0, 1.8], &[2.0, 4.0, 4.0]).unwrap();
/// assert_eq!(model.axle_positions_m, vec![0.5, 1.5, 3.5]);
/// assert_eq!(model.total_load(), 10.0);
/// ```
pub fn build_load_model(
    front_gap: f64,
    gaps: &[f64],
    transverse_offsets: [f64; 2],
    loads: &[f64],
) -> CalcResult<VehicleLoadModel> {
    if loads.len() != gaps.len() + 1 {
        return Err(CalcError::configuration_mismatch(
            "axle loads",
            gaps.len() + 1,
            loads.len(),
        ));
    }
    ensure_non_negative("front_gap", front_gap)?;
    for offset in transverse_offsets {
        ensure_finite("transverse_offset", offset)?;
    }
    for load in loads {
        ensure_non_negative("axle_load", *load)?;
    }

    let mut positions = Vec::with_capacity(loads.len());
    let mut running = front_gap;
    positions.push(running);
    for gap in gaps {
        ensure_positive("axle_gap", *gap)?;
        running += gap;
        positions.push(running);
    }

    Ok(VehicleLoadModel {
        axle_positions_m: positions,
        transverse_offsets_m: transverse_offsets,
        axle_loads_kn: loads.to_vec(),
        inter_vehicle_spacing_m: None,
    })
}

impl VehicleLoadModel {
    /// Set the inter-vehicle spacing and return self (builder pattern)
    pub fn with_inter_vehicle_spacing(mut self, spacing_m: Option<f64>) -> CalcResult<Self> {
        if let Some(spacing) = spacing_m {
            ensure_non_negative("inter_vehicle_spacing", spacing)?;
        }
        self.inter_vehicle_spacing_m = spacing_m;
        Ok(self)
    }

    pub fn axle_count(&self) -> usize {
        self.axle_positions_m.len()
    }

    /// Sum of all axle loads (kN)
    pub fn total_load(&self) -> f64 {
        self.axle_loads_kn.iter().sum()
    }

    pub fn total_load_kn(&self) -> KiloNewtons {
        KiloNewtons(self.total_load())
    }

    /// Distance from the front reference to the last axle (m)
    pub fn length(&self) -> f64 {
        self.axle_positions_m.last().copied().unwrap_or(0.0)
    }

    /// Transverse distance between the two wheel lines (m)
    pub fn wheel_line_spacing(&self) -> f64 {
        (self.transverse_offsets_m[1] - self.transverse_offsets_m[0]).abs()
    }

    /// Load on each wheel (or track) line, assuming an even split per axle (kN)
    pub fn wheel_loads_kn(&self) -> Vec<f64> {
        self.axle_loads_kn.iter().map(|load| load / 2.0).collect()
    }

    /// Sum of the loads whose axles lie within `[start, end]` after shifting
    /// the vehicle by `offset` (kN)
    pub fn load_within(&self, offset: f64, start: f64, end: f64) -> f64 {
        self.axle_positions_m
            .iter()
            .zip(&self.axle_loads_kn)
            .filter(|(pos, _)| {
                let at = offset + **pos;
                at >= start && at <= end
            })
            .map(|(_, load)| load)
            .sum()
    }

    /// Axle-by-axle table for reporting multi-axle vehicles
    pub fn axle_table(&self) -> Vec<AxleRow> {
        self.axle_positions_m
            .iter()
            .zip(&self.axle_loads_kn)
            .enumerate()
            .map(|(i, (position_m, load_kn))| AxleRow {
                axle: i + 1,
                position_m: *position_m,
                load_kn: *load_kn,
            })
            .collect()
    }
}
