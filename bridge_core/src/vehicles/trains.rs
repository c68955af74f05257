//! Trains of vehicles along one lane.
//!
//! Successive vehicles of a class follow each other at the class's
//! inter-vehicle spacing. Only axles actually on the span count, which covers
//! the "or part thereof" wording of the braking clause. Trains lying wholly on
//! the span are counted in closed form, so the work does not grow with the
//! span.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

use super::classes::VehicleClass;

/// Loads of the first train and of all succeeding trains in one lane (kN).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneTrainLoad {
    pub first_train_kn: f64,
    pub succeeding_trains_kn: f64,
}

impl LaneTrainLoad {
    pub fn new(first_train_kn: f64, succeeding_trains_kn: f64) -> CalcResult<Self> {
        ensure_non_negative("first_train_kn", first_train_kn)?;
        ensure_non_negative("succeeding_trains_kn", succeeding_trains_kn)?;
        Ok(Self {
            first_train_kn,
            succeeding_trains_kn,
        })
    }

    /// Lay trains of `class` along a span of `span_m`, front of the first
    /// train at the start of the span.
    pub fn on_span(class: VehicleClass, span_m: f64) -> CalcResult<Self> {
        ensure_positive("span_m", span_m)?;
        let model = class.load_model()?;

        let first_train_kn = model.load_within(0.0, 0.0, span_m);
        let mut succeeding_trains_kn = 0.0;

        if let Some(spacing) = model.inter_vehicle_spacing_m {
            let pitch = ensure_positive("train pitch", model.length() + spacing)?;
            let first_axle = model.axle_positions_m[0];
            // Train k sits at offset k * pitch; it touches the span while its
            // first axle is on it and lies wholly on it while its last one is
            let touching = ((span_m - first_axle) / pitch).floor().max(0.0);
            let whole = ((span_m - model.length()) / pitch).floor().clamp(0.0, touching);
            succeeding_trains_kn = whole * model.total_load();

            // At most one vehicle length of trains straddles the far end
            let straddling = (touching - whole).min((model.length() / pitch).ceil() + 1.0) as u64;
            for i in 1..=straddling {
                let offset = (whole + i as f64) * pitch;
                succeeding_trains_kn += model.load_within(offset, 0.0, span_m);
            }
        }

        Self::new(first_train_kn, succeeding_trains_kn)
    }

    /// Everything in the lane (kN)
    pub fn total_kn(&self) -> f64 {
        self.first_train_kn + self.succeeding_trains_kn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_span_partial_first_train() {
        // Class A on 5 m: axles at 0, 1.1, 4.3 -> 2.7 + 2.7 + 11.4
        let lane = LaneTrainLoad::on_span(VehicleClass::ClassA, 5.0).unwrap();
        assert!((lane.first_train_kn - 16.8).abs() < 1e-9);
        assert_eq!(lane.succeeding_trains_kn, 0.0);
    }

    #[test]
    fn test_long_span_succeeding_trains() {
        // Pitch 18.8 + 18.5 = 37.3 m; the second train starts at 37.3 m
        let lane = LaneTrainLoad::on_span(VehicleClass::ClassA, 40.0).unwrap();
        assert!((lane.first_train_kn - 55.4).abs() < 1e-9);
        // Second train axles at 37.3 and 38.4 m are on the span
        assert!((lane.succeeding_trains_kn - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_single_vehicle_class_has_no_succeeding_trains() {
        let lane = LaneTrainLoad::on_span(VehicleClass::SpecialVehicle, 200.0).unwrap();
        assert_eq!(lane.succeeding_trains_kn, 0.0);
        assert!((lane.total_kn() - 385.0).abs() < 1e-6);
    }

    #[test]
    fn test_whole_and_partial_trains() {
        // 100 m: trains at 37.3 m (whole, ends 56.1) and 74.6 m (ends 93.4)
        let lane = LaneTrainLoad::on_span(VehicleClass::ClassA, 100.0).unwrap();
        assert!((lane.succeeding_trains_kn - 2.0 * 55.4).abs() < 1e-9);
        // 80 m: second train whole, third has axles at 74.6, 75.7, 78.9
        let lane = LaneTrainLoad::on_span(VehicleClass::ClassA, 80.0).unwrap();
        assert!((lane.succeeding_trains_kn - (55.4 + 16.8)).abs() < 1e-9);
    }

    #[test]
    fn test_very_long_span() {
        let span = 1e9;
        let lane = LaneTrainLoad::on_span(VehicleClass::ClassA, span).unwrap();
        let trains = lane.succeeding_trains_kn / 55.4;
        assert!((trains - span / 37.3).abs() < 2.0);

        let lane = LaneTrainLoad::on_span(VehicleClass::Class70RWheeled, 1e300).unwrap();
        assert!(lane.succeeding_trains_kn.is_finite());
    }

    #[test]
    fn test_invalid_span() {
        assert!(LaneTrainLoad::on_span(VehicleClass::ClassA, 0.0).is_err());
        assert!(LaneTrainLoad::new(-1.0, 0.0).is_err());
    }
}
