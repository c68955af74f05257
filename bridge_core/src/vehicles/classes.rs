//! IRC 6:2017 live load classes (Cl. 204).
//!
//! Each class is pure data: a front gap, axle gaps, wheel-line offsets, axle
//! loads in kN and the spacing between successive vehicles. All of them
//! go through [`build_load_model`](super::build_load_model).

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::reference::{ClauseRef, Standard};

use super::load_model::{build_load_model, VehicleLoadModel};

/// Live load vehicle classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Class A train of vehicles (standard)
    ClassA,
    /// Class B train of vehicles (light)
    ClassB,
    /// Class 70R wheeled vehicle (heavy, wheeled)
    Class70RWheeled,
    /// Class 70R tracked vehicle (heavy, tracked)
    Class70RTracked,
    /// Fatigue truck
    FatigueTruck,
    /// Special multi-axle vehicle (385 kN in total)
    SpecialVehicle,
}

/// Grouping used by the impact factor branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Class A and Class B trains
    Train,
    /// Wheeled heavy vehicles (70R wheeled, fatigue truck, special vehicle)
    HeavyWheeled,
    /// Tracked heavy vehicles
    HeavyTracked,
}

/// Tabulated geometry and loads of one class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleConfiguration {
    pub class: VehicleClass,
    /// Distance from the front reference to the first axle (m)
    pub front_gap: f64,
    /// Successive axle gaps (m)
    pub gaps: &'static [f64],
    /// Transverse offsets of the wheel lines (m)
    pub transverse_offsets: [f64; 2],
    /// Axle loads (kN)
    pub loads: &'static [f64],
    /// Gap to the next vehicle in the same lane (m); `None` when placed alone
    pub inter_vehicle_spacing: Option<f64>,
}

const TRAIN_GAPS: [f64; 7] = [1.1, 3.2, 1.2, 4.3, 3.0, 3.0, 3.0];
const CLASS_A_LOADS: [f64; 8] = [2.7, 2.7, 11.4, 11.4, 6.8, 6.8, 6.8, 6.8];
const CLASS_B_LOADS: [f64; 8] = [1.6, 1.6, 6.8, 6.8, 4.1, 4.1, 4.1, 4.1];

const CLASS_70R_WHEELED_GAPS: [f64; 6] = [3.96, 1.52, 2.13, 1.37, 3.05, 1.37];
const CLASS_70R_WHEELED_LOADS: [f64; 7] = [8.0, 12.0, 12.0, 17.0, 17.0, 17.0, 17.0];

// 70 t over a 4.57 m track, as five equal loads at the centres of 0.914 m segments
const CLASS_70R_TRACKED_GAPS: [f64; 4] = [0.914, 0.914, 0.914, 0.914];
const CLASS_70R_TRACKED_LOADS: [f64; 5] = [14.0, 14.0, 14.0, 14.0, 14.0];

const FATIGUE_TRUCK_GAPS: [f64; 2] = [4.0, 1.3];
const FATIGUE_TRUCK_LOADS: [f64; 3] = [8.0, 16.0, 16.0];

// Prime mover (9 + 8 + 8 t) followed by a 20-axle trailer of 18 t axle lines
const SPECIAL_VEHICLE_GAPS: [f64; 22] = [
    3.2, 1.37, 4.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
    1.5, 1.5,
];
const SPECIAL_VEHICLE_LOADS: [f64; 23] = [
    9.0, 8.0, 8.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0, 18.0,
    18.0, 18.0, 18.0, 18.0, 18.0, 18.0,
];

impl VehicleClass {
    pub const ALL: [VehicleClass; 6] = [
        VehicleClass::ClassA,
        VehicleClass::ClassB,
        VehicleClass::Class70RWheeled,
        VehicleClass::Class70RTracked,
        VehicleClass::FatigueTruck,
        VehicleClass::SpecialVehicle,
    ];

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleClass::ClassA => "Class A",
            VehicleClass::ClassB => "Class B",
            VehicleClass::Class70RWheeled => "Class 70R (wheeled)",
            VehicleClass::Class70RTracked => "Class 70R (tracked)",
            VehicleClass::FatigueTruck => "Fatigue truck",
            VehicleClass::SpecialVehicle => "Special vehicle (SV)",
        }
    }

    pub fn category(&self) -> VehicleCategory {
        match self {
            VehicleClass::ClassA | VehicleClass::ClassB => VehicleCategory::Train,
            VehicleClass::Class70RWheeled | VehicleClass::FatigueTruck | VehicleClass::SpecialVehicle => {
                VehicleCategory::HeavyWheeled
            }
            VehicleClass::Class70RTracked => VehicleCategory::HeavyTracked,
        }
    }

    /// Clause that defines the class
    pub fn source(&self) -> ClauseRef {
        match self {
            VehicleClass::ClassA | VehicleClass::ClassB | VehicleClass::Class70RWheeled | VehicleClass::Class70RTracked => {
                ClauseRef::new(Standard::Irc6_2017, "204.1")
            }
            VehicleClass::SpecialVehicle => ClauseRef::new(Standard::Irc6_2017, "204.5"),
            VehicleClass::FatigueTruck => ClauseRef::new(Standard::Irc6_2017, "204.6"),
        }
    }

    /// Tabulated configuration
    pub fn configuration(&self) -> VehicleConfiguration {
        match self {
            VehicleClass::ClassA => VehicleConfiguration {
                class: *self,
                front_gap: 0.0,
                gaps: &TRAIN_GAPS,
                transverse_offsets: [0.0, 1.8],
                loads: &CLASS_A_LOADS,
                inter_vehicle_spacing: Some(18.5),
            },
            VehicleClass::ClassB => VehicleConfiguration {
                class: *self,
                front_gap: 0.0,
                gaps: &TRAIN_GAPS,
                transverse_offsets: [0.0, 1.8],
                loads: &CLASS_B_LOADS,
                inter_vehicle_spacing: Some(18.5),
            },
            VehicleClass::Class70RWheeled => VehicleConfiguration {
                class: *self,
                front_gap: 0.81,
                gaps: &CLASS_70R_WHEELED_GAPS,
                transverse_offsets: [0.0, 1.93],
                loads: &CLASS_70R_WHEELED_LOADS,
                inter_vehicle_spacing: Some(30.0),
            },
            VehicleClass::Class70RTracked => VehicleConfiguration {
                class: *self,
                front_gap: 0.457,
                gaps: &CLASS_70R_TRACKED_GAPS,
                transverse_offsets: [0.0, 2.06],
                loads: &CLASS_70R_TRACKED_LOADS,
                inter_vehicle_spacing: Some(90.0),
            },
            VehicleClass::FatigueTruck => VehicleConfiguration {
                class: *self,
                front_gap: 0.0,
                gaps: &FATIGUE_TRUCK_GAPS,
                transverse_offsets: [0.0, 1.8],
                loads: &FATIGUE_TRUCK_LOADS,
                inter_vehicle_spacing: None,
            },
            VehicleClass::SpecialVehicle => VehicleConfiguration {
                class: *self,
                front_gap: 0.0,
                gaps: &SPECIAL_VEHICLE_GAPS,
                transverse_offsets: [0.0, 2.5],
                loads: &SPECIAL_VEHICLE_LOADS,
                inter_vehicle_spacing: None,
            },
        }
    }

    /// Generate the load model for this class
    pub fn load_model(&self) -> CalcResult<VehicleLoadModel> {
        self.configuration().build()
    }
}

impl VehicleConfiguration {
    /// Feed this configuration to the generator
    pub fn build(&self) -> CalcResult<VehicleLoadModel> {
        build_load_model(self.front_gap, self.gaps, self.transverse_offsets, self.loads)?
            .with_inter_vehicle_spacing(self.inter_vehicle_spacing)
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_70r_wheeled_model() {
        let model = VehicleClass::Class70RWheeled.load_model().unwrap();
        assert_eq!(model.axle_count(), 7);
        assert_eq!(model.axle_loads_kn.len(), 7);
        assert_eq!(model.axle_positions_m[0], 0.81);
        assert_eq!(model.total_load(), 100.0);
        assert_eq!(model.total_load_kn(), crate::units::KiloNewtons(100.0));
        assert!((model.length() - 14.21).abs() < 1e-9);
    }

    #[test]
    fn test_train_totals() {
        let a = VehicleClass::ClassA.load_model().unwrap();
        assert!((a.total_load() - 55.4).abs() < 1e-9);
        assert!((a.length() - 18.8).abs() < 1e-9);
        let b = VehicleClass::ClassB.load_model().unwrap();
        assert!((b.total_load() - 33.2).abs() < 1e-9);
    }

    #[test]
    fn test_tracked_and_special() {
        let tracked = VehicleClass::Class70RTracked.load_model().unwrap();
        assert_eq!(tracked.total_load(), 70.0);
        assert!((tracked.length() - 4.113).abs() < 1e-9);

        let sv = VehicleClass::SpecialVehicle.load_model().unwrap();
        assert_eq!(sv.axle_count(), 23);
        assert_eq!(sv.total_load(), 385.0);
        assert_eq!(sv.axle_table().len(), 23);
        assert_eq!(sv.inter_vehicle_spacing_m, None);

        let fatigue = VehicleClass::FatigueTruck.load_model().unwrap();
        assert_eq!(fatigue.total_load(), 40.0);
    }

    #[test]
    fn test_every_class_builds() {
        for class in VehicleClass::ALL {
            let model = class.load_model().unwrap();
            assert_eq!(model.axle_positions_m.len(), model.axle_loads_kn.len());
            assert!(model.axle_positions_m.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(VehicleClass::ClassB.category(), VehicleCategory::Train);
        assert_eq!(VehicleClass::SpecialVehicle.category(), VehicleCategory::HeavyWheeled);
        assert_eq!(VehicleClass::Class70RTracked.category(), VehicleCategory::HeavyTracked);
    }
}
