//! Braking force (Cl. 211.2).
//!
//! On a single or two-lane bridge: 20 % of the first train load plus 10 % of
//! the succeeding trains (or part thereof) on the span, in one lane. With
//! more lanes, 5 % of the loads on each lane beyond the first two is added.

use tracing::debug;

use crate::constants::irc6_2017::{
    BRAKING_ADDITIONAL_LANES, BRAKING_FIRST_TRAIN, BRAKING_SUCCEEDING_TRAINS,
};
use crate::errors::{ensure_positive, CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::tables::{round_to, DEFAULT_PRECISION};
use crate::units::{KiloNewtons, Meters};
use crate::vehicles::{LaneTrainLoad, VehicleClass};

pub const BRAKING_FORCE: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "211.2");

/// Lanes counted under the 20 % / 10 % rule
const PRIMARY_LANES: usize = 2;

fn primary_lane_force(lane: &LaneTrainLoad) -> f64 {
    BRAKING_FIRST_TRAIN * lane.first_train_kn + BRAKING_SUCCEEDING_TRAINS * lane.succeeding_trains_kn
}

/// Braking force from the loads in each lane, ordered as loaded.
///
/// The governing lane of the first two carries the 20 % / 10 % rule; every
/// lane after the second adds 5 % of its total load.
pub fn braking_force(lanes: &[LaneTrainLoad]) -> CalcResult<KiloNewtons> {
    if lanes.is_empty() {
        return Err(CalcError::invalid_input("lanes", "[]", "At least one loaded lane is required"));
    }

    let (primary, additional) = lanes.split_at(lanes.len().min(PRIMARY_LANES));
    let governing = primary.iter().map(primary_lane_force).fold(0.0, f64::max);
    let extra: f64 = additional
        .iter()
        .map(|lane| BRAKING_ADDITIONAL_LANES * lane.total_kn())
        .sum();

    let force = round_to(governing + extra, DEFAULT_PRECISION);
    debug!(clause = %BRAKING_FORCE, lanes = lanes.len(), governing, extra, force, "evaluated");
    Ok(KiloNewtons(force))
}

/// Braking force with `lane_count` lanes all carrying `lane`.
///
/// Same rule as [`braking_force`], evaluated without building the lanes.
pub fn uniform_braking_force(lane: LaneTrainLoad, lane_count: u32) -> CalcResult<KiloNewtons> {
    if lane_count == 0 {
        return Err(CalcError::invalid_input("lane_count", "0", "At least one loaded lane is required"));
    }
    let governing = primary_lane_force(&lane);
    let additional = lane_count.saturating_sub(PRIMARY_LANES as u32);
    let extra = f64::from(additional) * BRAKING_ADDITIONAL_LANES * lane.total_kn();

    let force = round_to(governing + extra, DEFAULT_PRECISION);
    debug!(clause = %BRAKING_FORCE, lanes = lane_count, governing, extra, force, "evaluated");
    Ok(KiloNewtons(force))
}

/// Braking force with `lane_count` lanes loaded by trains of `class` on a
/// span of `span`.
pub fn braking_force_for_class(class: VehicleClass, span: Meters, lane_count: u32) -> CalcResult<KiloNewtons> {
    ensure_positive("span", span.0)?;
    let lane = LaneTrainLoad::on_span(class, span.0)?;
    uniform_braking_force(lane, lane_count)
}
