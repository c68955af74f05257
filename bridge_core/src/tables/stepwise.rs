//! Stepwise classification over ordered half-open intervals.
//!
//! Each step is `[previous_upper, upper)` and maps to an integer class. The
//! first step starts at negative infinity. Beyond the last tabulated bound an
//! optional fixed-width rule keeps adding one class per step width.

use tracing::debug;

use crate::errors::{ensure_finite, ensure_positive, CalcError, CalcResult};
use crate::reference::ClauseRef;

/// Tolerance applied when counting extrapolated steps, so that a value sitting
/// on a step boundary (27.1 = 23.6 + 3.5) lands in the higher bucket despite
/// binary rounding of the subtraction.
const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct StepwiseTable {
    source: ClauseRef,
    /// `(exclusive upper bound, class)` in increasing order
    steps: Vec<(f64, u32)>,
    extrapolation_width: Option<f64>,
}

impl StepwiseTable {
    /// Build from `(upper bound, class)` pairs; bounds must strictly increase.
    pub fn new(source: ClauseRef, steps: impl IntoIterator<Item = (f64, u32)>) -> CalcResult<Self> {
        let steps: Vec<(f64, u32)> = steps.into_iter().collect();
        if steps.is_empty() {
            return Err(CalcError::invalid_input(source.citation(), "[]", "Table needs at least one step"));
        }
        for (upper, _) in &steps {
            ensure_finite("step bound", *upper)?;
        }
        if let Some(pair) = steps.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(CalcError::invalid_input(
                source.citation(),
                format!("{} after {}", pair[1].0, pair[0].0),
                "Step bounds must be strictly increasing",
            ));
        }
        Ok(Self {
            source,
            steps,
            extrapolation_width: None,
        })
    }

    /// Past the last bound, add one class for every `width` started
    pub fn with_extrapolation(mut self, width: f64) -> CalcResult<Self> {
        ensure_positive("extrapolation width", width)?;
        self.extrapolation_width = Some(width);
        Ok(self)
    }

    pub fn source(&self) -> &ClauseRef {
        &self.source
    }

    /// Classify `x`.
    ///
    /// Values beyond the last bound fail with a domain error unless an
    /// extrapolation width was configured.
    pub fn classify(&self, x: f64) -> CalcResult<u32> {
        ensure_finite(&self.source.citation(), x)?;

        if let Some((_, class)) = self.steps.iter().find(|(upper, _)| x < *upper) {
            return Ok(*class);
        }

        let (last_upper, last_class) = self.steps[self.steps.len() - 1];
        match self.extrapolation_width {
            Some(width) => {
                let extra = ((x - last_upper) / width + STEP_TOLERANCE).floor();
                let headroom = u32::MAX.saturating_sub(last_class).saturating_sub(1);
                if extra > f64::from(headroom) {
                    let max = last_upper + width * f64::from(headroom);
                    return Err(CalcError::domain(self.source.citation(), x, f64::MIN, max));
                }
                // extra is a whole number in [0, headroom]
                let class = last_class + 1 + extra as u32;
                debug!(table = %self.source, x, class, "stepwise table extrapolated");
                Ok(class)
            }
            None => Err(CalcError::domain(self.source.citation(), x, f64::MIN, last_upper)),
        }
    }
}
