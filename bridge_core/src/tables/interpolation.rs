//! Piecewise-linear lookup over ordered breakpoints.
//!
//! A table maps one independent variable to `N` dependent columns (wind speed
//! *and* pressure at a height, for instance). Breakpoints are validated once at
//! construction and never change afterwards.
//!
//! Out-of-range behaviour is declared per table:
//!
//! - [`BoundaryPolicy::Clamp`] returns the nearest boundary row
//! - [`BoundaryPolicy::Reject`] returns a domain error
//!
//! Optional [`DomainLimit`]s are checked first, so a table can clamp inside its
//! range of applicability and still reject inputs the standard excludes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{ensure_finite, ensure_positive, CalcError, CalcResult};
use crate::reference::ClauseRef;

/// What to do with inputs outside the first/last breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Return the nearest boundary's values
    Clamp,
    /// Signal a domain error
    Reject,
}

/// Hard applicability limit on the independent variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainLimit {
    /// The limit value itself is admitted
    Inclusive(f64),
    /// The limit value itself is rejected
    Exclusive(f64),
}

impl DomainLimit {
    pub fn value(&self) -> f64 {
        match self {
            DomainLimit::Inclusive(v) | DomainLimit::Exclusive(v) => *v,
        }
    }

    fn admits_as_lower(&self, x: f64) -> bool {
        match self {
            DomainLimit::Inclusive(v) => x >= *v,
            DomainLimit::Exclusive(v) => x > *v,
        }
    }

    fn admits_as_upper(&self, x: f64) -> bool {
        match self {
            DomainLimit::Inclusive(v) => x <= *v,
            DomainLimit::Exclusive(v) => x < *v,
        }
    }
}

/// One row of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint<const N: usize> {
    pub x: f64,
    pub values: [f64; N],
}

/// Result of a lookup, with a flag telling whether a clamp was applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableValue<const N: usize> {
    pub values: [f64; N],
    pub clamped: bool,
}

/// Ordered, strictly increasing lookup table with `N` dependent columns.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable<const N: usize> {
    source: ClauseRef,
    breakpoints: Vec<Breakpoint<N>>,
    policy: BoundaryPolicy,
    lower_limit: Option<DomainLimit>,
    upper_limit: Option<DomainLimit>,
}

impl<const N: usize> InterpolationTable<N> {
    /// Build a table from `(x, [y; N])` rows.
    ///
    /// Fails when the table is empty, when any value is not finite, or when
    /// the x-values are not strictly increasing (duplicates included).
    pub fn new(
        source: ClauseRef,
        rows: impl IntoIterator<Item = (f64, [f64; N])>,
        policy: BoundaryPolicy,
    ) -> CalcResult<Self> {
        let breakpoints: Vec<Breakpoint<N>> = rows
            .into_iter()
            .map(|(x, values)| Breakpoint { x, values })
            .collect();

        if breakpoints.is_empty() {
            return Err(CalcError::invalid_input(
                source.citation(),
                "[]",
                "Table needs at least one breakpoint",
            ));
        }
        for bp in &breakpoints {
            ensure_finite("breakpoint", bp.x)?;
            for v in bp.values {
                ensure_finite("breakpoint value", v)?;
            }
        }
        if let Some(pair) = breakpoints.windows(2).find(|w| w[1].x <= w[0].x) {
            return Err(CalcError::invalid_input(
                source.citation(),
                format!("{} after {}", pair[1].x, pair[0].x),
                "Breakpoints must be strictly increasing",
            ));
        }

        Ok(Self {
            source,
            breakpoints,
            policy,
            lower_limit: None,
            upper_limit: None,
        })
    }

    /// Reject inputs below (or at, if exclusive) `limit` regardless of policy
    pub fn with_lower_limit(mut self, limit: DomainLimit) -> Self {
        self.lower_limit = Some(limit);
        self
    }

    /// Reject inputs above (or at, if exclusive) `limit` regardless of policy
    pub fn with_upper_limit(mut self, limit: DomainLimit) -> Self {
        self.upper_limit = Some(limit);
        self
    }

    pub fn source(&self) -> &ClauseRef {
        &self.source
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn breakpoints(&self) -> &[Breakpoint<N>] {
        &self.breakpoints
    }

    fn first(&self) -> &Breakpoint<N> {
        &self.breakpoints[0]
    }

    fn last(&self) -> &Breakpoint<N> {
        &self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Range admitted by the table, for error reporting
    fn valid_range(&self) -> (f64, f64) {
        let min = match (self.policy, self.lower_limit) {
            (_, Some(limit)) => limit.value(),
            (BoundaryPolicy::Reject, None) => self.first().x,
            (BoundaryPolicy::Clamp, None) => f64::MIN,
        };
        let max = match (self.policy, self.upper_limit) {
            (_, Some(limit)) => limit.value(),
            (BoundaryPolicy::Reject, None) => self.last().x,
            (BoundaryPolicy::Clamp, None) => f64::MAX,
        };
        (min, max)
    }

    fn domain_error(&self, x: f64) -> CalcError {
        let (min, max) = self.valid_range();
        CalcError::domain(self.source.citation(), x, min, max)
    }

    /// Look up `x`, reporting whether a clamp was applied.
    pub fn evaluate(&self, x: f64) -> CalcResult<TableValue<N>> {
        ensure_finite(&self.source.citation(), x)?;

        if let Some(limit) = self.lower_limit {
            if !limit.admits_as_lower(x) {
                return Err(self.domain_error(x));
            }
        }
        if let Some(limit) = self.upper_limit {
            if !limit.admits_as_upper(x) {
                return Err(self.domain_error(x));
            }
        }

        let first = self.first();
        let last = self.last();
        if x < first.x || x > last.x {
            return match self.policy {
                BoundaryPolicy::Reject => Err(self.domain_error(x)),
                BoundaryPolicy::Clamp => {
                    let edge = if x < first.x { first } else { last };
                    warn!(table = %self.source, x, clamped_to = edge.x, "table lookup clamped");
                    Ok(TableValue {
                        values: edge.values,
                        clamped: true,
                    })
                }
            };
        }

        // First breakpoint with bp.x >= x; exists because x <= last.x
        let idx = self.breakpoints.partition_point(|bp| bp.x < x);
        let upper = &self.breakpoints[idx];
        if upper.x == x {
            return Ok(TableValue {
                values: upper.values,
                clamped: false,
            });
        }
        let lower = &self.breakpoints[idx - 1];
        let t = (x - lower.x) / (upper.x - lower.x);

        let mut values = [0.0; N];
        for (i, value) in values.iter_mut().enumerate() {
            let y0 = lower.values[i];
            let y1 = upper.values[i];
            // Keep the result inside [y0, y1] despite rounding in y1 - y0
            *value = (y0 + (y1 - y0) * t).clamp(y0.min(y1), y0.max(y1));
        }
        Ok(TableValue {
            values,
            clamped: false,
        })
    }

    /// Look up `x` and return the dependent values.
    pub fn lookup(&self, x: f64) -> CalcResult<[f64; N]> {
        self.evaluate(x).map(|v| v.values)
    }

    /// Look up `x`, then rescale each column for `input` with a power law.
    pub fn lookup_scaled(&self, x: f64, scaling: &PowerLawScaling<N>, input: f64) -> CalcResult<[f64; N]> {
        let values = self.lookup(x)?;
        scaling.apply(values, input)
    }
}

impl InterpolationTable<1> {
    /// Convenience lookup for single-column tables
    pub fn lookup_scalar(&self, x: f64) -> CalcResult<f64> {
        self.lookup(x).map(|[y]| y)
    }
}

/// Post-interpolation multiplier `(input / reference) ^ exponent` per column.
///
/// Tables tabulated for one reference parameter (Table 12 is computed for a
/// 33 m/s basic wind speed) are rescaled with this instead of per-table code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawScaling<const N: usize> {
    pub reference: f64,
    pub exponents: [f64; N],
}

impl<const N: usize> PowerLawScaling<N> {
    pub const fn new(reference: f64, exponents: [f64; N]) -> Self {
        Self { reference, exponents }
    }

    /// Multipliers for each column at `input`
    pub fn factors(&self, input: f64) -> CalcResult<[f64; N]> {
        ensure_positive("scaling input", input)?;
        let ratio = input / self.reference;
        let mut factors = [1.0; N];
        for (factor, exponent) in factors.iter_mut().zip(self.exponents) {
            *factor = ratio.powf(exponent);
        }
        Ok(factors)
    }

    /// Apply the multipliers to interpolated values
    pub fn apply(&self, values: [f64; N], input: f64) -> CalcResult<[f64; N]> {
        let factors = self.factors(input)?;
        let mut scaled = values;
        for (v, f) in scaled.iter_mut().zip(factors) {
            *v *= f;
        }
        Ok(scaled)
    }
}
