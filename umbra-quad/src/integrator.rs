mod error;
mod estimate;

pub use error::Error;
pub use estimate::Estimate;

use crate::{rule::Rule, workspace::Workspace};

/// Bisections that neither refine the value nor shrink the error before the
/// integrand is declared non-convergent.
const MAX_STALLED_BISECTIONS: usize = 20;

/// An adaptive definite-integral evaluator.
///
/// An integrator owns a bounded workspace sized at construction time and
/// reuses it across calls, so repeated integrations allocate nothing. Each
/// call subdivides the interval where the local error estimate is largest
/// until the requested tolerances are met or the interval budget runs out.
///
/// The cumulative [`num_intervals`](Integrator::num_intervals) counter
/// reports how many subintervals all calls so far have consumed, which is an
/// indication of how often the integrands have been evaluated. Surrounding
/// code reads it to profile and calibrate integration workloads.
///
/// # Examples
///
/// ```
/// use umbra_quad::Integrator;
///
/// let mut integrator = Integrator::new(100)?;
/// let value = integrator.integrate(f64::sin, 0.0, std::f64::consts::PI, 1e-10, 0.0)?;
/// assert!((value - 2.0).abs() < 1e-9);
/// # Ok::<(), umbra_quad::Error>(())
/// ```
#[derive(Debug)]
pub struct Integrator {
    workspace: Workspace,
    rule: Rule,
    num_intervals: usize,
}

impl Integrator {
    /// Creates an integrator that uses at most `max_intervals` subintervals
    /// per call, with the default rule pair.
    ///
    /// The workspace is allocated eagerly, so a successfully constructed
    /// integrator never allocates during integration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_intervals` is zero or the workspace cannot
    /// be allocated.
    pub fn new(max_intervals: usize) -> Result<Self, Error> {
        Self::with_rule(max_intervals, Rule::default())
    }

    /// Creates an integrator with an explicit Gauss-Kronrod rule pair.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_intervals` is zero or the workspace cannot
    /// be allocated.
    pub fn with_rule(max_intervals: usize, rule: Rule) -> Result<Self, Error> {
        if max_intervals == 0 {
            return Err(Error::InvalidMaxIntervals);
        }
        let workspace = Workspace::new(max_intervals).map_err(|source| Error::Allocation {
            max_intervals,
            source,
        })?;
        Ok(Self {
            workspace,
            rule,
            num_intervals: 0,
        })
    }

    /// Upper bound on the subintervals any single call may use.
    pub fn max_intervals(&self) -> usize {
        self.workspace.capacity()
    }

    /// The embedded rule pair this integrator evaluates per segment.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Cumulative count of subintervals consumed by calls on this instance,
    /// since construction or the last [`reset_num_intervals`] call.
    ///
    /// [`reset_num_intervals`]: Integrator::reset_num_intervals
    pub fn num_intervals(&self) -> usize {
        self.num_intervals
    }

    /// Resets the cumulative subinterval counter to zero.
    pub fn reset_num_intervals(&mut self) {
        self.num_intervals = 0;
    }

    /// Estimates the definite integral of `f` from `from` to `to`.
    ///
    /// Converges once the summed error estimate satisfies
    /// `total_error <= max(epsabs, epsrel * |total_integral|)`. Reversed
    /// bounds integrate the forward interval and negate the result; equal
    /// bounds return `0.0` without evaluating `f`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerances are invalid (both zero, negative,
    /// or non-finite), a bound is non-finite, the integrand produces a
    /// non-finite value, the interval budget runs out, or bisection stops
    /// reducing the error estimate. Budget and convergence failures carry
    /// the best available [`Estimate`]. The integrator remains valid and
    /// reusable after any failure.
    pub fn integrate<F>(
        &mut self,
        f: F,
        from: f64,
        to: f64,
        epsabs: f64,
        epsrel: f64,
    ) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        validate_tolerances(epsabs, epsrel)?;
        validate_bound(from)?;
        validate_bound(to)?;

        #[allow(clippy::float_cmp)]
        if from == to {
            return Ok(0.0);
        }

        let outcome = self.subdivide(&f, from, to, epsabs, epsrel);
        self.num_intervals += self.workspace.len();
        outcome
    }

    /// Runs the adaptive subdivision loop over a validated interval.
    fn subdivide<F>(
        &mut self,
        f: &F,
        from: f64,
        to: f64,
        epsabs: f64,
        epsrel: f64,
    ) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper, sign) = if from < to {
            (from, to, 1.0)
        } else {
            (to, from, -1.0)
        };

        self.workspace.clear();
        let whole = self
            .rule
            .evaluate(f, lower, upper)
            .map_err(|sample| Error::NonFiniteIntegrand { x: sample.x })?;
        let mut total = whole.integral;
        let mut total_error = whole.error;
        self.workspace.push(whole);

        let mut stalled = 0_usize;
        while total_error > epsabs.max(epsrel * total.abs()) {
            if self.workspace.len() == self.workspace.capacity() {
                return Err(Error::TooManySubdivisions {
                    max_intervals: self.workspace.capacity(),
                    estimate: self.best_estimate(sign),
                });
            }

            let Some(index) = self.workspace.worst() else {
                break;
            };
            let parent = self.workspace.segment(index);

            let midpoint = parent.midpoint();
            if midpoint <= parent.left || midpoint >= parent.right {
                // The worst segment cannot be bisected in floating point.
                return Err(Error::NonConvergent {
                    estimate: self.best_estimate(sign),
                });
            }

            let below = self
                .rule
                .evaluate(f, parent.left, midpoint)
                .map_err(|sample| Error::NonFiniteIntegrand { x: sample.x })?;
            let above = self
                .rule
                .evaluate(f, midpoint, parent.right)
                .map_err(|sample| Error::NonFiniteIntegrand { x: sample.x })?;

            let refined = below.integral + above.integral;
            let refined_error = below.error + above.error;

            // Round-off guard: the bisection left the value essentially
            // unchanged while the error estimate failed to shrink.
            if (refined - parent.integral).abs() <= 1e-5 * refined.abs()
                && refined_error >= 0.99 * parent.error
            {
                stalled += 1;
                if stalled >= MAX_STALLED_BISECTIONS {
                    return Err(Error::NonConvergent {
                        estimate: self.best_estimate(sign),
                    });
                }
            }

            total += refined - parent.integral;
            total_error += refined_error - parent.error;
            self.workspace.split(index, below, above);
        }

        let (integral, _) = self.workspace.totals();
        Ok(sign * integral)
    }

    /// Best current estimate, sign-adjusted, from the workspace totals.
    fn best_estimate(&self, sign: f64) -> Estimate {
        let (integral, error) = self.workspace.totals();
        Estimate {
            value: sign * integral,
            error,
            intervals: self.workspace.len(),
        }
    }
}

/// A cloned integrator is fully independent of its source: it allocates a
/// fresh, empty workspace of equal capacity and starts its counter at the
/// value captured at clone time.
impl Clone for Integrator {
    fn clone(&self) -> Self {
        Self {
            workspace: self.workspace.clone(),
            rule: self.rule,
            num_intervals: self.num_intervals,
        }
    }
}

fn validate_tolerances(epsabs: f64, epsrel: f64) -> Result<(), Error> {
    let unusable = |tolerance: f64| !tolerance.is_finite() || tolerance < 0.0;
    if unusable(epsabs) || unusable(epsrel) || (epsabs == 0.0 && epsrel == 0.0) {
        return Err(Error::InvalidTolerance { epsabs, epsrel });
    }
    Ok(())
}

fn validate_bound(value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteBound { value })
    }
}
