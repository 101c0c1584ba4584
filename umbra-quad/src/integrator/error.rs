use std::collections::TryReserveError;

use thiserror::Error;

use super::Estimate;

/// Errors that can occur when constructing an integrator or integrating.
///
/// Every variant is recoverable from the caller's perspective: a failed
/// `integrate` call leaves the integrator valid and reusable.
#[derive(Debug, Error)]
pub enum Error {
    /// The interval budget was zero.
    #[error("max intervals must be positive")]
    InvalidMaxIntervals,

    /// The workspace could not be allocated at construction time.
    #[error("failed to allocate a workspace for {max_intervals} intervals")]
    Allocation {
        max_intervals: usize,
        #[source]
        source: TryReserveError,
    },

    /// Both tolerances were zero, or a tolerance was negative or non-finite.
    ///
    /// A request that no error estimate could ever satisfy is rejected
    /// before the integrand is evaluated.
    #[error("invalid tolerances: epsabs = {epsabs}, epsrel = {epsrel}")]
    InvalidTolerance { epsabs: f64, epsrel: f64 },

    /// An integration bound was NaN or infinite.
    #[error("integration bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    /// The interval budget ran out before the tolerances were met.
    ///
    /// Retrying with a larger budget or looser tolerances may succeed.
    #[error(
        "no convergence within {max_intervals} intervals: integral estimate {} with error bound {}",
        estimate.value,
        estimate.error
    )]
    TooManySubdivisions {
        max_intervals: usize,
        estimate: Estimate,
    },

    /// The integrand returned NaN or an infinity at `x`.
    #[error("integrand returned a non-finite value at x = {x}")]
    NonFiniteIntegrand { x: f64 },

    /// Bisection stopped reducing the error estimate.
    ///
    /// The worst segment is round-off dominated or the integrand diverges;
    /// a larger interval budget will not help.
    #[error(
        "integrand does not converge: integral estimate {} with error bound {}",
        estimate.value,
        estimate.error
    )]
    NonConvergent { estimate: Estimate },
}
