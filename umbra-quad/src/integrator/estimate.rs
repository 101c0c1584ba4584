/// The best available integral estimate when a call ends without converging.
///
/// Attached to recoverable integration errors so callers can inspect how far
/// the subdivision got, retry with a larger budget, or accept the estimate
/// together with its error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Integral estimate, sign-adjusted for reversed bounds.
    pub value: f64,
    /// Sum of the local error estimates over all segments.
    pub error: f64,
    /// Number of segments held when the call ended.
    pub intervals: usize,
}
