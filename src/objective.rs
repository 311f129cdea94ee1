use crate::Goal;

/// A black-box scoring function over an `N`-dimensional point.
///
/// The solver treats implementations as opaque, deterministic, and
/// side-effect-free: it calls [`score`](Objective::score) once per grid
/// point and never inspects or caches anything beyond the returned value.
pub trait Objective<const N: usize> {
    /// Whether the search maximizes or minimizes the score.
    type Goal: Goal;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scores a candidate point.
    ///
    /// # Errors
    ///
    /// Returns an error if the score cannot be computed. The solver does
    /// not catch it; the error aborts the search and propagates to the
    /// caller unchanged.
    fn score(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}
