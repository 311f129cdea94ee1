/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran every configured refinement step.
    Completed,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a grid search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final search status.
    pub status: Status,
    /// Best point found, within the original bounds in every dimension.
    pub x: [f64; N],
    /// Score at the best point.
    pub score: f64,
    /// Refinement steps completed when the search finished.
    pub steps: usize,
    /// Total objective evaluations performed.
    pub evaluations: usize,
}
