use super::Window;

/// Control actions supported by the grid search.
pub enum Action {
    /// Stop the search and return the incumbent best point.
    StopEarly,
}

/// Progress event emitted after each refinement step's full grid sweep.
pub struct Event<'a, const N: usize> {
    /// Refinement step counter (1-based).
    pub step: usize,
    /// The window that was searched this step.
    pub window: &'a Window<N>,
    /// Grid spacing used this step, per dimension.
    pub spacing: &'a [f64; N],
    /// Best point seen so far, across all steps.
    pub best: &'a [f64; N],
    /// Score at the best point.
    pub score: f64,
}
