/// Configuration for the grid search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of equal intervals each dimension's window is split into per
    /// step, giving `zones + 1` grid coordinates per axis including both
    /// endpoints.
    pub zones: usize,
    /// Number of refinement rounds. Each round sweeps the full
    /// `(zones + 1)^N` grid over the current window, then narrows the
    /// window around the best point found so far.
    pub steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { zones: 10, steps: 8 }
    }
}

impl Config {
    /// Validates that the search performs real work.
    ///
    /// Zero steps is rejected rather than given a degenerate result: a
    /// search that never evaluates the objective has no best point to
    /// report.
    ///
    /// # Errors
    ///
    /// Returns an error if `zones` or `steps` is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.zones == 0 {
            return Err("zones must be at least 1");
        }
        if self.steps == 0 {
            return Err("steps must be at least 1; zero steps evaluates nothing");
        }
        Ok(())
    }

    /// Exact number of objective evaluations a full run performs:
    /// `steps * (zones + 1)^N`, or `None` on overflow.
    #[must_use]
    pub fn evaluations<const N: usize>(&self) -> Option<usize> {
        let exp = u32::try_from(N).ok()?;
        self.zones
            .checked_add(1)?
            .checked_pow(exp)?
            .checked_mul(self.steps)
    }
}
