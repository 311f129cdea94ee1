use thiserror::Error;

/// Errors that can occur when validating search bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The domain has zero dimensions.
    #[error("domain has zero dimensions")]
    Empty,
    /// A bound is NaN or infinite.
    #[error("non-finite bound in dimension {dim}")]
    NonFinite { dim: usize },
    /// A lower bound exceeds its upper bound.
    #[error("lower bound exceeds upper bound in dimension {dim}")]
    Inverted { dim: usize },
}

/// Validated axis-aligned box bounds, fixed for the lifetime of a search.
///
/// The domain is what the narrowing window is clamped against: no window,
/// and therefore no returned point, ever leaves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

impl<const N: usize> Domain<N> {
    /// Validates per-dimension `[lower, upper]` bounds.
    ///
    /// Zero-width dimensions are allowed: a pinned parameter searches a
    /// single coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `N` is zero, a bound is non-finite, or a lower
    /// bound exceeds its upper bound.
    pub fn new(bounds: [[f64; 2]; N]) -> Result<Self, DomainError> {
        if N == 0 {
            return Err(DomainError::Empty);
        }

        let mut lower = [0.0; N];
        let mut upper = [0.0; N];
        for (dim, [low, high]) in bounds.into_iter().enumerate() {
            if !low.is_finite() || !high.is_finite() {
                return Err(DomainError::NonFinite { dim });
            }
            if low > high {
                return Err(DomainError::Inverted { dim });
            }
            lower[dim] = low;
            upper[dim] = high;
        }

        Ok(Self { lower, upper })
    }

    /// Per-dimension lower bounds.
    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Per-dimension upper bounds.
    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Returns true if `x` lies inside the box in every dimension.
    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        (0..N).all(|i| self.lower[i] <= x[i] && x[i] <= self.upper[i])
    }

    /// The window covering the entire domain.
    pub(super) fn full_window(&self) -> Window<N> {
        Window {
            lower: self.lower,
            upper: self.upper,
        }
    }
}

/// The region currently being searched, always a sub-box of its [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

impl<const N: usize> Window<N> {
    /// Per-dimension current lower bounds.
    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Per-dimension current upper bounds.
    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Per-dimension grid spacing when each axis is split into `zones`
    /// equal intervals. A pinned dimension yields zero spacing.
    pub(super) fn spacing(&self, zones: usize) -> [f64; N] {
        let mut spacing = [0.0; N];
        for i in 0..N {
            spacing[i] = (self.upper[i] - self.lower[i]) / zones as f64;
        }
        spacing
    }

    /// The grid point addressed by an odometer state.
    pub(super) fn point(&self, state: &[usize; N], spacing: &[f64; N]) -> [f64; N] {
        let mut x = [0.0; N];
        for i in 0..N {
            // Rounding can push the top lattice coordinate past the bound.
            x[i] = f64::min(self.lower[i] + spacing[i] * state[i] as f64, self.upper[i]);
        }
        x
    }

    /// Re-centers the window on `best` with one grid spacing of margin on
    /// each side, clamped so it never leaves `domain`.
    ///
    /// The margin keeps the best point and its immediate grid neighbors
    /// reachable in the refined grid.
    pub(super) fn narrow(&mut self, best: &[f64; N], spacing: &[f64; N], domain: &Domain<N>) {
        for i in 0..N {
            self.lower[i] = f64::max(domain.lower[i], best[i] - spacing[i]);
            self.upper[i] = f64::min(domain.upper[i], best[i] + spacing[i]);
        }
    }
}
