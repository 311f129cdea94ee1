//! Coarse-to-fine grid search for black-box optimization.
//!
//! Given a scoring function over a bounded box of `N` real parameters,
//! [`grid::solve`] repeatedly sweeps a full lattice over the current
//! search window, then re-centers a narrower window on the best point
//! found so far. It suits objectives that are cheap to evaluate but
//! unsuitable for gradient methods: non-differentiable, non-convex, or
//! otherwise opaque.
//!
//! # Example
//!
//! Maximize `f(a, b, c) = a - b - (c - 2)^2` over `a ∈ [0, 4]`,
//! `b ∈ [0, 5]`, `c ∈ [0, 6]`:
//!
//! ```
//! use std::convert::Infallible;
//!
//! use gridest::{Maximize, Objective, grid};
//!
//! struct Ridge;
//!
//! impl Objective<3> for Ridge {
//!     type Goal = Maximize;
//!     type Error = Infallible;
//!
//!     fn score(&self, x: &[f64; 3]) -> Result<f64, Infallible> {
//!         Ok(x[0] - x[1] - (x[2] - 2.0).powi(2))
//!     }
//! }
//!
//! let bounds = [[0.0, 4.0], [0.0, 5.0], [0.0, 6.0]];
//! let config = grid::Config { zones: 10, steps: 3 };
//! let solution = grid::solve_unobserved(&Ridge, bounds, &config)?;
//!
//! assert!((solution.x[0] - 4.0).abs() < 0.1);
//! assert!((solution.x[1] - 0.0).abs() < 0.1);
//! assert!((solution.x[2] - 2.0).abs() < 0.1);
//! # Ok::<(), gridest::grid::Error>(())
//! ```

mod goal;
mod objective;
mod observe;

pub mod grid;

pub use goal::{Goal, Maximize, Minimize};
pub use objective::Objective;
pub use observe::Observer;
