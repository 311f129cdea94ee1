//! Coarse-to-fine grid search.
//!
//! Each refinement step sweeps a full `(zones + 1)^N` lattice over the
//! current window, then re-centers a narrower window on the best point
//! found so far, with one grid spacing of margin on each side clamped to
//! the original bounds. Resolution compounds geometrically: away from the
//! outer bounds the window shrinks by a factor of `2 / zones` per step.

mod config;
mod domain;
mod error;
mod event;
mod odometer;
mod solution;

pub use config::Config;
pub use domain::{Domain, DomainError, Window};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use odometer::Odometer;

use crate::{Goal, Objective, Observer};

/// Searches the box `bounds` for the point optimizing `objective`.
///
/// `bounds` gives each dimension's `[lower, upper]` range. The objective
/// is evaluated sequentially, at most `steps * (zones + 1)^N` times, in a
/// fixed enumeration order; on equal scores the first point enumerated
/// wins.
/// Observers see one [`Event`] per refinement step, after the step's full
/// sweep, and may stop the search early.
///
/// # Errors
///
/// Returns an error if the bounds or config are invalid, if the objective
/// fails, or if it produces a non-finite score. Validation happens before
/// the first objective call; an objective failure aborts the search with
/// no partial result.
pub fn solve<F, Obs, const N: usize>(
    objective: &F,
    bounds: [[f64; 2]; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let domain = Domain::new(bounds)?;
    let mut window = domain.full_window();

    let mut best = *domain.lower();
    let mut best_score = F::Goal::sentinel();
    let mut evaluations = 0;

    for step in 1..=config.steps {
        let spacing = window.spacing(config.zones);

        for state in Odometer::new(config.zones) {
            let x = window.point(&state, &spacing);
            let score = objective.score(&x).map_err(|source| Error::Objective {
                x: x.to_vec(),
                source: Box::new(source),
            })?;
            evaluations += 1;

            if !score.is_finite() {
                return Err(Error::NonFiniteScore {
                    x: x.to_vec(),
                    score,
                });
            }

            // The sentinel is infinite, so the first evaluation always wins.
            if F::Goal::improves(score, best_score) {
                best_score = score;
                best = x;
            }
        }

        let event = Event {
            step,
            window: &window,
            spacing: &spacing,
            best: &best,
            score: best_score,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x: best,
                        score: best_score,
                        steps: step,
                        evaluations,
                    });
                }
            }
        }

        window.narrow(&best, &spacing, &domain);
    }

    Ok(Solution {
        status: Status::Completed,
        x: best,
        score: best_score,
        steps: config.steps,
        evaluations,
    })
}

/// Runs the grid search without observation.
///
/// # Errors
///
/// Returns an error if the bounds or config are invalid, if the objective
/// fails, or if it produces a non-finite score.
pub fn solve_unobserved<F, const N: usize>(
    objective: &F,
    bounds: [[f64; 2]; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
{
    solve(objective, bounds, config, ())
}
