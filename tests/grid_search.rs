//! End-to-end grid search scenarios.

use std::convert::Infallible;

use approx::assert_relative_eq;

use gridest::{
    Maximize, Minimize, Objective,
    grid::{self, Config, Status},
};

/// `f(a, b, c) = a - b - (c - 2)^2`, maximized at (4, 0, 2) within the
/// box `[0, 4] x [0, 5] x [0, 6]`.
struct Ridge;

impl Objective<3> for Ridge {
    type Goal = Maximize;
    type Error = Infallible;

    fn score(&self, x: &[f64; 3]) -> Result<f64, Infallible> {
        Ok(x[0] - x[1] - (x[2] - 2.0).powi(2))
    }
}

/// Smooth unimodal bowl with its minimum at a configurable point.
struct Bowl<const N: usize> {
    center: [f64; N],
}

impl<const N: usize> Objective<N> for Bowl<N> {
    type Goal = Minimize;
    type Error = Infallible;

    fn score(&self, x: &[f64; N]) -> Result<f64, Infallible> {
        Ok((0..N).map(|i| (x[i] - self.center[i]).powi(2)).sum())
    }
}

/// Per-dimension precision after `steps` rounds at resolution `zones`:
/// `(upper - lower) / (zones / 2)^steps / 2`.
fn precision(bounds: [f64; 2], zones: usize, steps: usize) -> f64 {
    (bounds[1] - bounds[0]) / ((zones / 2) as f64).powi(steps as i32) / 2.0
}

#[test]
fn worked_scenario_converges_to_the_ridge_peak() {
    let bounds = [[0.0, 4.0], [0.0, 5.0], [0.0, 6.0]];
    let config = Config { zones: 10, steps: 3 };

    let solution = grid::solve_unobserved(&Ridge, bounds, &config).expect("should solve");

    assert_eq!(solution.status, Status::Completed);
    let gold = [4.0, 0.0, 2.0];
    for i in 0..3 {
        let tol = precision(bounds[i], config.zones, config.steps);
        assert!(
            (solution.x[i] - gold[i]).abs() <= tol,
            "dimension {i}: {} not within {tol} of {}",
            solution.x[i],
            gold[i],
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let bounds = [[0.0, 4.0], [0.0, 5.0], [0.0, 6.0]];
    let config = Config { zones: 10, steps: 3 };

    let first = grid::solve_unobserved(&Ridge, bounds, &config).expect("should solve");
    let second = grid::solve_unobserved(&Ridge, bounds, &config).expect("should solve");

    assert_eq!(first, second);
}

#[test]
fn result_stays_inside_the_bounds() {
    // The ridge peak sits on the boundary in a and b, so the narrowing
    // window is clamped against the box edge every step.
    let bounds = [[0.0, 4.0], [0.0, 5.0], [0.0, 6.0]];
    let config = Config { zones: 10, steps: 6 };

    let solution = grid::solve_unobserved(&Ridge, bounds, &config).expect("should solve");

    for i in 0..3 {
        assert!(
            bounds[i][0] <= solution.x[i] && solution.x[i] <= bounds[i][1],
            "dimension {i} escaped its bounds: {}",
            solution.x[i],
        );
    }
}

#[test]
fn precision_compounds_with_extra_steps() {
    let bounds = [[-3.0, 5.0], [-3.0, 5.0]];
    let bowl = Bowl {
        center: [1.25, -0.5],
    };

    for steps in 1..=5 {
        let config = Config { zones: 10, steps };
        let solution = grid::solve_unobserved(&bowl, bounds, &config).expect("should solve");
        for i in 0..2 {
            let tol = precision(bounds[i], config.zones, steps);
            assert!(
                (solution.x[i] - bowl.center[i]).abs() <= tol,
                "steps {steps}, dimension {i}: {} not within {tol} of {}",
                solution.x[i],
                bowl.center[i],
            );
        }
    }
}

#[test]
fn coarse_resolution_still_meets_its_bound() {
    let bounds = [[0.0, 1.0]];
    let bowl = Bowl { center: [0.137] };

    let config = Config { zones: 4, steps: 8 };
    let solution = grid::solve_unobserved(&bowl, bounds, &config).expect("should solve");

    let tol = precision(bounds[0], config.zones, config.steps);
    assert!((solution.x[0] - 0.137).abs() <= tol);
}

#[test]
fn default_config_resolves_an_interior_minimum_tightly() {
    let bounds = [[-10.0, 10.0], [-10.0, 10.0], [-10.0, 10.0]];
    let bowl = Bowl {
        center: [3.0, -7.5, 0.25],
    };

    let solution =
        grid::solve_unobserved(&bowl, bounds, &Config::default()).expect("should solve");

    for i in 0..3 {
        assert_relative_eq!(solution.x[i], bowl.center[i], epsilon = 1e-3);
    }
    assert_relative_eq!(solution.score, 0.0, epsilon = 1e-6);
}

#[test]
fn single_dimension_maximization() {
    // Concave parabola peaking at x = 0.6.
    struct Hump;
    impl Objective<1> for Hump {
        type Goal = Maximize;
        type Error = Infallible;

        fn score(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
            Ok(1.0 - (x[0] - 0.6).powi(2))
        }
    }

    let config = Config { zones: 10, steps: 4 };
    let solution = grid::solve_unobserved(&Hump, [[0.0, 1.0]], &config).expect("should solve");

    let tol = precision([0.0, 1.0], config.zones, config.steps);
    assert!((solution.x[0] - 0.6).abs() <= tol);
    assert_relative_eq!(solution.score, 1.0, epsilon = 1e-6);
}
