/// Defines the optimization direction.
///
/// Direction is data rather than a branch at every comparison site: the
/// solver asks the goal for its starting sentinel and for a strict
/// improvement test, and the refinement loop itself stays
/// direction-agnostic.
pub trait Goal {
    /// The score every real evaluation beats.
    ///
    /// - [`Maximize`]: `f64::NEG_INFINITY`
    /// - [`Minimize`]: `f64::INFINITY`
    fn sentinel() -> f64;

    /// Returns true if `candidate` is strictly better than `incumbent`.
    ///
    /// Strictness is what makes tie-breaking stable: on equal scores the
    /// first candidate found in enumeration order keeps the incumbency.
    fn improves(candidate: f64, incumbent: f64) -> bool;
}

/// Maximize the objective score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    #[inline]
    fn sentinel() -> f64 {
        f64::NEG_INFINITY
    }

    #[inline]
    fn improves(candidate: f64, incumbent: f64) -> bool {
        candidate > incumbent
    }
}

/// Minimize the objective score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    #[inline]
    fn sentinel() -> f64 {
        f64::INFINITY
    }

    #[inline]
    fn improves(candidate: f64, incumbent: f64) -> bool {
        candidate < incumbent
    }
}
