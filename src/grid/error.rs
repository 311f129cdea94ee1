use std::error::Error as StdError;

use thiserror::Error;

use super::DomainError;

/// Errors that can occur during a grid search.
#[derive(Debug, Error)]
pub enum Error {
    /// The search bounds are unusable.
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    /// The configuration is unusable.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The objective failed to score a candidate point.
    #[error("objective failed at x = {x:?}")]
    Objective {
        x: Vec<f64>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The objective produced a NaN or infinite score.
    #[error("non-finite score {score} at x = {x:?}")]
    NonFiniteScore { x: Vec<f64>, score: f64 },
}
