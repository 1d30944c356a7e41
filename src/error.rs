use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Only bound ellipses are representable; e >= 1 or e < 0 is rejected
    /// up front rather than fed to the solver.
    #[error("eccentricity must be in [0, 1) for a bound orbit, got {0}")]
    InvalidEccentricity(f64),

    #[error("semimajor axis must be positive, got {0}")]
    InvalidSemimajorAxis(f64),
}
