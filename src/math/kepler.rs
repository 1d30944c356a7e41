use crate::error::Error;
use crate::math::root_finding::newton_higher_order;

/// Absolute tolerance on the eccentric-anomaly iterate.
pub const KEPLER_TOLERANCE: f64 = 1e-12;
/// Iteration cap for the solver. Generous; the fifth-order step usually
/// lands within a handful of iterations even at e = 0.99.
pub const KEPLER_MAX_ITERATIONS: usize = 50;

/// Solution of Kepler's equation M = E - e sin(E).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
    /// False if the iteration cap was hit first. `eccentric_anomaly` is then
    /// the last iterate, which the caller may still accept as best-effort.
    pub converged: bool,
}

/// Solves Kepler's equation for the eccentric anomaly.
///
/// Any real mean anomaly is accepted (the equation is 2pi-periodic).
/// Eccentricity outside [0, 1) is rejected. The equation has no closed form,
/// so we root-find on f(E) = E - e sin(E) - M starting from E = M; the
/// higher-order correction in the iteration keeps it from diverging near
/// periapsis at high eccentricity, where plain Newton is notoriously shaky.
pub fn mean_to_eccentric(mean_anomaly: f64, e: f64) -> Result<KeplerSolution, Error> {
    check_eccentricity(e)?;

    let result = newton_higher_order(
        |x: f64| (x - e * x.sin() - mean_anomaly, 1.0 - e * x.cos(), e * x.sin()),
        mean_anomaly,
        KEPLER_TOLERANCE,
        KEPLER_MAX_ITERATIONS,
    );

    Ok(KeplerSolution {
        eccentric_anomaly: result.root,
        iterations: result.iterations,
        converged: result.converged,
    })
}

pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

#[inline]
fn eccentric_factor(e: f64) -> f64 {
    ((1.0 - e) / (1.0 + e)).sqrt()
}

pub fn eccentric_to_true(eccentric_anomaly: f64, e: f64) -> f64 {
    // We have that tan(E/2) = sqrt((1-e)/(1+e)) * tan(theta/2)
    let tan_half_ecc = (eccentric_anomaly / 2.0).tan();
    let tan_half_theta = tan_half_ecc / eccentric_factor(e);
    2.0 * tan_half_theta.atan()
}

pub fn true_to_eccentric(true_anomaly: f64, e: f64) -> f64 {
    let tan_half_theta = (true_anomaly / 2.0).tan();
    let tan_half_ecc = tan_half_theta * eccentric_factor(e);
    2.0 * tan_half_ecc.atan()
}

pub fn mean_to_true(mean_anomaly: f64, e: f64) -> Result<f64, Error> {
    let solution = mean_to_eccentric(mean_anomaly, e)?;
    Ok(eccentric_to_true(solution.eccentric_anomaly, e))
}

pub fn true_to_mean(true_anomaly: f64, e: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, e), e)
}

fn check_eccentricity(e: f64) -> Result<(), Error> {
    if (0.0..1.0).contains(&e) {
        Ok(())
    } else {
        Err(Error::InvalidEccentricity(e))
    }
}
