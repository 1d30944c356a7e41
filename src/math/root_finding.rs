/// Outcome of an iterative root search. When the iteration cap is hit,
/// `root` is the last iterate and `converged` is false; the caller decides
/// whether a best-effort answer is acceptable.
#[derive(Debug, Clone, Copy)]
pub struct RootFind {
    pub root: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Newton-Raphson with a higher-order correction term, sometimes called the
/// fifth-order Newton method. The closure returns (f, f', f'') at a point.
///
/// Each step is
///
///   x_next = x - 5f / (f' + sign(f') * sqrt(|16 f'^2 - 20 f f''|))
///
/// The correction under the square root keeps the step bounded where plain
/// Newton would overshoot, at the cost of one extra derivative. We stop once
/// the step falls below `tolerance`.
pub fn newton_higher_order(
    f_and_derivs: impl Fn(f64) -> (f64, f64, f64),
    initial_guess: f64,
    tolerance: f64,
    num_iterations: usize,
) -> RootFind {
    let mut x = initial_guess;

    for i in 0..num_iterations {
        let (f, f_prime, f_double_prime) = f_and_derivs(x);

        // The sign(f') factor keeps the denominator away from zero: both
        // terms have the same sign, so |denominator| >= |f'|.
        let correction = (16.0 * f_prime * f_prime - 20.0 * f * f_double_prime)
            .abs()
            .sqrt();
        let denominator = f_prime + f_prime.signum() * correction;

        let next = x - 5.0 * f / denominator;
        let step = (next - x).abs();
        x = next;

        if step < tolerance {
            return RootFind {
                root: x,
                iterations: i + 1,
                converged: true,
            };
        }
    }

    RootFind {
        root: x,
        iterations: num_iterations,
        converged: false,
    }
}
