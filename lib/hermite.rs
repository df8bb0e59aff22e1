//! Physicists' Hermite polynomials and the exact factorial needed to normalize
//! harmonic oscillator eigenstates.
//!
//! ```
//! use qbloom::hermite::hermite;
//!
//! let x = 0.7;
//! assert!((hermite(3, x) - (8.0 * x.powi(3) - 12.0 * x)).abs() < 1e-12);
//! ```

/// Evaluate the physicists' Hermite polynomial *H*<sub>*n*</sub>(*x*) via the
/// three-term recurrence
/// ```text
/// H[0] = 1
/// H[1] = 2 x
/// H[k] = 2 x H[k - 1] - 2 (k - 1) H[k - 2]
/// ```
/// in *O*(*n*) time and constant space.
pub fn hermite(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0 * x,
        _ => {
            let mut hprev: f64 = 1.0;
            let mut h: f64 = 2.0 * x;
            let mut hnext: f64;
            for k in 2..=n {
                hnext = 2.0 * x * h - 2.0 * f64::from(k - 1) * hprev;
                hprev = h;
                h = hnext;
            }
            h
        },
    }
}

/// Exact integer factorial.
///
/// *Overflows for `n > 20`*; quantum numbers are limited to `n <= 10`.
pub fn factorial(n: u32) -> u64 {
    (1..=u64::from(n)).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const XS: [f64; 6] = [-2.5, -1.0, -0.3, 0.0, 0.8, 3.1];

    #[test]
    fn closed_forms() {
        for x in XS {
            assert_eq!(hermite(0, x), 1.0);
            assert_eq!(hermite(1, x), 2.0 * x);
            assert_relative_eq!(
                hermite(2, x), 4.0 * x * x - 2.0, epsilon = 1e-12);
            assert_relative_eq!(
                hermite(3, x), 8.0 * x.powi(3) - 12.0 * x, epsilon = 1e-12);
            assert_relative_eq!(
                hermite(4, x),
                16.0 * x.powi(4) - 48.0 * x * x + 12.0,
                epsilon = 1e-10,
            );
        }
    }

    #[test]
    fn values_at_origin() {
        // H_n(0) = 0 for odd n, (-1)^(n/2) n! / (n/2)! for even n
        assert_eq!(hermite(2, 0.0), -2.0);
        assert_eq!(hermite(4, 0.0), 12.0);
        assert_eq!(hermite(6, 0.0), -120.0);
        assert_eq!(hermite(7, 0.0), 0.0);
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }
}
