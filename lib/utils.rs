//! Miscellaneous tools: sampling grids and simple quadrature.
//!
//! `linspace` and `trapz` are only built for tests, where they check
//! normalization integrals.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Generate `n` evenly spaced points over `[start, end]`, inclusive.
#[cfg(test)]
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> nd::Array1<f64> {
    nd::Array1::linspace(start, end, n)
}

/// Generate `count` points `(i - center) * extent / center` for
/// `i = 0..count`.
///
/// With `count = 2 * center + 1` this spans `[-extent, extent]` and contains
/// the origin exactly.
///
/// *Panics if `center` is 0*.
pub fn centered_grid(count: usize, center: usize, extent: f64)
    -> nd::Array1<f64>
{
    assert!(center > 0, "centered_grid: center index must be positive");
    let c = center as f64;
    (0..count)
        .map(|i| (i as f64 - c) * extent / c)
        .collect()
}

/// Generate `count` points `(i - offset) * step` for `i = 0..count`.
pub fn stepped_grid(count: usize, offset: usize, step: f64)
    -> nd::Array1<f64>
{
    let o = offset as f64;
    (0..count)
        .map(|i| (i as f64 - o) * step)
        .collect()
}

/// Riemann sum `Σ y[i] dx` over every sample, endpoints included.
pub fn riemann<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    y.iter().fold(A::zero(), |acc, yk| acc + *yk) * dx
}

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
#[cfg(test)]
pub(crate) fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_grid_contains_origin() {
        let x = centered_grid(201, 100, 10.0);
        assert_eq!(x.len(), 201);
        assert_eq!(x[0], -10.0);
        assert_eq!(x[100], 0.0);
        assert_eq!(x[200], 10.0);
        assert_relative_eq!(x[1] - x[0], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn asymmetric_centered_grid() {
        let x = centered_grid(50, 25, 8.0);
        assert_eq!(x.len(), 50);
        assert_eq!(x[0], -8.0);
        assert_eq!(x[25], 0.0);
        assert_relative_eq!(x[49], 8.0 * 24.0 / 25.0, epsilon = 1e-12);
    }

    #[test]
    fn stepped_grids() {
        let t = stepped_grid(50, 0, 0.5);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[49], 24.5);
        let p = stepped_grid(201, 100, 0.1);
        assert_eq!(p[100], 0.0);
        assert_relative_eq!(p[0], -10.0, epsilon = 1e-12);
    }

    #[test]
    fn quadrature() {
        let x = linspace(0.0, 1.0, 101);
        let y = x.mapv(|xk| xk * xk);
        assert_relative_eq!(trapz(&y, 0.01), 1.0 / 3.0, epsilon = 1e-4);
        let ones: nd::Array1<f64> = nd::Array1::ones(10);
        assert_relative_eq!(riemann(&ones, 0.5), 5.0);
    }
}
