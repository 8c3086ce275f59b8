//! Standard optimization test functions.
//!
//! All functions are pure, total over their documented domains, and reach
//! their global minimum of 0 at the origin unless noted otherwise. Default
//! search bounds and known optima are catalogued in
//! [`FunctionRegistry::standard`](crate::registry::FunctionRegistry::standard).

use core::f64::consts::PI;

/// Sphere function: unimodal, convex. Global minimum f(0,...,0) = 0.
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// High-conditioned elliptic function: sphere with axis weights spanning
/// six orders of magnitude. Global minimum f(0,...,0) = 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elliptic(x: &[f64]) -> f64 {
    let n = x.len();
    x.iter()
        .enumerate()
        .map(|(i, xi)| {
            let weight = if n > 1 {
                10f64.powf(6.0 * i as f64 / (n - 1) as f64)
            } else {
                1.0
            };
            weight * xi * xi
        })
        .sum()
}

/// Cigar function: one cheap axis, the rest scaled by 10^6.
/// Global minimum f(0,...,0) = 0.
#[must_use]
pub fn cigar(x: &[f64]) -> f64 {
    match x.split_first() {
        Some((&head, tail)) => {
            head * head + 1e6 * tail.iter().map(|xi| xi * xi).sum::<f64>()
        }
        None => 0.0,
    }
}

/// Cigtab function: cigar with an additional 10^8-weighted tail axis.
/// Global minimum f(0,...,0) = 0.
#[must_use]
pub fn cigtab(x: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 {
        return sphere(x);
    }
    let middle: f64 = x[1..n - 1].iter().map(|xi| xi * xi).sum();
    x[0] * x[0] + 1e8 * x[n - 1] * x[n - 1] + 1e4 * middle
}

/// Schwefel problem 1.2 (double sum): non-separable quadratic.
/// Global minimum f(0,...,0) = 0.
#[must_use]
pub fn schwefel_1_2(x: &[f64]) -> f64 {
    let mut prefix = 0.0;
    x.iter()
        .map(|xi| {
            prefix += xi;
            prefix * prefix
        })
        .sum()
}

/// Schwefel problem 2.21: maximum absolute coordinate.
/// Global minimum f(0,...,0) = 0.
#[must_use]
pub fn schwefel_2_21(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi.abs()).fold(0.0, f64::max)
}

/// Schwefel problem 2.22: sum plus product of absolute coordinates.
/// Global minimum f(0,...,0) = 0.
#[must_use]
pub fn schwefel_2_22(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
    let product: f64 = x.iter().map(|xi| xi.abs()).product();
    sum + product
}

/// Rosenbrock function: narrow curved valley. Global minimum f(1,...,1) = 0.
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Step function: sphere of coordinates rounded to the nearest integer,
/// flat plateaus everywhere. Global minimum 0 on the plateau around the origin.
#[must_use]
pub fn step(x: &[f64]) -> f64 {
    x.iter()
        .map(|xi| {
            let rounded = (xi + 0.5).floor();
            rounded * rounded
        })
        .sum()
}

/// Quartic function with index-graded weights. Global minimum f(0,...,0) = 0.
///
/// The classic "noisy quartic" benchmark is this function plus U[0, 1)
/// noise; the noise is added by the problem wrapper
/// ([`BenchmarkProblem::with_noise`](crate::BenchmarkProblem::with_noise)),
/// not here, so the deterministic core stays testable.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quartic(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, xi)| (i + 1) as f64 * xi.powi(4))
        .sum()
}

/// Rastrigin function: highly multimodal. Global minimum f(0,...,0) = 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley function: nearly flat with a deep well. Global minimum f(0,...,0) = 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + 20.0
        + core::f64::consts::E
}

/// Griewank function: multimodal with a weak product coupling.
/// Global minimum f(0,...,0) = 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let product: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - product + 1.0
}
