//! Closed-form reference values for the Monte Carlo estimates.
//!
//! These are the exact quantities the simulation's empirical rates converge
//! to, handy for calibrating tolerances in tests and for judging whether an
//! observed deviation is noise or a broken sampler:
//! - per-item inclusion probability `m/N` under uniform without-replacement
//!   sampling;
//! - the standard error of one empirical rate after `t` trials;
//! - the exact (negative) covariance between two items' inclusion indicators.

use crate::sampler::check_draw;
use crate::{InclusionError, Result};

/// Exact per-item inclusion probability under a uniform `m`-of-`n` draw
/// without replacement: \(p = m/n\), the same for every item.
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0` or `m > n`.
pub fn inclusion_probability(n: usize, m: usize) -> Result<f64> {
    check_draw(n, m)?;
    Ok(m as f64 / n as f64)
}

/// Standard error of one item's empirical inclusion rate after `t` trials:
/// \(\sqrt{p(1-p)/t}\) with \(p = m/n\).
///
/// Each trial's indicator is Bernoulli(\(p\)) and trials are independent, so
/// this is the usual binomial-mean standard error. Useful for sizing test
/// tolerances: a deviation of a few standard errors is noise, tens of them is
/// a bug.
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0`, `m > n`, or
/// `t == 0`.
pub fn estimator_std_error(n: usize, m: usize, t: usize) -> Result<f64> {
    let p = inclusion_probability(n, m)?;
    if t == 0 {
        return Err(InclusionError::InvalidArgument("trial count t must be >= 1"));
    }
    Ok((p * (1.0 - p) / t as f64).sqrt())
}

/// Exact covariance between two distinct items' inclusion indicators in one
/// uniform `m`-of-`n` draw without replacement:
///
/// \[
/// \operatorname{Cov}(I_i, I_j) = -\frac{m(n-m)}{n^2(n-1)}, \quad i \ne j.
/// \]
///
/// Negative whenever `0 < m < n`: including one item crowds out another.
/// Zero at the boundaries (`m == 0`, `m == n`) and, by convention, when
/// `n == 1` (there is no second item).
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0` or `m > n`.
pub fn indicator_covariance(n: usize, m: usize) -> Result<f64> {
    check_draw(n, m)?;
    if n == 1 {
        return Ok(0.0);
    }
    let n_f = n as f64;
    let m_f = m as f64;
    Ok(-(m_f * (n_f - m_f)) / (n_f * n_f * (n_f - 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusion_probability_exact_values() {
        assert!((inclusion_probability(10, 3).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(inclusion_probability(7, 0).unwrap(), 0.0);
        assert_eq!(inclusion_probability(7, 7).unwrap(), 1.0);
        assert!(inclusion_probability(0, 0).is_err());
        assert!(inclusion_probability(3, 4).is_err());
    }

    #[test]
    fn std_error_shrinks_with_more_trials() {
        let coarse = estimator_std_error(10, 3, 100).unwrap();
        let fine = estimator_std_error(10, 3, 10_000).unwrap();
        // 100x the trials => 10x smaller standard error.
        assert!((coarse / fine - 10.0).abs() < 1e-9);
        assert!(estimator_std_error(10, 3, 0).is_err());
    }

    #[test]
    fn covariance_sign_and_boundaries() {
        assert!(indicator_covariance(10, 3).unwrap() < 0.0);
        assert_eq!(indicator_covariance(10, 0).unwrap(), 0.0);
        assert_eq!(indicator_covariance(10, 10).unwrap(), 0.0);
        assert_eq!(indicator_covariance(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn covariances_balance_the_fixed_sum() {
        // The indicators sum to the constant m, so Var(sum) = 0:
        // n * p(1-p) + n(n-1) * cov == 0.
        for (n, m) in [(10usize, 3usize), (5, 2), (8, 8), (6, 0), (2, 1)] {
            let p = inclusion_probability(n, m).unwrap();
            let cov = indicator_covariance(n, m).unwrap();
            let total =
                n as f64 * p * (1.0 - p) + (n * (n - 1)) as f64 * cov;
            assert!(total.abs() < 1e-12, "Var(sum) != 0 for n={n} m={m}");
        }
    }
}
