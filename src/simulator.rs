//! The trial loop: repeated draws and per-item rate aggregation.
//!
//! [`simulate`] runs `t` independent `m`-of-`N` draws and assembles a
//! [`TrialMatrix`]: trial `i` becomes column `i`, and a trailing column holds
//! each item's mean indicator (its empirical inclusion rate). As
//! \(t \to \infty\) every rate converges to the exact inclusion probability
//! \(m/N\), which is what makes the matrix useful for auditing a
//! randomization procedure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sampler::{check_draw, sample_indicator};
use crate::{InclusionError, Result, TrialMatrix};

/// Run `t` independent uniform `m`-of-`n` draws and aggregate them into a
/// [`TrialMatrix`] of shape `n × (t + 1)`.
///
/// Columns `0..t` are the per-trial 0/1 indicators; column `t` is the
/// per-item mean across trials (selection count divided by `t`).
///
/// All parameters are validated before any entropy is consumed: the call
/// either returns the full matrix or an error, never a partial result.
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0`, `m > n`, or
/// `t == 0`.
///
/// # Examples
///
/// ```
/// use inclusion::simulate;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mx = simulate(&mut rng, 5, 2, 50).unwrap();
///
/// // Every trial column sums to m.
/// for i in 0..50 {
///     assert_eq!(mx.trial(i).unwrap().iter().sum::<f64>(), 2.0);
/// }
/// ```
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    t: usize,
) -> Result<TrialMatrix> {
    check_draw(n, m)?;
    if t == 0 {
        return Err(InclusionError::InvalidArgument("trial count t must be >= 1"));
    }

    let mut data = vec![0.0f64; n * (t + 1)];
    for i in 0..t {
        let indicator = sample_indicator(rng, n, m)?;
        data[i * n..(i + 1) * n].copy_from_slice(&indicator);
    }

    // Trailing column: per-item mean across the t trial columns.
    for j in 0..n {
        let hits: f64 = (0..t).map(|i| data[i * n + j]).sum();
        data[t * n + j] = hits / t as f64;
    }

    Ok(TrialMatrix::new(n, t, data))
}

/// [`simulate`] with a `StdRng` seeded from `seed`.
///
/// Identical `(seed, n, m, t)` always produce the identical matrix, which is
/// what regression tests and demos want.
///
/// # Errors
///
/// Same as [`simulate`].
///
/// # Examples
///
/// ```
/// use inclusion::simulate_seeded;
///
/// let a = simulate_seeded(42, 10, 3, 100).unwrap();
/// let b = simulate_seeded(42, 10, 3, 100).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate_seeded(seed: u64, n: usize, m: usize, t: usize) -> Result<TrialMatrix> {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate(&mut rng, n, m, t)
}
