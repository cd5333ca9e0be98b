//! Uniform `m`-of-`N` draws without replacement.
//!
//! One draw selects a uniformly random size-`m` subset of `0..n` (every
//! subset equally likely) and reports it either as the chosen indices or as a
//! length-`n` 0/1 indicator vector. The implementation is a partial
//! Fisher-Yates shuffle: `m` swaps over an index pool, O(n) time and space.
//!
//! The random source is always injected (`&mut R where R: Rng`), never taken
//! from a process-wide generator; seed a [`rand::rngs::StdRng`] for
//! reproducible draws.

use rand::Rng;

use crate::{InclusionError, Result};

/// Validate a draw's parameters. Shared by the sampler and the simulator so
/// rejection happens before any entropy is consumed.
pub(crate) fn check_draw(n: usize, m: usize) -> Result<()> {
    if n == 0 {
        return Err(InclusionError::InvalidArgument("population size N must be >= 1"));
    }
    if m > n {
        return Err(InclusionError::InvalidArgument("sample size m must be <= N"));
    }
    Ok(())
}

/// Draw a uniformly random size-`m` subset of the indices `0..n`, without
/// replacement.
///
/// Building block for [`sample_indicator`]; useful directly when the caller
/// wants the selected items rather than a membership vector. The returned
/// indices are in shuffle order, not sorted.
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0` or `m > n`.
///
/// # Examples
///
/// ```
/// use inclusion::sample_indices;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample_indices(&mut rng, 10, 3).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|&i| i < 10));
/// ```
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, m: usize) -> Result<Vec<usize>> {
    check_draw(n, m)?;

    // Partial Fisher-Yates: after swap i, slot i holds a uniform pick from
    // the not-yet-chosen items, so the first m slots are a uniform m-subset.
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..m {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(m);
    Ok(pool)
}

/// Draw one uniform `m`-of-`n` subset and return it as a 0/1 indicator
/// vector: entry `i` is `1.0` iff item `i` was selected.
///
/// Exactly `m` entries are `1.0` and the rest `0.0`. `m == 0` yields the
/// all-zero vector, `m == n` the all-one vector.
///
/// # Errors
///
/// Returns [`InclusionError::InvalidArgument`] if `n == 0` or `m > n`.
///
/// # Examples
///
/// ```
/// use inclusion::sample_indicator;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let chosen = sample_indicator(&mut rng, 10, 3).unwrap();
/// assert_eq!(chosen.len(), 10);
/// assert_eq!(chosen.iter().sum::<f64>(), 3.0);
/// ```
pub fn sample_indicator<R: Rng + ?Sized>(rng: &mut R, n: usize, m: usize) -> Result<Vec<f64>> {
    let picked = sample_indices(rng, n, m)?;
    let mut chosen = vec![0.0; n];
    for i in picked {
        chosen[i] = 1.0;
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn indicator_has_exactly_m_ones(
            seed in any::<u64>(),
            (n, m) in (1usize..120).prop_flat_map(|n| (Just(n), 0..=n)),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = sample_indicator(&mut rng, n, m).unwrap();

            prop_assert_eq!(chosen.len(), n);
            prop_assert!(chosen.iter().all(|&x| x == 0.0 || x == 1.0));
            let ones = chosen.iter().filter(|&&x| x == 1.0).count();
            prop_assert_eq!(ones, m);
        }

        #[test]
        fn indices_are_distinct_and_in_range(
            seed in any::<u64>(),
            (n, m) in (1usize..120).prop_flat_map(|n| (Just(n), 0..=n)),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut picked = sample_indices(&mut rng, n, m).unwrap();

            prop_assert_eq!(picked.len(), m);
            prop_assert!(picked.iter().all(|&i| i < n));
            picked.sort_unstable();
            picked.dedup();
            prop_assert_eq!(picked.len(), m);
        }
    }

    #[test]
    fn each_index_appears_at_rate_m_over_n() {
        // 2-of-5: every index should be picked with frequency near 0.4.
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 20_000;
        let mut hits = [0u32; 5];
        for _ in 0..trials {
            for i in sample_indices(&mut rng, 5, 2).unwrap() {
                hits[i] += 1;
            }
        }
        for &h in &hits {
            let freq = f64::from(h) / trials as f64;
            // sd ≈ 0.0035 at 20k trials; 0.02 is a wide margin.
            assert!((freq - 0.4).abs() < 0.02, "freq {freq} too far from 0.4");
        }
    }

    #[test]
    fn boundary_draws_are_constant() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_indicator(&mut rng, 4, 0).unwrap(), vec![0.0; 4]);
        assert_eq!(sample_indicator(&mut rng, 4, 4).unwrap(), vec![1.0; 4]);
    }

    #[test]
    fn rejects_empty_population() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_indicator(&mut rng, 0, 0).is_err());
    }

    #[test]
    fn rejects_oversized_sample() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_indicator(&mut rng, 5, 7).is_err());
        assert!(sample_indices(&mut rng, 5, 6).is_err());
    }

    #[test]
    fn identical_seeds_draw_identically() {
        let a = sample_indicator(&mut StdRng::seed_from_u64(9), 20, 6).unwrap();
        let b = sample_indicator(&mut StdRng::seed_from_u64(9), 20, 6).unwrap();
        assert_eq!(a, b);
    }
}
