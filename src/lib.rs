//! `inclusion`: Monte Carlo estimation of per-item inclusion frequencies under
//! uniform sampling without replacement.
//!
//! This crate is for validating randomization procedures (e.g. *complete
//! randomization*: assigning exactly `m` of `N` units to treatment): it draws
//! many independent `m`-subsets, records which items each draw included, and
//! reports the empirical inclusion rate per item. Under a correct uniform
//! sampler every item's rate converges to the constant \(m/N\), so the output
//! is a direct check of the procedure's marginal assignment probabilities.
//!
//! Design intent:
//! - Keep the draw itself ([`sampler`]) separate from the trial loop and
//!   aggregation ([`simulator`]).
//! - Inject the random source everywhere (`&mut R where R: Rng`) so results
//!   are reproducible under a fixed seed and no process-global generator is
//!   touched.
//! - Pair the Monte Carlo estimates with closed-form reference values
//!   ([`baseline`]) for calibrating tolerances.
//!
//! ## Output layout
//!
//! One run of [`simulate`] produces a [`TrialMatrix`]: `N` rows (items) by
//! `t + 1` columns. Columns `0..t` hold the 0/1 inclusion indicator of each
//! trial; column `t` holds each item's mean indicator across the `t` trials.
//! Every trial column sums to exactly `m`, which makes the grand mean of the
//! trailing column *exactly* `m/N` -- only the per-item rates fluctuate.
//!
//! ## Quick example
//!
//! ```rust
//! use inclusion::simulate_seeded;
//!
//! // 3-of-10 complete randomization, 2000 trials, fixed seed.
//! let mx = simulate_seeded(42, 10, 3, 2_000).unwrap();
//!
//! assert_eq!(mx.items(), 10);
//! assert_eq!(mx.trials(), 2_000);
//!
//! // Each item's empirical inclusion rate approximates m/N = 0.3.
//! for &rate in mx.inclusion_rates() {
//!     assert!((rate - 0.3).abs() < 0.05);
//! }
//! ```
//!
//! ## References (orientation)
//!
//! - Fisher (1935): *The Design of Experiments* -- complete randomization.
//! - Knuth, TAOCP vol. 2, §3.4.2 -- partial Fisher-Yates shuffle for uniform
//!   unordered sampling without replacement.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod baseline;
pub mod sampler;
pub mod simulator;

pub use sampler::{sample_indicator, sample_indices};
pub use simulator::{simulate, simulate_seeded};

/// Errors for sampling and simulation.
#[derive(Debug, Error)]
pub enum InclusionError {
    /// A parameter is outside its valid range (`N == 0`, `m > N`, or `t == 0`).
    ///
    /// Detected eagerly, before any randomness is consumed: a call either
    /// returns its full result or this error, never a partial result.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = core::result::Result<T, InclusionError>;

/// The result of a simulation run: per-trial inclusion indicators plus the
/// per-item empirical inclusion rate.
///
/// Shape is `items × (trials + 1)`. Storage is column-major so that each
/// trial's indicator vector -- and the trailing rate column -- is a contiguous
/// slice.
///
/// Invariants (guaranteed by [`simulate`]):
/// - every entry of columns `0..trials` is `0.0` or `1.0`;
/// - every trial column sums to exactly the sample size `m`;
/// - column `trials` is the per-row mean of the preceding columns, so each
///   entry lies in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use inclusion::simulate_seeded;
///
/// let mx = simulate_seeded(7, 5, 2, 100).unwrap();
/// assert_eq!((mx.items(), mx.cols()), (5, 101));
///
/// // Each trial column is a 0/1 indicator summing to m.
/// let first: f64 = mx.trial(0).unwrap().iter().sum();
/// assert_eq!(first, 2.0);
///
/// // The grand mean of the rate column is exactly m/N.
/// assert!((mx.mean_inclusion_rate() - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrialMatrix {
    items: usize,
    trials: usize,
    /// Column-major, `items * (trials + 1)` entries.
    data: Vec<f64>,
}

impl TrialMatrix {
    pub(crate) fn new(items: usize, trials: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), items * (trials + 1));
        Self {
            items,
            trials,
            data,
        }
    }

    /// Number of rows: the population size `N`.
    #[must_use]
    pub fn items(&self) -> usize {
        self.items
    }

    /// Number of trial columns: `t`.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Total number of columns: `t + 1` (trials plus the rate column).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.trials + 1
    }

    /// Entry at `(item, col)`, or `None` when out of bounds.
    ///
    /// Column `trials()` is the rate column.
    #[must_use]
    pub fn get(&self, item: usize, col: usize) -> Option<f64> {
        if item >= self.items || col > self.trials {
            return None;
        }
        Some(self.data[col * self.items + item])
    }

    /// The 0/1 indicator vector of trial `i` (one entry per item), or `None`
    /// when `i >= trials()`.
    #[must_use]
    pub fn trial(&self, i: usize) -> Option<&[f64]> {
        if i >= self.trials {
            return None;
        }
        Some(&self.data[i * self.items..(i + 1) * self.items])
    }

    /// The trailing column: each item's empirical inclusion rate across all
    /// trials.
    #[must_use]
    pub fn inclusion_rates(&self) -> &[f64] {
        &self.data[self.trials * self.items..]
    }

    /// Grand mean of the rate column.
    ///
    /// Because every trial column sums to the sample size `m`, this equals
    /// `m/N` exactly (up to float summation); it is a consistency check, not
    /// an estimate.
    #[must_use]
    pub fn mean_inclusion_rate(&self) -> f64 {
        let s: f64 = self.inclusion_rates().iter().sum();
        s / (self.items as f64)
    }

    /// Largest absolute deviation of any item's rate from a reference
    /// probability `p` (typically `m/N` from
    /// [`baseline::inclusion_probability`]).
    #[must_use]
    pub fn max_abs_deviation(&self, p: f64) -> f64 {
        self.inclusion_rates()
            .iter()
            .map(|&r| (r - p).abs())
            .fold(0.0, f64::max)
    }
}
