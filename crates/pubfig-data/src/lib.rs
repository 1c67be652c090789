//! Synthetic datasets for the pubfig figures.
//!
//! - [`time_series`]: the noisy temperature/strain signals behind the dual-axis chart
//! - [`observations`]: the three-group observation table behind the box plot
//! - [`comparison`]: pairwise two-sample tests between the observation groups
//!
//! Every generator takes the random source as a parameter. Pass
//! [`seeded_rng`] for reproducible data, or [`rand::rng`] for fresh noise on
//! each run.
//!
//! # Example
//!
//! ```
//! use pubfig_data::{comparison::compare_all_pairs, observations::ObservationTable, seeded_rng};
//!
//! let mut rng = seeded_rng(42);
//! let table = ObservationTable::sample(&mut rng, 30).unwrap();
//! assert_eq!(table.len(), 90);
//!
//! let comparisons = compare_all_pairs(&table).unwrap();
//! assert_eq!(comparisons.len(), 3);
//! ```

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

pub mod comparison;
pub mod grid;
pub mod observations;
pub mod time_series;

/// Creates the deterministic random source used for reproducible datasets.
#[must_use]
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}
