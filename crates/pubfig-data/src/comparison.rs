//! Pairwise significance tests between observation groups.

use pubfig_stats::t_test::{TTest, TTestError, student_t_test};

use crate::observations::{Group, ObservationTable};

/// Result of testing one unordered pair of groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseComparison {
    pub first: Group,
    pub second: Group,
    pub test: TTest,
}

impl PairwiseComparison {
    #[must_use]
    pub fn p_value(&self) -> f64 {
        self.test.p_value
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to compare {first} with {second}")]
pub struct ComparisonError {
    first: Group,
    second: Group,
    source: TTestError,
}

/// Every unordered pair of `groups`, ordered by the first member, then the second.
///
/// For groups `[a, b, c]` this is `(a, b)`, `(a, c)`, `(b, c)`.
#[must_use]
pub fn group_pairs(groups: &[Group]) -> Vec<(Group, Group)> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(i, &first)| groups[i + 1..].iter().map(move |&second| (first, second)))
        .collect()
}

/// Runs a Student's t-test for every pair of groups in `table`.
///
/// Pairs follow [`group_pairs`] over the table's groups in order of first
/// appearance. The p-values are uncorrected.
pub fn compare_all_pairs(
    table: &ObservationTable,
) -> Result<Vec<PairwiseComparison>, ComparisonError> {
    group_pairs(&table.groups())
        .into_iter()
        .map(|(first, second)| {
            let test = student_t_test(&table.values(first), &table.values(second))
                .map_err(|source| ComparisonError {
                    first,
                    second,
                    source,
                })?;
            Ok(PairwiseComparison {
                first,
                second,
                test,
            })
        })
        .collect()
}
