//! Grouped observations drawn from per-group normal distributions.
//!
//! The table is long-form: one row per observation carrying its value and
//! group label, with the groups stacked in [`Group::ALL`] order.

use rand::Rng;
use rand_distr::{Distribution as _, Normal};

/// Number of observations drawn per group by default.
pub const SAMPLES_PER_GROUP: usize = 30;

/// Experimental group an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Group {
    #[display("ctrl")]
    Control,
    #[display("trtA")]
    TreatmentA,
    #[display("trtB")]
    TreatmentB,
}

impl Group {
    pub const ALL: [Self; 3] = [Self::Control, Self::TreatmentA, Self::TreatmentB];

    /// Mean of the distribution this group is sampled from.
    #[must_use]
    pub const fn mean(self) -> f64 {
        match self {
            Self::Control => 10.0,
            Self::TreatmentA => 12.0,
            Self::TreatmentB => 13.0,
        }
    }

    /// Standard deviation of the distribution this group is sampled from.
    #[must_use]
    pub const fn std_dev(self) -> f64 {
        match self {
            Self::Control => 1.5,
            Self::TreatmentA => 1.8,
            Self::TreatmentB => 2.0,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    #[display(
        "invalid normal distribution for group {group} (mean {mean}, standard deviation {std_dev})"
    )]
    InvalidDistribution { group: Group, mean: f64, std_dev: f64 },
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub value: f64,
    pub group: Group,
}

/// Long-form table of observations: one row per value, tagged with its group.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Draws `samples_per_group` values for each group in [`Group::ALL`] order.
    ///
    /// Each group is sampled completely before the next one starts, so a
    /// seeded `rng` always yields the same table.
    pub fn sample<R>(rng: &mut R, samples_per_group: usize) -> Result<Self, SampleError>
    where
        R: Rng + ?Sized,
    {
        let mut samples = Vec::with_capacity(Group::ALL.len());
        for group in Group::ALL {
            let (mean, std_dev) = (group.mean(), group.std_dev());
            let normal = Normal::new(mean, std_dev).map_err(|_| {
                SampleError::InvalidDistribution {
                    group,
                    mean,
                    std_dev,
                }
            })?;
            let values = (0..samples_per_group)
                .map(|_| normal.sample(rng))
                .collect::<Vec<f64>>();
            samples.push((group, values));
        }
        Ok(Self::from_samples(samples))
    }

    /// Stacks per-group samples into one table, keeping the given order.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (Group, Vec<f64>)>,
    {
        let rows = samples
            .into_iter()
            .flat_map(|(group, values)| {
                values
                    .into_iter()
                    .map(move |value| Observation { value, group })
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct groups in order of first appearance.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        let mut groups = Vec::new();
        for row in &self.rows {
            if !groups.contains(&row.group) {
                groups.push(row.group);
            }
        }
        groups
    }

    /// Values belonging to `group`, in table order.
    #[must_use]
    pub fn values(&self, group: Group) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.group == group)
            .map(|row| row.value)
            .collect()
    }

    /// Largest value in the table, or `None` if it is empty.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.rows.iter().map(|row| row.value).max_by(f64::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn test_table_has_90_rows_and_3_groups() {
        let table = ObservationTable::sample(&mut seeded_rng(42), SAMPLES_PER_GROUP).unwrap();
        assert_eq!(table.len(), 90);
        assert_eq!(table.groups(), Group::ALL.to_vec());
        for group in Group::ALL {
            assert_eq!(table.values(group).len(), SAMPLES_PER_GROUP);
        }
    }

    #[test]
    fn test_rows_are_stacked_by_group() {
        let table = ObservationTable::sample(&mut seeded_rng(42), SAMPLES_PER_GROUP).unwrap();
        let labels = table.rows().iter().map(|row| row.group).collect::<Vec<_>>();
        assert!(labels[..30].iter().all(|g| *g == Group::Control));
        assert!(labels[30..60].iter().all(|g| *g == Group::TreatmentA));
        assert!(labels[60..].iter().all(|g| *g == Group::TreatmentB));
    }

    #[test]
    fn test_seeded_sampling_is_bit_reproducible() {
        let first = ObservationTable::sample(&mut seeded_rng(42), SAMPLES_PER_GROUP).unwrap();
        let second = ObservationTable::sample(&mut seeded_rng(42), SAMPLES_PER_GROUP).unwrap();
        let bits = |table: &ObservationTable| {
            table
                .rows()
                .iter()
                .map(|row| row.value.to_bits())
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = ObservationTable::sample(&mut seeded_rng(1), SAMPLES_PER_GROUP).unwrap();
        let second = ObservationTable::sample(&mut seeded_rng(2), SAMPLES_PER_GROUP).unwrap();
        assert_ne!(first.rows(), second.rows());
    }

    #[test]
    fn test_group_means_are_plausible() {
        let table = ObservationTable::sample(&mut seeded_rng(42), 2000).unwrap();
        for group in Group::ALL {
            let values = table.values(group);
            #[expect(clippy::cast_precision_loss)]
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            assert!((mean - group.mean()).abs() < 0.3, "{group}: {mean}");
        }
    }

    #[test]
    fn test_group_labels() {
        let labels = Group::ALL.map(|g| g.to_string());
        assert_eq!(labels, ["ctrl", "trtA", "trtB"]);
    }

    #[test]
    fn test_from_samples_and_max_value() {
        let table = ObservationTable::from_samples([
            (Group::TreatmentB, vec![1.0, 9.5]),
            (Group::Control, vec![3.0]),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.groups(), vec![Group::TreatmentB, Group::Control]);
        assert_eq!(table.max_value(), Some(9.5));
        assert_eq!(ObservationTable::default().max_value(), None);
    }
}
