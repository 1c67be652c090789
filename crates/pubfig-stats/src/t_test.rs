//! Student's two-sample t-test.
//!
//! The test assumes equal population variances and pools the two sample
//! variances. The p-value is two-sided. No correction for multiple
//! comparisons is applied; callers running several tests get one
//! independent p-value per pair.

use statrs::distribution::{ContinuousCDF as _, StudentsT};

use crate::descriptive::DescriptiveStats;

/// Outcome of a two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    /// The t statistic, positive when the first sample's mean is larger.
    pub statistic: f64,
    /// Degrees of freedom, `n1 + n2 - 2`.
    pub degrees_of_freedom: f64,
    /// Two-sided p-value, always within `0.0..=1.0`.
    pub p_value: f64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TTestError {
    #[display("sample {index} has {len} values, but at least 2 are required")]
    InsufficientSamples { index: usize, len: usize },
    #[display("sample {index} contains a non-finite value")]
    NonFiniteValue { index: usize },
    #[display("cannot build a t distribution with {degrees_of_freedom} degrees of freedom")]
    InvalidDistribution { degrees_of_freedom: f64 },
}

/// Runs Student's two-sample t-test on `a` and `b`.
///
/// When both samples have zero variance the statistic is undefined; the
/// p-value is then `1.0` if the means coincide and `0.0` otherwise.
///
/// # Examples
///
/// ```
/// use pubfig_stats::t_test::student_t_test;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let result = student_t_test(&a, &b).unwrap();
/// assert_eq!(result.degrees_of_freedom, 8.0);
/// assert!((result.p_value - 0.094_35).abs() < 1e-4);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn student_t_test(a: &[f64], b: &[f64]) -> Result<TTest, TTestError> {
    let a = summarize(0, a)?;
    let b = summarize(1, b)?;

    let n1 = a.count as f64;
    let n2 = b.count as f64;
    let degrees_of_freedom = n1 + n2 - 2.0;
    let pooled_variance =
        ((n1 - 1.0) * a.variance + (n2 - 1.0) * b.variance) / degrees_of_freedom;
    let mean_diff = a.mean - b.mean;

    if pooled_variance <= 0.0 {
        let (statistic, p_value) = if mean_diff.abs() < f64::EPSILON {
            (0.0, 1.0)
        } else {
            (mean_diff.signum() * f64::INFINITY, 0.0)
        };
        return Ok(TTest {
            statistic,
            degrees_of_freedom,
            p_value,
        });
    }

    let standard_error = (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();
    let statistic = mean_diff / standard_error;
    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|_| TTestError::InvalidDistribution { degrees_of_freedom })?;
    let p_value = (2.0 * distribution.sf(statistic.abs())).clamp(0.0, 1.0);

    Ok(TTest {
        statistic,
        degrees_of_freedom,
        p_value,
    })
}

fn summarize(index: usize, values: &[f64]) -> Result<DescriptiveStats, TTestError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(TTestError::NonFiniteValue { index });
    }
    match DescriptiveStats::new(values.iter().copied()) {
        Some(stats) if stats.count >= 2 => Ok(stats),
        _ => Err(TTestError::InsufficientSamples {
            index,
            len: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_value_disjoint_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [6.0, 7.0, 8.0, 9.0, 10.0];
        let result = student_t_test(&a, &b).unwrap();
        assert_eq!(result.statistic, -5.0);
        assert_eq!(result.degrees_of_freedom, 8.0);
        assert!((result.p_value - 0.001_052_825_793_365).abs() < 1e-8);
    }

    #[test]
    fn test_reference_value_overlapping_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let result = student_t_test(&a, &b).unwrap();
        assert!((result.statistic + 1.897_366_596_101_027).abs() < 1e-12);
        assert!((result.p_value - 0.094_349_772_842_352).abs() < 1e-8);
    }

    #[test]
    fn test_symmetric_in_p_value() {
        let a = [1.2, 3.4, 2.2, 5.1, 4.4, 3.9];
        let b = [2.5, 6.1, 4.8, 5.5, 7.0];
        let ab = student_t_test(&a, &b).unwrap();
        let ba = student_t_test(&b, &a).unwrap();
        assert!((ab.p_value - ba.p_value).abs() < 1e-15);
        assert!((ab.statistic + ba.statistic).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples() {
        let a = [1.0, 2.0, 3.0];
        let result = student_t_test(&a, &a).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_samples() {
        let equal = student_t_test(&[2.0, 2.0], &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(equal.p_value, 1.0);

        let distinct = student_t_test(&[1.0, 1.0], &[3.0, 3.0]).unwrap();
        assert_eq!(distinct.p_value, 0.0);
        assert_eq!(distinct.statistic, f64::NEG_INFINITY);
    }

    #[test]
    fn test_rejects_short_samples() {
        let err = student_t_test(&[1.0, 2.0], &[3.0]).unwrap_err();
        assert!(matches!(
            err,
            TTestError::InsufficientSamples { index: 1, len: 1 }
        ));
        let err = student_t_test(&[], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            TTestError::InsufficientSamples { index: 0, len: 0 }
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let err = student_t_test(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, TTestError::NonFiniteValue { index: 0 }));
    }
}
