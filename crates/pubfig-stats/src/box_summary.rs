use crate::percentiles::Percentiles;

const QUARTILE_POINTS: [f64; 3] = [25.0, 50.0, 75.0];

/// The statistics a box plot draws for one group.
///
/// Quartiles use linear interpolation (see [`crate::percentiles::compute_percentile`]).
/// Whiskers follow Tukey's rule: each reaches the most extreme data point
/// that lies within [`BoxSummary::WHISKER_IQR_FACTOR`] × IQR of the box, and
/// never retracts inside the box. Anything beyond a whisker is an outlier.
///
/// The fields always satisfy
/// `whisker_low <= q1 <= median <= q3 <= whisker_high`.
///
/// # Examples
///
/// ```
/// use pubfig_stats::box_summary::BoxSummary;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 40.0];
/// let summary = BoxSummary::new(&values).unwrap();
/// assert_eq!(summary.whisker_high, 5.0);
/// assert_eq!(summary.outliers, vec![40.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Lower whisker end.
    pub whisker_low: f64,
    /// Upper whisker end.
    pub whisker_high: f64,
    /// Values outside the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Whisker reach, in multiples of the interquartile range.
    pub const WHISKER_IQR_FACTOR: f64 = 1.5;

    /// Summarizes unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Summarizes values already sorted in ascending order.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        if sorted_values.is_empty() {
            return None;
        }
        let quartiles = Percentiles::from_sorted(sorted_values, &QUARTILE_POINTS);
        let q1 = quartiles.get(25.0)?;
        let median = quartiles.get(50.0)?;
        let q3 = quartiles.get(75.0)?;

        let reach = Self::WHISKER_IQR_FACTOR * (q3 - q1);
        let low_fence = q1 - reach;
        let high_fence = q3 + reach;

        let whisker_low = sorted_values
            .iter()
            .copied()
            .find(|v| *v >= low_fence)
            .map_or(q1, |v| v.min(q1));
        let whisker_high = sorted_values
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .map_or(q3, |v| v.max(q3));

        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|v| *v < whisker_low || *v > whisker_high)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lowest and highest point the box plot draws, outliers included.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let low = self.outliers.first().map_or(self.whisker_low, |v| v.min(self.whisker_low));
        let high = self.outliers.last().map_or(self.whisker_high, |v| v.max(self.whisker_high));
        (low, high)
    }
}
