//! Statistical utilities backing the pubfig figures.
//!
//! This crate provides the numeric pieces the figures are built on:
//!
//! - **Descriptive statistics**: count, mean, median, sample variance, standard deviation
//! - **Percentiles**: linearly interpolated percentile lookups
//! - **Box summaries**: quartiles, Tukey whiskers and outliers for box plots
//! - **Two-sample t-test**: Student's pooled-variance test for mean differences
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`box_summary`]: Five-number summary with whiskers, as drawn by a box plot
//! - [`t_test`]: Two-sample significance test
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use pubfig_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Summarizing a box
//!
//! ```
//! use pubfig_stats::box_summary::BoxSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let summary = BoxSummary::new(&values).unwrap();
//! assert_eq!(summary.median, 3.0);
//! assert_eq!(summary.q1, 2.0);
//! assert_eq!(summary.q3, 4.0);
//! ```
//!
//! ## Comparing two samples
//!
//! ```
//! use pubfig_stats::t_test::student_t_test;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let b = [6.0, 7.0, 8.0, 9.0, 10.0];
//! let result = student_t_test(&a, &b).unwrap();
//! assert_eq!(result.statistic, -5.0);
//! assert!(result.p_value < 0.01);
//! ```

pub mod box_summary;
pub mod descriptive;
pub mod percentiles;
pub mod t_test;
