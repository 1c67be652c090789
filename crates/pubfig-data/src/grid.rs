/// Returns `steps` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last value is exactly `end`, so accumulated rounding never pushes the
/// grid past its domain. A single step yields just `start`; zero steps
/// yield an empty grid.
///
/// ```
/// use pubfig_data::grid::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => return vec![],
        1 => return vec![start],
        _ => {}
    }
    let last = steps - 1;
    let step = (end - start) / last as f64;
    (0..steps)
        .map(|i| if i == last { end } else { start + step * i as f64 })
        .collect()
}
