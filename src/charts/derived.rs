//! Series derived elementwise from measured data.
use crate::charts::plot_error::{PlotError, Result, check_len};
use crate::charts::series::Series;
use itertools::izip;

/// Time spent per innermost loop iteration: `time / (iterations * size^2)`.
///
/// `size` is the full row length of the square grid, so `size^2` is the number
/// of cells touched by one sweep. All three inputs must have the same length and
/// no iteration count may be zero.
pub fn time_per_iteration(times: &[f64], iterations: &[u32], sizes: &[u32]) -> Result<Vec<f64>> {
    check_len("iterations", times.len(), iterations.len())?;
    check_len("grid sizes", times.len(), sizes.len())?;
    if let Some(index) = iterations.iter().position(|&it| it == 0) {
        return Err(PlotError::ZeroIterations { index });
    }
    let per_iter = izip!(times, iterations, sizes)
        .map(|(&t, &it, &n)| {
            let cells = f64::from(n) * f64::from(n);
            t / (f64::from(it) * cells)
        })
        .collect();
    Ok(per_iter)
}

/// Elementwise `baseline / other`, e.g. speedup of a threaded run over the serial one.
pub fn speedup(baseline: &[f64], other: &[f64]) -> Result<Vec<f64>> {
    check_len("speedup", baseline.len(), other.len())?;
    if let Some(index) = other.iter().position(|&v| v == 0.0) {
        return Err(PlotError::ZeroIterations { index });
    }
    Ok(baseline
        .iter()
        .zip(other.iter())
        .map(|(b, o)| b / o)
        .collect())
}

/// The point with the smallest y. On ties the first occurrence wins.
pub fn best_point(series: &Series) -> Option<(f64, f64)> {
    series
        .points
        .iter()
        .copied()
        .fold(None, |best: Option<(f64, f64)>, p| match best {
            Some(b) if b.1 <= p.1 => Some(b),
            _ => Some(p),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::Style;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_per_iteration_formula() {
        let res = time_per_iteration(&[8.14e5, 9.212e6], &[62, 210], &[34, 58]).unwrap();
        assert_relative_eq!(res[0], 8.14e5 / (62.0 * 34.0 * 34.0));
        assert_relative_eq!(res[0], 11.357294, epsilon = 1e-5);
        assert_relative_eq!(res[1], 9.212e6 / (210.0 * 58.0 * 58.0));
    }

    #[test]
    fn test_time_per_iteration_rejects_zero() {
        let err = time_per_iteration(&[1.0, 2.0, 3.0], &[4, 0, 1], &[2, 2, 2]).unwrap_err();
        assert!(matches!(err, PlotError::ZeroIterations { index: 1 }));
    }

    #[test]
    fn test_time_per_iteration_rejects_mismatch() {
        let err = time_per_iteration(&[1.0, 2.0], &[1, 1, 1], &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::LengthMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
        let err = time_per_iteration(&[1.0, 2.0], &[1, 1], &[2]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { found: 1, .. }));
    }

    #[test]
    fn test_speedup() {
        let res = speedup(&[100.0, 60.0], &[50.0, 60.0]).unwrap();
        assert_eq!(res, vec![2.0, 1.0]);
        assert!(speedup(&[1.0], &[0.0]).is_err());
        assert!(speedup(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_best_point_first_minimum() {
        let s = Series::from_xy(
            "iters",
            &[1.0f64, 1.5, 1.8, 1.9],
            &[40.0f64, 10.0, 10.0, 12.0],
            Style::default(),
        )
        .unwrap();
        assert_eq!(best_point(&s), Some((1.5, 10.0)));
    }
}
