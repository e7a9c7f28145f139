use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{ScError, ScResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correlation {
    pub coefficient: f64,
    pub p_value: f64,
    pub observations: usize,
}

pub fn mean(values: &[f64]) -> Option<f64> {
    let sum = values.iter().sum::<f64>();
    let count = values.len();

    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

/// Change ratio of each value against its predecessor, aligned with the input.
///
/// The first entry is always `None`, as is any entry whose own or previous
/// value is missing or whose ratio is not finite.
pub fn pct_change(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut pct_changes = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let pct_change = if i == 0 {
            None
        } else if let (Some(prev), Some(curr)) = (values[i - 1], values[i]) {
            Some((curr - prev) / prev).filter(|v| v.is_finite())
        } else {
            None
        };

        pct_changes.push(pct_change);
    }

    pct_changes
}

/// Pearson correlation coefficient with the two-sided p-value of the
/// Student t test on `n - 2` degrees of freedom.
pub fn pearson(x: &[f64], y: &[f64]) -> ScResult<Correlation> {
    if x.len() != y.len() {
        return Err(ScError::Invalid {
            code: "LENGTH_MISMATCH",
            message: format!("Series lengths differ: {} and {}", x.len(), y.len()),
        });
    }

    let n = x.len();
    if n == 0 {
        return Err(ScError::NoData {
            code: "NO_OVERLAPPING_DATES",
            message: "No observations to correlate".to_string(),
        });
    }
    if n < 2 {
        return Err(ScError::Degenerate {
            code: "INSUFFICIENT_DATA",
            message: format!("At least 2 observations are required, got {n}"),
        });
    }

    // The mean of a constant series can round, leaving a nonzero spread
    let x_constant = x.iter().all(|v| *v == x[0]);
    if x_constant || y.iter().all(|v| *v == y[0]) {
        return Err(ScError::Degenerate {
            code: "ZERO_VARIANCE",
            message: format!(
                "Correlation is undefined for constant input ({} variance is zero)",
                if x_constant { "sentiment" } else { "return" }
            ),
        });
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);

    let p_value = if n == 2 {
        1.0
    } else if r.abs() == 1.0 {
        0.0
    } else {
        let df = (n - 2) as f64;
        let t = r * (df / (1.0 - r * r)).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df).map_err(|err| ScError::Degenerate {
            code: "INVALID_DISTRIBUTION",
            message: err.to_string(),
        })?;

        (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0)
    };

    Ok(Correlation {
        coefficient: r,
        p_value,
        observations: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[0.0, 1.0]).unwrap(), 0.5);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_pct_change() {
        assert_eq!(
            pct_change(&[Some(1.0), Some(1.0), Some(2.0), Some(3.0)]),
            [None, Some(0.0), Some(1.0), Some(0.5)]
        );
        assert_eq!(
            pct_change(&[Some(100.0), Some(110.0)]),
            [None, Some((110.0 - 100.0) / 100.0)]
        );
        assert_eq!(
            pct_change(&[Some(1.0), None, Some(2.0)]),
            [None, None, None]
        );
        assert_eq!(pct_change(&[Some(0.0), Some(2.0)]), [None, None]);
        assert!(pct_change(&[]).is_empty());
    }

    #[test]
    fn test_pearson() {
        let positive = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!((positive.coefficient - 1.0).abs() < 1e-12);
        assert!(positive.p_value < 1e-6);
        assert_eq!(positive.observations, 4);

        let negative = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((negative.coefficient + 1.0).abs() < 1e-12);

        // scipy.stats.pearsonr([1, 2, 3, 4, 5], [2, 1, 4, 3, 5]) = (0.8, 0.10408803866182788)
        let partial = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]).unwrap();
        assert!((partial.coefficient - 0.8).abs() < 1e-12);
        assert!((partial.p_value - 0.104_088_038_661_827_88).abs() < 1e-6);
    }

    #[test]
    fn test_pearson_bounds() {
        let x = [0.3, -0.2, 0.0, 0.8, -0.5, 0.1, 0.25];
        let y = [0.01, -0.02, 0.005, -0.01, 0.03, 0.0, 0.015];
        let correlation = pearson(&x, &y).unwrap();

        assert!((-1.0..=1.0).contains(&correlation.coefficient));
        assert!((0.0..=1.0).contains(&correlation.p_value));
    }

    #[test]
    fn test_pearson_two_points() {
        let correlation = pearson(&[0.1, 0.5], &[-0.02, 0.03]).unwrap();

        assert!((correlation.coefficient - 1.0).abs() < 1e-12);
        assert_eq!(correlation.p_value, 1.0);
    }

    #[test]
    fn test_pearson_degenerate() {
        assert_eq!(pearson(&[], &[]).unwrap_err().code(), Some("NO_OVERLAPPING_DATES"));
        assert_eq!(
            pearson(&[0.5], &[0.1]).unwrap_err().code(),
            Some("INSUFFICIENT_DATA")
        );
        assert_eq!(
            pearson(&[0.5, 0.5, 0.5], &[0.1, 0.2, 0.3]).unwrap_err().code(),
            Some("ZERO_VARIANCE")
        );
        assert_eq!(
            pearson(&[0.1, 0.2], &[0.1]).unwrap_err().code(),
            Some("LENGTH_MISMATCH")
        );
    }

    #[test]
    fn test_pearson_constant_inexact_mean() {
        let returns = [0.01, -0.02, 0.03];

        let err = pearson(&[0.1; 3], &returns).unwrap_err();
        assert_eq!(err.code(), Some("ZERO_VARIANCE"));
        assert!(err.to_string().contains("sentiment"));

        assert_eq!(
            pearson(&[0.7; 3], &returns).unwrap_err().code(),
            Some("ZERO_VARIANCE")
        );

        let err = pearson(&[0.1, 0.2, 0.3], &[0.1; 3]).unwrap_err();
        assert_eq!(err.code(), Some("ZERO_VARIANCE"));
        assert!(err.to_string().contains("return"));
    }
}
