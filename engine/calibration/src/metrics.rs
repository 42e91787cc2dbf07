#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErrorMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub mean_error: f64,
    pub sample_size: u32,
}

impl ErrorMetrics {
    pub const ZERO: ErrorMetrics = ErrorMetrics { rmse: 0.0, mae: 0.0, mean_error: 0.0, sample_size: 0 };
}

/// Computes RMSE, MAE and mean (signed) error over `(expected, actual)`
/// pairs. `mean_error` is expected minus actual, matching the sign
/// convention `CalibrationTable`'s correction removes.
pub fn error_metrics<I>(pairs: I) -> ErrorMetrics
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let errors: Vec<f64> = pairs.into_iter().map(|(expected, actual)| expected - actual).collect();
    if errors.is_empty() {
        return ErrorMetrics::ZERO;
    }

    let n = errors.len() as f64;
    let mean_error = errors.iter().sum::<f64>() / n;
    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let rmse = (errors.iter().map(|e| e * e).sum::<f64>() / n).sqrt();

    ErrorMetrics { rmse, mae, mean_error, sample_size: errors.len() as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rmse_never_smaller_than_mae(
            pairs in proptest::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..30)
        ) {
            let metrics = error_metrics(pairs);
            prop_assert!(metrics.rmse + 1e-9 >= metrics.mae);
        }
    }

    #[test]
    fn perfect_predictions_have_zero_error() {
        let metrics = error_metrics([(5.0, 5.0), (3.0, 3.0)]);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.mae, 0.0);
        assert_eq!(metrics.mean_error, 0.0);
        assert_eq!(metrics.sample_size, 2);
    }

    #[test]
    fn consistent_overprediction_shows_as_positive_mean_error() {
        let metrics = error_metrics([(6.0, 4.0), (8.0, 6.0)]);
        assert_eq!(metrics.mean_error, 2.0);
        assert_eq!(metrics.mae, 2.0);
    }

    #[test]
    fn empty_input_is_zeroed() {
        assert_eq!(error_metrics(std::iter::empty()), ErrorMetrics::ZERO);
    }
}
