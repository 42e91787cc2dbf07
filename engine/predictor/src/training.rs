//! Training loop: fit on historical records up to gameweek T, validate on a
//! held-out tail, early-stop on validation loss, persist the resulting
//! [`PositionModel`].

use crate::model::PositionModel;

#[derive(Clone, Debug)]
pub struct TrainingRecord {
    pub features: Vec<f64>,
    pub actual_points: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub max_iterations: u32,
    pub patience: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig { learning_rate: 0.01, max_iterations: 2_000, patience: 20 }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidationMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub iterations_run: u32,
}

fn predict_all(model: &PositionModel, records: &[TrainingRecord]) -> Vec<f64> {
    records.iter().map(|r| model.predict_raw(&r.features)).collect()
}

fn rmse(predictions: &[f64], records: &[TrainingRecord]) -> f64 {
    let n = records.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let sse: f64 =
        predictions.iter().zip(records.iter()).map(|(p, r)| (p - r.actual_points).powi(2)).sum();
    (sse / n).sqrt()
}

fn mae(predictions: &[f64], records: &[TrainingRecord]) -> f64 {
    let n = records.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    predictions.iter().zip(records.iter()).map(|(p, r)| (p - r.actual_points).abs()).sum::<f64>() / n
}

/// Fits a [`PositionModel`] by batch gradient descent on `train`, tracking
/// RMSE on `holdout` each iteration and stopping once it fails to improve
/// for `config.patience` consecutive iterations.
pub fn train_position_model(
    train: &[TrainingRecord],
    holdout: &[TrainingRecord],
    feature_count: usize,
    config: TrainingConfig,
) -> (PositionModel, ValidationMetrics) {
    let mut model = PositionModel::zeroed(feature_count);
    let mut best_model = model.clone();
    let mut best_rmse = f64::INFINITY;
    let mut stale_iterations = 0;
    let mut iterations_run = 0;

    let n = train.len() as f64;

    for iteration in 0..config.max_iterations {
        iterations_run = iteration + 1;

        if n > 0.0 {
            let mut weight_gradients = vec![0.0; feature_count];
            let mut bias_gradient = 0.0;

            for record in train {
                let prediction = model.predict_raw(&record.features);
                let error = prediction - record.actual_points;
                for (g, x) in weight_gradients.iter_mut().zip(record.features.iter()) {
                    *g += error * x;
                }
                bias_gradient += error;
            }

            for (w, g) in model.weights.iter_mut().zip(weight_gradients.iter()) {
                *w -= config.learning_rate * (g / n);
            }
            model.bias -= config.learning_rate * (bias_gradient / n);
        }

        let holdout_rmse = rmse(&predict_all(&model, holdout), holdout);
        if holdout_rmse < best_rmse - 1e-9 {
            best_rmse = holdout_rmse;
            best_model = model.clone();
            stale_iterations = 0;
        } else {
            stale_iterations += 1;
            if stale_iterations >= config.patience {
                break;
            }
        }
    }

    let metrics = ValidationMetrics {
        rmse: best_rmse,
        mae: mae(&predict_all(&best_model, holdout), holdout),
        iterations_run,
    };

    (best_model, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: f64, y: f64) -> TrainingRecord {
        TrainingRecord { features: vec![x], actual_points: y }
    }

    #[test]
    fn fits_a_simple_linear_relationship() {
        let train = vec![record(1.0, 3.0), record(2.0, 5.0), record(3.0, 7.0), record(4.0, 9.0)];
        let holdout = vec![record(5.0, 11.0), record(6.0, 13.0)];

        let (model, metrics) = train_position_model(
            &train,
            &holdout,
            1,
            TrainingConfig { learning_rate: 0.05, max_iterations: 5_000, patience: 50 },
        );

        assert!(metrics.rmse < 1.0, "rmse too high: {}", metrics.rmse);
        let prediction = model.predict_raw(&[7.0]);
        assert!((prediction - 15.0).abs() < 1.5, "prediction off: {prediction}");
    }

    #[test]
    fn empty_training_set_returns_zeroed_model() {
        let (model, _) = train_position_model(&[], &[], 3, TrainingConfig::default());
        assert_eq!(model.weights, vec![0.0, 0.0, 0.0]);
        assert_eq!(model.bias, 0.0);
    }
}
