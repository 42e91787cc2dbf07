use crate::metrics::{error_metrics, ErrorMetrics};
use data_model::{Correction, PriceBracket, Position};

/// The same gates `prediction-adjuster` applies before consuming a
/// correction; duplicated here (rather than a shared dependency) because
/// this crate decides whether to *write* a correction, which is a
/// logically separate decision from whether C6 later *applies* one.
pub const MIN_SAMPLE_SIZE_POSITION: u32 = 20;
pub const MIN_SAMPLE_SIZE_BRACKET: u32 = 30;

pub struct ResolvedPrediction {
    pub position: Position,
    pub bracket: PriceBracket,
    pub expected_points: f64,
    pub actual_points: i32,
}

pub struct PredictionReview {
    pub overall: ErrorMetrics,
    pub by_position: Vec<(Position, ErrorMetrics)>,
    pub by_bracket: Vec<(PriceBracket, ErrorMetrics)>,
}

const ALL_POSITIONS: [Position; 4] = [Position::Gk, Position::Def, Position::Mid, Position::Fwd];
const ALL_BRACKETS: [PriceBracket; 3] = [PriceBracket::Budget, PriceBracket::Mid, PriceBracket::Premium];

/// Joins predictions with actuals for a resolved gameweek and breaks the
/// error down overall, per position and per price bracket.
pub fn review_predictions(resolved: &[ResolvedPrediction]) -> PredictionReview {
    let overall = error_metrics(resolved.iter().map(|r| (r.expected_points, r.actual_points as f64)));

    let by_position = ALL_POSITIONS
        .into_iter()
        .map(|position| {
            let pairs = resolved
                .iter()
                .filter(|r| r.position == position)
                .map(|r| (r.expected_points, r.actual_points as f64));
            (position, error_metrics(pairs))
        })
        .collect();

    let by_bracket = ALL_BRACKETS
        .into_iter()
        .map(|bracket| {
            let pairs = resolved
                .iter()
                .filter(|r| r.bracket == bracket)
                .map(|r| (r.expected_points, r.actual_points as f64));
            (bracket, error_metrics(pairs))
        })
        .collect();

    PredictionReview { overall, by_position, by_bracket }
}

/// Derives calibration corrections from a review, gated by minimum sample
/// size per cell. A correction removes the mean error by subtraction, so
/// it is the negative of `mean_error`.
pub fn derive_corrections(
    review: &PredictionReview,
) -> (Vec<(Position, Correction)>, Vec<(PriceBracket, Correction)>) {
    let by_position = review
        .by_position
        .iter()
        .filter(|(_, m)| m.sample_size >= MIN_SAMPLE_SIZE_POSITION)
        .map(|(position, m)| (*position, Correction { additive_correction: -m.mean_error, sample_size: m.sample_size }))
        .collect();

    let by_bracket = review
        .by_bracket
        .iter()
        .filter(|(_, m)| m.sample_size >= MIN_SAMPLE_SIZE_BRACKET)
        .map(|(bracket, m)| (*bracket, Correction { additive_correction: -m.mean_error, sample_size: m.sample_size }))
        .collect();

    (by_position, by_bracket)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(position: Position, bracket: PriceBracket, expected: f64, actual: i32) -> ResolvedPrediction {
        ResolvedPrediction { position, bracket, expected_points: expected, actual_points: actual }
    }

    #[test]
    fn below_threshold_cells_produce_no_correction() {
        let data: Vec<_> = (0..5).map(|_| resolved(Position::Mid, PriceBracket::Mid, 6.0, 4.0)).collect();
        let review = review_predictions(&data);
        let (by_position, by_bracket) = derive_corrections(&review);
        assert!(by_position.is_empty());
        assert!(by_bracket.is_empty());
    }

    #[test]
    fn above_threshold_cell_yields_negative_mean_error_correction() {
        let data: Vec<_> = (0..25).map(|_| resolved(Position::Mid, PriceBracket::Budget, 6.0, 4.0)).collect();
        let review = review_predictions(&data);
        let (by_position, _) = derive_corrections(&review);
        let (position, correction) = by_position.iter().find(|(p, _)| *p == Position::Mid).unwrap();
        assert_eq!(*position, Position::Mid);
        assert_eq!(correction.additive_correction, -2.0);
        assert_eq!(correction.sample_size, 25);
    }
}
