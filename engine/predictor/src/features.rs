//! The fixed, ordered subset of `FeatureVector` the baseline model
//! consumes. This ordering is the model contract: changing it requires a
//! new model version.

use feature_builder::FeatureVector;

pub const FEATURE_NAMES: [&str; 12] = [
    "avg_points",
    "avg_minutes",
    "form",
    "points_per_game",
    "points_trend_slope",
    "goals_overperformance",
    "assists_overperformance",
    "attacking_threat",
    "minutes_reliability",
    "defensive_contribution_score",
    "opponent_strength",
    "fixture_difficulty",
];

pub fn vectorize(f: &FeatureVector) -> Vec<f64> {
    vec![
        f.avg_points,
        f.avg_minutes,
        f.form,
        f.points_per_game,
        f.points_trend_slope,
        f.goals_overperformance,
        f.assists_overperformance,
        f.attacking_threat,
        f.minutes_reliability,
        f.defensive_contribution_score,
        f.opponent_strength,
        f.fixture_difficulty,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectorize_length_matches_feature_names() {
        let fv = FeatureVector::default();
        assert_eq!(vectorize(&fv).len(), FEATURE_NAMES.len());
    }
}
