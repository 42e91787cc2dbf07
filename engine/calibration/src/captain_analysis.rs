use data_model::PlayerId;

pub struct StarterResult {
    pub player: PlayerId,
    pub actual_points: i32,
}

pub struct CaptainAnalysis {
    pub captain: PlayerId,
    pub best_possible: PlayerId,
    pub captain_points: i32,
    pub best_possible_points: i32,
    pub points_left_on_table: i32,
}

/// Compares the chosen captain's actual points (before the captaincy
/// multiplier, since the multiplier itself isn't the decision under
/// review) against the best-possible choice from the starting XI.
pub fn analyze_captain_choice(captain: PlayerId, starters: &[StarterResult]) -> Option<CaptainAnalysis> {
    let captain_points = starters.iter().find(|s| s.player == captain)?.actual_points;
    let best = starters.iter().max_by_key(|s| s.actual_points)?;

    Some(CaptainAnalysis {
        captain,
        best_possible: best.player,
        captain_points,
        best_possible_points: best.actual_points,
        points_left_on_table: best.actual_points - captain_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_captain_leaves_nothing_on_the_table() {
        let starters = vec![
            StarterResult { player: PlayerId(1), actual_points: 12 },
            StarterResult { player: PlayerId(2), actual_points: 5 },
        ];
        let analysis = analyze_captain_choice(PlayerId(1), &starters).unwrap();
        assert_eq!(analysis.points_left_on_table, 0);
    }

    #[test]
    fn suboptimal_captain_reports_points_left_on_table() {
        let starters = vec![
            StarterResult { player: PlayerId(1), actual_points: 2 },
            StarterResult { player: PlayerId(2), actual_points: 15 },
        ];
        let analysis = analyze_captain_choice(PlayerId(1), &starters).unwrap();
        assert_eq!(analysis.best_possible, PlayerId(2));
        assert_eq!(analysis.points_left_on_table, 13);
    }
}
