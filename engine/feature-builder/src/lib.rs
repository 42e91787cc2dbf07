//! Turns a player's raw performance history into the fixed-length feature
//! vector and form sequence the predictor consumes.
//!
//! The ordered field list in [`FeatureVector`] is part of the model
//! contract: reordering or adding fields requires bumping the predictor's
//! model version downstream, this crate only assembles the values.

use data_model::{Player, PlayerGameweekPerformance, Position};

pub const ROLLING_WINDOW: usize = 5;
pub const DEFAULT_SEQUENCE_LENGTH: usize = 6;
pub const DEFAULT_FIXTURE_DIFFICULTY: u8 = 3;

/// What the upcoming fixture looks like for this player, if known.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixtureContext {
    pub difficulty: Option<u8>,
    pub opponent_strength: Option<u16>,
    pub is_home: bool,
}

impl FixtureContext {
    fn difficulty_or_default(&self) -> u8 {
        self.difficulty.unwrap_or(DEFAULT_FIXTURE_DIFFICULTY)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FeatureVector {
    // Static attributes
    pub price: f64,
    pub ownership_percent: f64,
    pub form: f64,
    pub points_per_game: f64,
    pub ict_influence: f64,
    pub ict_creativity: f64,
    pub ict_threat: f64,

    // Rolling averages over the last ROLLING_WINDOW appearances
    pub avg_points: f64,
    pub avg_minutes: f64,
    pub avg_goals: f64,
    pub avg_assists: f64,
    pub avg_bonus: f64,
    pub avg_bps: f64,
    pub avg_clean_sheets: f64,
    pub avg_saves: f64,
    pub avg_influence: f64,
    pub avg_creativity: f64,
    pub avg_threat: f64,
    pub avg_expected_goals: f64,
    pub avg_expected_assists: f64,
    pub avg_expected_goal_involvements: f64,

    // Trend and overperformance
    pub points_trend_slope: f64,
    pub goals_overperformance: f64,
    pub assists_overperformance: f64,

    // Season totals
    pub games_played: f64,
    pub season_points_per_game: f64,
    pub season_minutes_per_game: f64,
    pub season_goals_per_game: f64,
    pub season_assists_per_game: f64,
    pub season_clean_sheets_per_game: f64,

    // Fixture context
    pub opponent_strength: f64,
    pub fixture_difficulty: f64,
    pub is_home: f64,

    // Defensive-contribution potential
    pub avg_tackles: f64,
    pub avg_cbi: f64,
    pub avg_recoveries: f64,
    pub defensive_contribution_score: f64,

    // Derived
    pub minutes_reliability: f64,
    pub attacking_threat: f64,
}

/// One gameweek's worth of features for the sequence model. A reduced
/// subset of [`FeatureVector`] since the sequence encoder only needs the
/// per-gameweek trajectory, not the static or fixture context.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FeatureRow {
    pub points: f64,
    pub minutes: f64,
    pub goals: f64,
    pub assists: f64,
    pub bonus: f64,
    pub bps: f64,
    pub clean_sheet: f64,
    pub saves: f64,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub expected_goals: f64,
    pub expected_assists: f64,
}

/// The last `len` per-gameweek rows, most recent last, zero-padded at the
/// left when history is shorter than `len`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSequence {
    pub rows: Vec<FeatureRow>,
}

fn avg<F: Fn(&PlayerGameweekPerformance) -> f64>(window: &[&PlayerGameweekPerformance], f: F) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|p| f(p)).sum::<f64>() / window.len() as f64
}

/// Least-squares slope of `points` over the window, x = 0..window.len()-1.
fn least_squares_slope(window: &[&PlayerGameweekPerformance]) -> f64 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = window.iter().map(|p| p.actual_points as f64).collect();
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..n {
        numerator += (xs[i] - mean_x) * (ys[i] - mean_y);
        denominator += (xs[i] - mean_x).powi(2);
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Builds the fixed-length feature vector for `player` given their recent
/// `history` (oldest first) and the target gameweek's `fixture`.
pub fn build_feature_vector(
    player: &Player,
    history: &[PlayerGameweekPerformance],
    fixture: FixtureContext,
) -> FeatureVector {
    let recent: Vec<&PlayerGameweekPerformance> =
        history.iter().rev().take(ROLLING_WINDOW).rev().collect();

    let avg_goals = avg(&recent, |p| p.goals as f64);
    let avg_assists = avg(&recent, |p| p.assists as f64);
    let avg_minutes = avg(&recent, |p| p.minutes as f64);

    let games_played = history.len() as f64;
    let season_minutes: f64 = history.iter().map(|p| p.minutes as f64).sum();
    let season_goals: f64 = history.iter().map(|p| p.goals as f64).sum();
    let season_assists: f64 = history.iter().map(|p| p.assists as f64).sum();
    let season_clean_sheets: f64 = history.iter().map(|p| p.clean_sheet as u8 as f64).sum();
    let season_points: f64 = history.iter().map(|p| p.actual_points as f64).sum();

    let safe_div = |n: f64, d: f64| if d > 0.0 { n / d } else { 0.0 };

    FeatureVector {
        price: player.price_units(),
        ownership_percent: player.selected_by_percent,
        form: player.form,
        points_per_game: player.points_per_game,
        ict_influence: player.ict.influence,
        ict_creativity: player.ict.creativity,
        ict_threat: player.ict.threat,

        avg_points: avg(&recent, |p| p.actual_points as f64),
        avg_minutes,
        avg_goals,
        avg_assists,
        avg_bonus: avg(&recent, |p| p.bonus as f64),
        avg_bps: avg(&recent, |p| p.bps as f64),
        avg_clean_sheets: avg(&recent, |p| p.clean_sheet as u8 as f64),
        avg_saves: avg(&recent, |p| p.saves as f64),
        avg_influence: avg(&recent, |p| p.influence),
        avg_creativity: avg(&recent, |p| p.creativity),
        avg_threat: avg(&recent, |p| p.threat),
        avg_expected_goals: avg(&recent, |p| p.expected_goals),
        avg_expected_assists: avg(&recent, |p| p.expected_assists),
        avg_expected_goal_involvements: avg(&recent, |p| p.expected_goals + p.expected_assists),

        points_trend_slope: least_squares_slope(&recent),
        goals_overperformance: avg_goals - avg(&recent, |p| p.expected_goals),
        assists_overperformance: avg_assists - avg(&recent, |p| p.expected_assists),

        games_played,
        season_points_per_game: safe_div(season_points, games_played),
        season_minutes_per_game: safe_div(season_minutes, games_played),
        season_goals_per_game: safe_div(season_goals, games_played),
        season_assists_per_game: safe_div(season_assists, games_played),
        season_clean_sheets_per_game: safe_div(season_clean_sheets, games_played),

        opponent_strength: fixture.opponent_strength.unwrap_or(0) as f64,
        fixture_difficulty: fixture.difficulty_or_default() as f64,
        is_home: if fixture.is_home { 1.0 } else { 0.0 },

        avg_tackles: avg(&recent, |p| p.defensive.tackles as f64),
        avg_cbi: avg(&recent, |p| p.defensive.clearances_blocks_interceptions as f64),
        avg_recoveries: avg(&recent, |p| p.defensive.recoveries as f64),
        defensive_contribution_score: match player.position {
            Position::Def => avg(&recent, |p| p.defensive.defender_contribution_total() as f64),
            Position::Mid => avg(&recent, |p| p.defensive.midfielder_contribution_total() as f64),
            _ => 0.0,
        },

        minutes_reliability: (avg_minutes / 90.0).clamp(0.0, 1.0),
        attacking_threat: 4.0 * avg_goals + 3.0 * avg_assists,
    }
}

fn feature_row_of(perf: &PlayerGameweekPerformance) -> FeatureRow {
    FeatureRow {
        points: perf.actual_points as f64,
        minutes: perf.minutes as f64,
        goals: perf.goals as f64,
        assists: perf.assists as f64,
        bonus: perf.bonus as f64,
        bps: perf.bps as f64,
        clean_sheet: perf.clean_sheet as u8 as f64,
        saves: perf.saves as f64,
        influence: perf.influence,
        creativity: perf.creativity,
        threat: perf.threat,
        expected_goals: perf.expected_goals,
        expected_assists: perf.expected_assists,
    }
}

/// Builds the last `len` per-gameweek rows (most recent last), zero-padded
/// at the left when `history` is shorter than `len`.
pub fn build_form_sequence(history: &[PlayerGameweekPerformance], len: usize) -> FormSequence {
    let tail: Vec<&PlayerGameweekPerformance> = history.iter().rev().take(len).rev().collect();
    let pad = len.saturating_sub(tail.len());

    let mut rows = vec![FeatureRow::default(); pad];
    rows.extend(tail.iter().map(|p| feature_row_of(p)));
    FormSequence { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model::{ClubId, DefensiveActions, GameweekId, PlayerId, Venue};

    fn perf(gw: u32, points: i32, goals: u8) -> PlayerGameweekPerformance {
        PlayerGameweekPerformance {
            player: PlayerId(1),
            gameweek: GameweekId(gw),
            minutes: 90,
            goals,
            assists: 0,
            clean_sheet: false,
            goals_conceded: 1,
            saves: 0,
            bonus: 0,
            bps: 20,
            penalties_saved: 0,
            penalties_missed: 0,
            yellow_cards: 0,
            red_cards: 0,
            own_goals: 0,
            influence: 10.0,
            creativity: 10.0,
            threat: 10.0,
            expected_goals: 0.3,
            expected_assists: 0.1,
            defensive: DefensiveActions { tackles: 1, interceptions: 1, clearances_blocks_interceptions: 1, recoveries: 1 },
            actual_points: points,
            opponent: ClubId(2),
            venue: Venue::Home,
        }
    }

    #[test]
    fn form_sequence_zero_pads_short_history() {
        let history = vec![perf(1, 2, 0), perf(2, 5, 1)];
        let seq = build_form_sequence(&history, 5);
        assert_eq!(seq.rows.len(), 5);
        assert_eq!(seq.rows[0], FeatureRow::default());
        assert_eq!(seq.rows[4].points, 5.0);
    }

    #[test]
    fn form_sequence_truncates_long_history_to_most_recent() {
        let history: Vec<_> = (1..=10).map(|gw| perf(gw, gw as i32, 0)).collect();
        let seq = build_form_sequence(&history, 5);
        assert_eq!(seq.rows.len(), 5);
        assert_eq!(seq.rows[4].points, 10.0);
        assert_eq!(seq.rows[0].points, 6.0);
    }

    #[test]
    fn trend_slope_positive_for_rising_points() {
        let history = vec![perf(1, 1, 0), perf(2, 2, 0), perf(3, 3, 0), perf(4, 4, 0), perf(5, 5, 0)];
        let recent: Vec<&PlayerGameweekPerformance> = history.iter().collect();
        let slope = least_squares_slope(&recent);
        assert!((slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn missing_fixture_difficulty_defaults_to_three() {
        let ctx = FixtureContext::default();
        assert_eq!(ctx.difficulty_or_default(), DEFAULT_FIXTURE_DIFFICULTY);
    }

    proptest::proptest! {
        #[test]
        fn minutes_reliability_always_in_unit_range(minutes in 0u16..200) {
            let history = vec![{
                let mut p = perf(1, 0, 0);
                p.minutes = minutes;
                p
            }];
            let player = data_model::Player {
                code: 1,
                season_id: PlayerId(1),
                display_name: "Test".into(),
                position: Position::Mid,
                club: ClubId(1),
                now_cost: 80,
                status: data_model::AvailabilityStatus::Available,
                chance_of_playing_percent: None,
                form: 3.0,
                points_per_game: 3.0,
                total_points: 30,
                minutes: minutes as u32,
                ict: data_model::IctIndices { influence: 0.0, creativity: 0.0, threat: 0.0, ict_index: 0.0 },
                expected_goals: 0.0,
                expected_assists: 0.0,
                selected_by_percent: 5.0,
            };
            let fv = build_feature_vector(&player, &history, FixtureContext::default());
            proptest::prop_assert!(fv.minutes_reliability >= 0.0 && fv.minutes_reliability <= 1.0);
        }
    }
}
