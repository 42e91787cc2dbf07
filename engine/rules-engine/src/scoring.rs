//! 2025/26 closed-form scoring rules.

use data_model::{PlayerGameweekPerformance, Position};

pub const GOAL_POINTS: [(Position, i32); 4] = [
    (Position::Gk, 10),
    (Position::Def, 6),
    (Position::Mid, 5),
    (Position::Fwd, 4),
];

pub const ASSIST_POINTS: i32 = 3;
pub const CLEAN_SHEET_GK_DEF: i32 = 4;
pub const CLEAN_SHEET_MID: i32 = 1;
pub const GOALS_CONCEDED_PENALTY_PER_TWO: i32 = -1;
pub const SAVES_BONUS_PER_THREE: i32 = 1;
pub const PENALTY_SAVED: i32 = 5;
pub const PENALTY_MISSED: i32 = -2;
pub const OWN_GOAL: i32 = -2;
pub const YELLOW_CARD: i32 = -1;
pub const RED_CARD: i32 = -3;
pub const DEF_CONTRIBUTION_THRESHOLD: u16 = 10;
pub const MID_CONTRIBUTION_THRESHOLD: u16 = 12;
pub const DEFENSIVE_CONTRIBUTION_POINTS: i32 = 2;

fn goal_points_for(position: Position) -> i32 {
    GOAL_POINTS.iter().find(|(p, _)| *p == position).map(|(_, pts)| *pts).unwrap()
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointsBreakdown {
    pub minutes: i32,
    pub goals: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub own_goals: i32,
    pub bonus: i32,
    pub defensive_contribution: i32,
}

impl PointsBreakdown {
    pub fn total(&self) -> i32 {
        self.minutes
            + self.goals
            + self.assists
            + self.clean_sheets
            + self.goals_conceded
            + self.saves
            + self.penalties_saved
            + self.penalties_missed
            + self.yellow_cards
            + self.red_cards
            + self.own_goals
            + self.bonus
            + self.defensive_contribution
    }
}

/// Pure closed-form scoring for one player's gameweek performance.
pub fn calculate_points(perf: &PlayerGameweekPerformance, position: Position) -> PointsBreakdown {
    let mut b = PointsBreakdown::default();

    b.minutes = match position {
        Position::Gk | Position::Def => {
            if perf.minutes == 0 {
                0
            } else if perf.minutes < 60 {
                1
            } else {
                2
            }
        }
        Position::Mid | Position::Fwd => {
            if perf.minutes >= 60 {
                2
            } else {
                0
            }
        }
    };

    b.goals = perf.goals as i32 * goal_points_for(position);
    b.assists = perf.assists as i32 * ASSIST_POINTS;

    if perf.minutes >= 60 && perf.clean_sheet {
        b.clean_sheets = match position {
            Position::Gk | Position::Def => CLEAN_SHEET_GK_DEF,
            Position::Mid => CLEAN_SHEET_MID,
            Position::Fwd => 0,
        };
    }

    if matches!(position, Position::Gk | Position::Def) {
        b.goals_conceded = (perf.goals_conceded as i32 / 2) * GOALS_CONCEDED_PENALTY_PER_TWO;
    }

    if position == Position::Gk {
        b.saves = (perf.saves as i32 / 3) * SAVES_BONUS_PER_THREE;
    }

    b.penalties_saved = perf.penalties_saved as i32 * PENALTY_SAVED;
    b.penalties_missed = perf.penalties_missed as i32 * PENALTY_MISSED;
    b.yellow_cards = perf.yellow_cards as i32 * YELLOW_CARD;
    b.red_cards = perf.red_cards as i32 * RED_CARD;
    b.own_goals = perf.own_goals as i32 * OWN_GOAL;
    b.bonus = perf.bonus as i32;

    b.defensive_contribution = match position {
        Position::Def if perf.defensive.defender_contribution_total() >= DEF_CONTRIBUTION_THRESHOLD => {
            DEFENSIVE_CONTRIBUTION_POINTS
        }
        Position::Mid if perf.defensive.midfielder_contribution_total() >= MID_CONTRIBUTION_THRESHOLD => {
            DEFENSIVE_CONTRIBUTION_POINTS
        }
        _ => 0,
    };

    b
}

/// Fixture difficulty multiplier applied to attacking components, 1 (easiest) .. 5 (hardest).
pub fn difficulty_multiplier(difficulty: u8) -> f64 {
    match difficulty {
        1 => 1.30,
        2 => 1.15,
        3 => 1.00,
        4 => 0.85,
        5 => 0.70,
        _ => 1.00,
    }
}

/// Per-90 rate vector used by the fallback expected-points utility. The
/// trained predictor (C4) normally supplies expected points; this exists so
/// the optimiser always has a value to fall back on.
#[derive(Copy, Clone, Debug, Default)]
pub struct Per90Rates {
    pub goals: f64,
    pub assists: f64,
    pub clean_sheet_probability: f64,
    pub defensive_actions: f64,
}

/// Fallback expected-points utility. Not used when a trained predictor is
/// available.
pub fn expected_points_fallback(
    rates: Per90Rates,
    minutes_probability: f64,
    position: Position,
    fixture_difficulty: u8,
) -> f64 {
    let mult = difficulty_multiplier(fixture_difficulty);
    let goal_pts = goal_points_for(position) as f64;

    let attacking = rates.goals * goal_pts * mult + rates.assists * ASSIST_POINTS as f64 * mult;

    let clean_sheet_pts = match position {
        Position::Gk | Position::Def => CLEAN_SHEET_GK_DEF as f64,
        Position::Mid => CLEAN_SHEET_MID as f64,
        Position::Fwd => 0.0,
    };
    let clean_sheet_expected = rates.clean_sheet_probability * mult.min(1.0) * clean_sheet_pts;

    let (threshold, dc_points) = match position {
        Position::Def => (DEF_CONTRIBUTION_THRESHOLD, DEFENSIVE_CONTRIBUTION_POINTS),
        Position::Mid => (MID_CONTRIBUTION_THRESHOLD, DEFENSIVE_CONTRIBUTION_POINTS),
        _ => (u16::MAX, 0),
    };
    let dc_probability = if rates.defensive_actions >= threshold as f64 { 0.8 } else { 0.3 };
    let dc_expected = dc_probability * dc_points as f64;

    let minutes_pts = match position {
        Position::Gk | Position::Def => {
            if minutes_probability > 0.0 {
                2.0
            } else {
                0.0
            }
        }
        Position::Mid | Position::Fwd => 2.0,
    };

    ((attacking + clean_sheet_expected + dc_expected + minutes_pts) * minutes_probability).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model::{DefensiveActions, Venue};

    fn perf(minutes: u16) -> PlayerGameweekPerformance {
        PlayerGameweekPerformance {
            player: data_model::PlayerId(1),
            gameweek: data_model::GameweekId(1),
            minutes,
            goals: 0,
            assists: 0,
            clean_sheet: false,
            goals_conceded: 0,
            saves: 0,
            bonus: 0,
            bps: 0,
            penalties_saved: 0,
            penalties_missed: 0,
            yellow_cards: 0,
            red_cards: 0,
            own_goals: 0,
            influence: 0.0,
            creativity: 0.0,
            threat: 0.0,
            expected_goals: 0.0,
            expected_assists: 0.0,
            defensive: DefensiveActions {
                tackles: 0,
                interceptions: 0,
                clearances_blocks_interceptions: 0,
                recoveries: 0,
            },
            actual_points: 0,
            opponent: data_model::ClubId(2),
            venue: Venue::Home,
        }
    }

    #[test]
    fn minutes_points_def_vs_mid() {
        let mut p = perf(45);
        assert_eq!(calculate_points(&p, Position::Def).minutes, 1);
        assert_eq!(calculate_points(&p, Position::Mid).minutes, 0);
        p.minutes = 60;
        assert_eq!(calculate_points(&p, Position::Def).minutes, 2);
        assert_eq!(calculate_points(&p, Position::Mid).minutes, 2);
    }

    #[test]
    fn defensive_contribution_threshold() {
        let mut p = perf(90);
        p.defensive.tackles = 5;
        p.defensive.interceptions = 4;
        p.defensive.clearances_blocks_interceptions = 0;
        assert_eq!(calculate_points(&p, Position::Def).defensive_contribution, 0);
        p.defensive.clearances_blocks_interceptions = 1;
        assert_eq!(calculate_points(&p, Position::Def).defensive_contribution, 2);
    }

    #[test]
    fn midfielder_defensive_contribution_includes_recoveries() {
        let mut p = perf(90);
        p.defensive.tackles = 4;
        p.defensive.interceptions = 4;
        p.defensive.clearances_blocks_interceptions = 0;
        p.defensive.recoveries = 3;
        assert_eq!(calculate_points(&p, Position::Mid).defensive_contribution, 0);
        p.defensive.recoveries = 4;
        assert_eq!(calculate_points(&p, Position::Mid).defensive_contribution, 2);
    }

    #[test]
    fn goalkeeper_saves_and_goal_value() {
        let mut p = perf(90);
        p.saves = 8;
        p.goals = 1;
        let b = calculate_points(&p, Position::Gk);
        assert_eq!(b.saves, 2);
        assert_eq!(b.goals, 10);
    }

    #[test]
    fn clean_sheet_requires_sixty_minutes() {
        let mut p = perf(59);
        p.clean_sheet = true;
        assert_eq!(calculate_points(&p, Position::Def).clean_sheets, 0);
        p.minutes = 60;
        assert_eq!(calculate_points(&p, Position::Def).clean_sheets, 4);
        assert_eq!(calculate_points(&p, Position::Mid).clean_sheets, 1);
        assert_eq!(calculate_points(&p, Position::Fwd).clean_sheets, 0);
    }
}
